//! Pure `(state, action) -> state` transitions.

use std::sync::Arc;

use shared::domain::{CellId, Grid};

use crate::{
    action::{Action, HoverPayload},
    state::MatrixState,
};

/// Computes the next snapshot. Returns `state` itself (pointer-equal) when
/// the action changes nothing.
pub fn reduce(state: &Arc<MatrixState>, action: &Action) -> Arc<MatrixState> {
    match action {
        Action::LoadData(grid) => load_data(state, grid),
        Action::HoverCell(payload) => hover_cell(state, payload),
        Action::Unknown => Arc::clone(state),
    }
}

fn load_data(state: &Arc<MatrixState>, grid: &Arc<Grid>) -> Arc<MatrixState> {
    let hovered_id = match state.hovered_id.as_deref() {
        Some(id) if resolves_in(id, grid) => Some(id.to_string()),
        Some(id) => {
            tracing::debug!(
                hovered_id = id,
                "clearing hover that no longer resolves in loaded grid"
            );
            None
        }
        None => None,
    };

    Arc::new(MatrixState {
        data: Arc::clone(grid),
        hovered_id,
    })
}

fn hover_cell(state: &Arc<MatrixState>, payload: &HoverPayload) -> Arc<MatrixState> {
    if state.hovered_id.as_deref() == Some(payload.target_id.as_str()) {
        return Arc::clone(state);
    }

    Arc::new(MatrixState {
        data: Arc::clone(&state.data),
        hovered_id: Some(payload.target_id.clone()),
    })
}

fn resolves_in(id: &str, grid: &Grid) -> bool {
    id.parse::<CellId>()
        .map(|cell| grid.contains(cell))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
