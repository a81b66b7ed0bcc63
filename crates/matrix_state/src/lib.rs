//! State core for the matrix hover viewer: actions, reducer, selectors and
//! the store that ties them together, plus the random matrix generator the
//! view loads on mount.

pub mod action;
pub mod generator;
pub mod reducer;
pub mod selectors;
mod state;
pub mod store;

pub use action::{Action, HoverPayload};
pub use generator::{generate, generate_seeded, generate_with, CELL_MAX, CELL_MIN, GRID_SIZE};
pub use reducer::reduce;
pub use selectors::{
    compute_highlight, select_grid, select_highlight, select_hovered_id, HighlightSelector,
    HIGHLIGHT_MARGIN,
};
pub use state::MatrixState;
pub use store::{Store, SubscriptionId};
