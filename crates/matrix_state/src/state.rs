use std::sync::Arc;

use shared::domain::Grid;

/// Root state tree owned by [`crate::Store`].
///
/// Fields are crate-private so only the reducer builds new snapshots; views
/// read through the selectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixState {
    pub(crate) data: Arc<Grid>,
    pub(crate) hovered_id: Option<String>,
}

impl MatrixState {
    pub fn new(data: impl Into<Arc<Grid>>, hovered_id: Option<String>) -> Self {
        Self {
            data: data.into(),
            hovered_id,
        }
    }
}
