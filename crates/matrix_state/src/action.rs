//! Actions dispatched to the store.

use std::sync::Arc;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use shared::domain::{CellId, Grid};

/// Pointer-enter context for a shape in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverPayload {
    /// Identifier of the entered shape, `"row-col"` for cells.
    pub target_id: String,
    /// Pointer position in canvas coordinates, when known.
    #[serde(default)]
    pub pointer: Option<[f32; 2]>,
}

impl HoverPayload {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            pointer: None,
        }
    }

    pub fn for_cell(cell: CellId) -> Self {
        Self::new(cell.to_string())
    }

    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = Some([x, y]);
        self
    }
}

/// Tagged as `{"type": ..., "payload": ...}` so recorded action logs replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    LoadData(Arc<Grid>),
    HoverCell(HoverPayload),
    /// Any kind the reducer does not handle. Its payload, if any, is dropped.
    Unknown,
}

#[derive(Deserialize)]
struct TaggedAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let TaggedAction { kind, payload } = TaggedAction::deserialize(deserializer)?;
        match kind.as_str() {
            "LOAD_DATA" => serde_json::from_value(payload)
                .map(Self::LoadData)
                .map_err(D::Error::custom),
            "HOVER_CELL" => serde_json::from_value(payload)
                .map(Self::HoverCell)
                .map_err(D::Error::custom),
            _ => Ok(Self::Unknown),
        }
    }
}

impl Action {
    pub fn load_data(grid: impl Into<Arc<Grid>>) -> Self {
        Self::LoadData(grid.into())
    }

    pub fn hover_cell(target_id: impl Into<String>) -> Self {
        Self::HoverCell(HoverPayload::new(target_id))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::LoadData(_) => "LOAD_DATA",
            Self::HoverCell(_) => "HOVER_CELL",
            Self::Unknown => "UNKNOWN",
        }
    }
}
