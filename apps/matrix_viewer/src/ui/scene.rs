//! Backend-neutral render function: state in, draw commands out.

use shared::domain::{CellId, Grid, Highlight};

use crate::ui::layout::{
    axis_offset, cell_center, COL_LABEL_X, LABEL_FONT_SIZE, RING_STROKE_WIDTH, ROW_LABEL_Y,
    SHAPE_OPACITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const CELL_FILL: Rgb = Rgb(0x04, 0x4B, 0x94);
pub const RING_STROKE: Rgb = Rgb(0xFF, 0x00, 0x00);
pub const LABEL_COLOR: Rgb = Rgb(0x00, 0x00, 0x00);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Text whose baseline starts at `at`.
    Label {
        at: [f32; 2],
        text: String,
        font_size: f32,
    },
    Cell {
        id: CellId,
        center: [f32; 2],
        radius: f32,
        fill: Rgb,
        opacity: f32,
    },
    Ring {
        center: [f32; 2],
        radius: f32,
        stroke: Rgb,
        stroke_width: f32,
        opacity: f32,
    },
}

/// Builds the full frame. An empty grid draws nothing, labels included.
///
/// Order is back to front: row labels, column labels, cells, then the ring.
pub fn build_scene(grid: &Grid, highlight: Option<Highlight>) -> Vec<DrawCommand> {
    if grid.is_empty() {
        return Vec::new();
    }

    let rows = grid.row_count();
    let cols = grid.col_count();
    let mut commands = Vec::with_capacity(rows + cols + rows * cols + 1);

    commands.extend((0..rows).map(|row| DrawCommand::Label {
        at: [axis_offset(row), ROW_LABEL_Y],
        text: row.to_string(),
        font_size: LABEL_FONT_SIZE,
    }));
    commands.extend((0..cols).map(|col| DrawCommand::Label {
        at: [COL_LABEL_X, axis_offset(col)],
        text: col.to_string(),
        font_size: LABEL_FONT_SIZE,
    }));
    commands.extend(grid.cells().map(|(id, value)| DrawCommand::Cell {
        id,
        center: cell_center(id.row, id.col),
        radius: value as f32,
        fill: CELL_FILL,
        opacity: SHAPE_OPACITY,
    }));

    if let Some(highlight) = highlight {
        commands.push(DrawCommand::Ring {
            center: cell_center(highlight.x, highlight.y),
            radius: highlight.radius as f32,
            stroke: RING_STROKE,
            stroke_width: RING_STROKE_WIDTH,
            opacity: SHAPE_OPACITY,
        });
    }

    commands
}

/// Topmost cell whose circle contains `point`. Labels and the ring are not
/// hover targets.
pub fn hit_test(commands: &[DrawCommand], point: [f32; 2]) -> Option<CellId> {
    commands.iter().rev().find_map(|command| match command {
        DrawCommand::Cell {
            id, center, radius, ..
        } => {
            let dx = point[0] - center[0];
            let dy = point[1] - center[1];
            (dx * dx + dy * dy <= radius * radius).then_some(*id)
        }
        _ => None,
    })
}

#[cfg(test)]
#[path = "tests/scene_tests.rs"]
mod tests;
