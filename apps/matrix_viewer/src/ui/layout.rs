//! Canvas geometry shared by the egui and SVG backends.

/// Width and height of the drawing surface.
pub const CANVAS_SIZE: f32 = 800.0;
/// Canvas offset of cell `0-0`.
pub const GRID_ORIGIN: f32 = 50.0;
/// Distance between neighbouring cell centres.
pub const CELL_SPACING: f32 = 15.0;
/// Largest grid side whose cells and hover ring stay on the canvas.
pub const MAX_GRID_SIZE: usize = 50;
/// Baseline of the row-index labels along the top edge.
pub const ROW_LABEL_Y: f32 = 30.0;
/// Left edge of the column-index labels down the side.
pub const COL_LABEL_X: f32 = 20.0;
pub const LABEL_FONT_SIZE: f32 = 8.0;

pub const SHAPE_OPACITY: f32 = 0.4;
pub const RING_STROKE_WIDTH: f32 = 3.0;

/// Position along either axis of the cell with the given index.
pub fn axis_offset(index: usize) -> f32 {
    GRID_ORIGIN + index as f32 * CELL_SPACING
}

/// Rows run along x and columns along y.
pub fn cell_center(row: usize, col: usize) -> [f32; 2] {
    [axis_offset(row), axis_offset(col)]
}
