use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Separator between the row and column parts of a cell identifier.
pub const CELL_ID_SEPARATOR: char = '-';

/// Row-major matrix of non-negative cell values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(Vec<Vec<u32>>);

impl Grid {
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.0
    }

    pub fn row_count(&self) -> usize {
        self.0.len()
    }

    /// Length of the widest row; rows are expected to share one length.
    pub fn col_count(&self) -> usize {
        self.0.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.0.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.get(cell.row, cell.col).is_some()
    }

    /// Iterates `(cell, value)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, u32)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, value)| (CellId::new(row, col), *value))
        })
    }
}

impl From<Vec<Vec<u32>>> for Grid {
    fn from(rows: Vec<Vec<u32>>) -> Self {
        Self(rows)
    }
}

/// Parsed form of a `"row-col"` cell identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{CELL_ID_SEPARATOR}{}", self.row, self.col)
    }
}

impl FromStr for CellId {
    type Err = StateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || StateError::MalformedCellId { id: raw.to_string() };
        let (row, col) = raw.split_once(CELL_ID_SEPARATOR).ok_or_else(malformed)?;
        let index = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<usize>().map_err(|_| malformed())
        };
        Ok(Self {
            row: index(row)?,
            col: index(col)?,
        })
    }
}

/// Geometry of the ring drawn around the hovered cell.
///
/// `x` is the row index and `y` the column index, matching the axis the
/// view lays rows out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub x: usize,
    pub y: usize,
    pub radius: u32,
}
