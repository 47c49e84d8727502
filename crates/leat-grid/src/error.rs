//! Error types for grid construction and mutation.

use leat_core::CellPos;
use std::fmt;

/// Errors arising from grid construction or cell addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid,
    /// A dimension exceeds the fixed small bound.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The offending value.
        value: u16,
        /// The maximum allowed.
        max: u16,
    },
    /// A position is outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: CellPos,
        /// Grid row count.
        rows: u16,
        /// Grid column count.
        cols: u16,
    },
    /// The operation needs a cube at this position, but the cell is empty.
    VacantCell {
        /// The empty cell.
        pos: CellPos,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum of {max}")
            }
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "position {pos} out of bounds for a {rows}×{cols} grid")
            }
            Self::VacantCell { pos } => {
                write!(f, "no cube at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
