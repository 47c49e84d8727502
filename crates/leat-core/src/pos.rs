//! Grid cell positions.

use crate::direction::Direction;
use std::fmt;

/// A `(row, col)` position on the cladding grid.
///
/// Row 0 is the north edge, column 0 the west edge. The derived ordering
/// is row-major, which is the canonical visiting order everywhere in the
/// engine (partitioning, tracing tie-breaks, survey iteration).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    /// Row index, growing southward.
    pub row: u16,
    /// Column index, growing eastward.
    pub col: u16,
}

impl CellPos {
    /// Create a position from row and column indices.
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// The position one step away in `direction`, or `None` when the
    /// step would leave the non-negative coordinate domain.
    ///
    /// Grid bounds are not known here and are applied by the grid layer;
    /// this only rejects steps off the north/west edges (row or column
    /// underflow).
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr as i16)?;
        let col = self.col.checked_add_signed(dc as i16)?;
        Some(Self { row, col })
    }

    /// The direction from `self` to an adjacent position, or `None` when
    /// the positions are not 4-adjacent.
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| self.step(*d) == Some(other))
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
