//! The fixed-size cladding grid and its adjacency queries.

use crate::cell::Cell;
use crate::error::GridError;
use leat_core::{CellPos, Connection, Direction};
use smallvec::SmallVec;

/// A fixed-size 2-D board of [`Cell`]s with 4-connected adjacency.
///
/// Rows and columns are bounded by [`Grid::MAX_DIM`]; the boundary is
/// absorbing (edge cells have fewer neighbours — no wrap, no clamp).
/// Cells are stored row-major, and all iteration runs in canonical
/// row-major order so every downstream computation is deterministic.
///
/// # Examples
///
/// ```
/// use leat_core::{CellPos, Direction};
/// use leat_grid::Grid;
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.toggle_cube(CellPos::new(1, 1)).unwrap();
/// grid.toggle_cube(CellPos::new(1, 2)).unwrap();
///
/// assert_eq!(grid.cube_count(), 2);
/// assert_eq!(grid.degree(CellPos::new(1, 1)), 1);
/// assert!(grid.is_exposed(CellPos::new(1, 1), Direction::North));
/// assert!(!grid.is_exposed(CellPos::new(1, 1), Direction::East));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum rows or columns. The editor works on a handful of cells;
    /// this bound keeps every computation trivially cheap.
    pub const MAX_DIM: u16 = 32;

    /// Create an empty `rows × cols` grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`Grid::MAX_DIM`].
    pub fn new(rows: u16, cols: u16) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows as usize * cols as usize],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.cols as usize + pos.col as usize)
    }

    fn checked_index(&self, pos: CellPos) -> Result<usize, GridError> {
        self.index(pos).ok_or(GridError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// The cell at `pos`, or `None` when out of bounds.
    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Whether a cube occupies `pos`. Out-of-bounds positions hold none.
    pub fn has_cube(&self, pos: CellPos) -> bool {
        self.cell(pos).is_some_and(|c| c.has_cube)
    }

    /// The connection recorded at `pos`, if a cube is there.
    pub fn connection(&self, pos: CellPos) -> Option<Connection> {
        self.cell(pos)
            .filter(|c| c.has_cube)
            .map(|c| c.connection)
    }

    /// The in-bounds neighbour of `pos` in `direction`, if any.
    ///
    /// Absorbing boundary: a step off the edge yields `None`.
    pub fn neighbour(&self, pos: CellPos, direction: Direction) -> Option<CellPos> {
        pos.step(direction).filter(|p| self.contains(*p))
    }

    /// The occupied neighbours of `pos`, with the direction toward each,
    /// in canonical direction order.
    pub fn occupied_neighbours(&self, pos: CellPos) -> SmallVec<[(Direction, CellPos); 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| {
                let n = self.neighbour(pos, d)?;
                self.has_cube(n).then_some((d, n))
            })
            .collect()
    }

    /// Number of occupied neighbours of `pos`.
    pub fn degree(&self, pos: CellPos) -> usize {
        self.occupied_neighbours(pos).len()
    }

    /// Whether the face of the cube at `pos` toward `direction` is
    /// exposed: the cube exists and no occupied neighbour lies that way.
    ///
    /// The grid boundary counts as exposure.
    pub fn is_exposed(&self, pos: CellPos, direction: Direction) -> bool {
        self.has_cube(pos)
            && !self
                .neighbour(pos, direction)
                .is_some_and(|n| self.has_cube(n))
    }

    /// The exposed directions of the cube at `pos` in canonical order.
    /// Empty for vacant or out-of-bounds cells.
    pub fn exposed_faces(&self, pos: CellPos) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_exposed(pos, *d))
            .collect()
    }

    /// Exposed faces of the cube at `pos` not yet marked clad, in
    /// canonical order. Serves the coverage display.
    pub fn clad_shortfall(&self, pos: CellPos) -> SmallVec<[Direction; 4]> {
        let Some(cell) = self.cell(pos).filter(|c| c.has_cube) else {
            return SmallVec::new();
        };
        self.exposed_faces(pos)
            .into_iter()
            .filter(|d| !cell.clad.contains(*d))
            .collect()
    }

    /// Iterate the positions of all cubes in canonical row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = CellPos> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.has_cube
                .then(|| CellPos::new((i / cols) as u16, (i % cols) as u16))
        })
    }

    /// Number of cubes on the grid.
    pub fn cube_count(&self) -> usize {
        self.cells.iter().filter(|c| c.has_cube).count()
    }

    // ── Mutations (issued by the external state layer) ──────────

    /// Place or remove a cube. Removing one resets the cell wholesale:
    /// connection and cladding marks are meaningless without the cube.
    pub fn set_cube(&mut self, pos: CellPos, present: bool) -> Result<(), GridError> {
        let i = self.checked_index(pos)?;
        self.cells[i] = if present {
            Cell::cube(self.cells[i].connection)
        } else {
            Cell::EMPTY
        };
        Ok(())
    }

    /// Flip cube occupancy at `pos`; returns the new occupancy.
    pub fn toggle_cube(&mut self, pos: CellPos) -> Result<bool, GridError> {
        let i = self.checked_index(pos)?;
        let present = !self.cells[i].has_cube;
        self.cells[i] = if present { Cell::cube(Connection::EMPTY) } else { Cell::EMPTY };
        Ok(present)
    }

    /// Flip the cladding mark on one face of the cube at `pos`; returns
    /// the new mark state. The cell must hold a cube.
    pub fn toggle_clad(&mut self, pos: CellPos, direction: Direction) -> Result<bool, GridError> {
        let i = self.checked_index(pos)?;
        if !self.cells[i].has_cube {
            return Err(GridError::VacantCell { pos });
        }
        Ok(self.cells[i].clad.toggle(direction))
    }

    /// Record a preset connection on the cube at `pos`. The cell must
    /// hold a cube; the tracer remains the only computational writer.
    pub fn set_connection(&mut self, pos: CellPos, connection: Connection) -> Result<(), GridError> {
        let i = self.checked_index(pos)?;
        if !self.cells[i].has_cube {
            return Err(GridError::VacantCell { pos });
        }
        self.cells[i].connection = connection;
        Ok(())
    }

    /// Discard all cubes, connections, and cladding marks.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Replace the grid contents wholesale with a preset: clear, then
    /// place a cube with the given connection at each listed position.
    pub fn apply(&mut self, cubes: &[(CellPos, Connection)]) -> Result<(), GridError> {
        for (pos, _) in cubes {
            self.checked_index(*pos)?;
        }
        self.clear();
        for (pos, connection) in cubes {
            let i = self.checked_index(*pos)?;
            self.cells[i] = Cell::cube(*connection);
        }
        Ok(())
    }
}
