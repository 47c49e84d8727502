//! A single grid cell.

use leat_core::{Connection, DirectionSet};

/// One cell of the cladding grid.
///
/// A cell is empty or holds a cube. Cubes carry a flow [`Connection`]
/// (assigned by the tracer, or supplied by a preset) and the set of
/// faces the user has marked as clad. The cladding marks are editable
/// presentation state; the engine computes what each face *requires*
/// independently of what is marked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Whether a cube occupies this cell.
    pub has_cube: bool,
    /// The cube's flow connection, if any has been assigned.
    pub connection: Connection,
    /// Faces the user has marked as clad.
    pub clad: DirectionSet,
}

impl Cell {
    /// An empty cell.
    pub const EMPTY: Self = Self {
        has_cube: false,
        connection: Connection::EMPTY,
        clad: DirectionSet::EMPTY,
    };

    /// A cube with the given connection and no cladding marks.
    pub fn cube(connection: Connection) -> Self {
        Self {
            has_cube: true,
            connection,
            clad: DirectionSet::EMPTY,
        }
    }
}
