//! The layout error taxonomy.
//!
//! Every error here is recoverable at the grid level: the engine reports
//! the tag, the caller displays all-zero requirements alongside it, and
//! the next mutation recomputes from a clean slate. Nothing panics past
//! the engine boundary.

use crate::direction::Direction;
use crate::pos::CellPos;
use std::error::Error;
use std::fmt;

/// Why a grid snapshot could not be turned into a bill of materials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A cube has more than two occupied neighbours, forming a forbidden
    /// T- or plus-shaped junction. Invalidates the whole grid.
    BranchingJunction {
        /// The over-connected cube.
        at: CellPos,
        /// Its occupied-neighbour count (3 or 4).
        occupied_neighbours: usize,
    },
    /// Externally supplied entry/exit directions disagree across a joint:
    /// the upstream exit is not the compass opposite of the downstream
    /// entry.
    FlowContinuityMismatch {
        /// The upstream cube of the offending joint.
        upstream: CellPos,
        /// The downstream cube of the offending joint.
        downstream: CellPos,
        /// The upstream cube's exit face, if assigned.
        exit: Option<Direction>,
        /// The downstream cube's entry face, if assigned.
        entry: Option<Direction>,
    },
    /// A connected component cannot be ordered into a linear run — it has
    /// no open end (a closed loop such as a 2×2 block), or preset data
    /// left it malformed.
    UntraceableRun {
        /// The component's first cell in canonical order.
        start: CellPos,
        /// Number of cubes in the component.
        cells: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BranchingJunction {
                at,
                occupied_neighbours,
            } => write!(
                f,
                "branching junction at {at}: {occupied_neighbours} occupied \
                 neighbours (at most 2 allowed)"
            ),
            Self::FlowContinuityMismatch {
                upstream,
                downstream,
                exit,
                entry,
            } => {
                let exit = exit.map_or("unset".to_string(), |d| d.to_string());
                let entry = entry.map_or("unset".to_string(), |d| d.to_string());
                write!(
                    f,
                    "flow continuity mismatch between {upstream} and {downstream}: \
                     exit {exit} does not oppose entry {entry}"
                )
            }
            Self::UntraceableRun { start, cells } => write!(
                f,
                "run starting at {start} ({cells} cubes) has no open end and \
                 cannot be traced"
            ),
        }
    }
}

impl Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branching_message_names_the_cell() {
        let err = LayoutError::BranchingJunction {
            at: CellPos::new(1, 2),
            occupied_neighbours: 3,
        };
        assert_eq!(
            err.to_string(),
            "branching junction at (1, 2): 3 occupied neighbours (at most 2 allowed)"
        );
    }

    #[test]
    fn continuity_message_handles_unset_faces() {
        let err = LayoutError::FlowContinuityMismatch {
            upstream: CellPos::new(0, 0),
            downstream: CellPos::new(0, 1),
            exit: Some(Direction::East),
            entry: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("exit east"));
        assert!(msg.contains("entry unset"));
    }

    #[test]
    fn untraceable_message() {
        let err = LayoutError::UntraceableRun {
            start: CellPos::new(2, 2),
            cells: 4,
        };
        assert!(err.to_string().contains("no open end"));
    }

    #[test]
    fn implements_std_error() {
        fn takes_error(_: &dyn Error) {}
        takes_error(&LayoutError::UntraceableRun {
            start: CellPos::new(0, 0),
            cells: 4,
        });
    }
}
