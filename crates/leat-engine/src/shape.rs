//! Diagnostic shape labels for traced runs.

use crate::trace::Run;
use std::fmt;

/// A human-readable label for a run's overall shape.
///
/// Purely diagnostic — the presentation layer may surface it, but no
/// requirement number is ever derived from it. Every count comes from
/// the general per-face and per-joint classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunShape {
    /// One isolated cube.
    Single,
    /// Two or more cubes with no corner.
    Straight,
    /// Exactly one corner.
    Elbow,
    /// Two corners of the same chirality (a U).
    Channel,
    /// Anything more contorted.
    Winding,
}

impl RunShape {
    /// Derive the label from a traced run.
    pub fn of(run: &Run) -> Self {
        if run.is_single() {
            return Self::Single;
        }
        match run.turns().as_slice() {
            [] => Self::Straight,
            [_] => Self::Elbow,
            [a, b] if a == b => Self::Channel,
            _ => Self::Winding,
        }
    }

}

impl fmt::Display for RunShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single cube"),
            Self::Straight => write!(f, "straight run"),
            Self::Elbow => write!(f, "elbow"),
            Self::Channel => write!(f, "channel"),
            Self::Winding => write!(f, "winding run"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::trace;
    use crate::validate::partition;
    use crate::RunCache;
    use leat_grid::Grid;
    use leat_test_utils::grid_from_diagram;

    fn shape_of(grid: &Grid) -> Vec<RunShape> {
        let mut cache = RunCache::new();
        partition(grid, &mut cache);
        cache
            .components()
            .map(|c| trace(grid, c, false).unwrap().shape())
            .collect()
    }

    #[test]
    fn labels_for_canonical_layouts() {
        assert_eq!(shape_of(&grid_from_diagram(&["#"])), vec![RunShape::Single]);
        assert_eq!(
            shape_of(&grid_from_diagram(&["###"])),
            vec![RunShape::Straight]
        );
        assert_eq!(
            shape_of(&grid_from_diagram(&[".#", "##"])),
            vec![RunShape::Elbow]
        );
        assert_eq!(
            shape_of(&grid_from_diagram(&["#.#", "###"])),
            vec![RunShape::Channel]
        );
    }

    #[test]
    fn zigzag_is_winding() {
        let grid = grid_from_diagram(&[
            "##.", //
            ".##",
            "..#",
        ]);
        assert_eq!(shape_of(&grid), vec![RunShape::Winding]);
    }

    #[test]
    fn one_label_per_run() {
        let grid = grid_from_diagram(&["#.#"]);
        assert_eq!(
            shape_of(&grid),
            vec![RunShape::Single, RunShape::Single]
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(RunShape::Channel.to_string(), "channel");
        assert_eq!(RunShape::Single.to_string(), "single cube");
    }
}
