//! Canonical layouts used as regression fixtures across the workspace.

use crate::diagram::grid_from_diagram;
use leat_grid::Grid;

/// One isolated cube on a 3×3 board.
pub fn single_cube() -> Grid {
    grid_from_diagram(&[
        "...", //
        ".#.",
        "...",
    ])
}

/// Three cubes in a west-to-east line.
pub fn line3() -> Grid {
    grid_from_diagram(&[
        ".....", //
        ".###.",
        ".....",
    ])
}

/// Three cubes with one 90° turn.
pub fn elbow3() -> Grid {
    grid_from_diagram(&[
        "....", //
        ".##.",
        "..#.",
        "....",
    ])
}

/// Five cubes with two 90° turns of the same chirality.
pub fn channel5() -> Grid {
    grid_from_diagram(&[
        ".....", //
        ".#.#.",
        ".###.",
        ".....",
    ])
}

/// The forbidden plus-shaped cluster: a centre cube with four occupied
/// neighbours.
pub fn plus_cluster() -> Grid {
    grid_from_diagram(&[
        ".#.", //
        "###",
        ".#.",
    ])
}

/// A 2×2 block: every cube has degree 2, but the loop has no open end.
pub fn square_block() -> Grid {
    grid_from_diagram(&[
        "....", //
        ".##.",
        ".##.",
        "....",
    ])
}
