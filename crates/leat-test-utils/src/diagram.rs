//! ASCII-diagram grid construction.

use leat_core::CellPos;
use leat_grid::Grid;

/// Build a grid from rows of `#` (cube) and `.` (empty).
///
/// The grid's dimensions are the diagram's. Panics on ragged rows or
/// unknown characters — this is test tooling, not input parsing.
///
/// ```
/// use leat_test_utils::grid_from_diagram;
///
/// let grid = grid_from_diagram(&[
///     "##.",
///     ".#.",
/// ]);
/// assert_eq!(grid.cube_count(), 3);
/// ```
pub fn grid_from_diagram(rows: &[&str]) -> Grid {
    assert!(!rows.is_empty(), "diagram needs at least one row");
    let width = rows[0].chars().count();
    let mut grid = Grid::new(rows.len() as u16, width as u16).expect("diagram exceeds grid bounds");
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count(),
            width,
            "diagram row {r} has a different width"
        );
        for (c, ch) in row.chars().enumerate() {
            match ch {
                '#' => grid
                    .set_cube(CellPos::new(r as u16, c as u16), true)
                    .expect("diagram cell in bounds"),
                '.' => {}
                other => panic!("unknown diagram character {other:?}"),
            }
        }
    }
    grid
}
