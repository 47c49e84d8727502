//! Benchmark layout generators.
//!
//! Deterministic, worst-case-ish layouts at the grid bound: a single
//! serpentine run threading the whole board, and a field of scattered
//! isolated cubes maximizing the run count.

#![forbid(unsafe_code)]

use leat_core::CellPos;
use leat_grid::Grid;

/// One serpentine run covering every other row of a `rows × cols`
/// board, with single-cube connectors joining the row ends.
pub fn serpentine(rows: u16, cols: u16) -> Grid {
    let mut grid = Grid::new(rows, cols).expect("bench dimensions in bounds");
    for row in (0..rows).step_by(2) {
        for col in 0..cols {
            grid.set_cube(CellPos::new(row, col), true)
                .expect("in bounds");
        }
    }
    for row in (1..rows).step_by(2) {
        let col = if (row / 2) % 2 == 0 { cols - 1 } else { 0 };
        grid.set_cube(CellPos::new(row, col), true)
            .expect("in bounds");
    }
    grid
}

/// Isolated cubes on every other row and column: the maximum number of
/// independent single-cube runs a `rows × cols` board can hold.
pub fn scattered(rows: u16, cols: u16) -> Grid {
    let mut grid = Grid::new(rows, cols).expect("bench dimensions in bounds");
    for row in (0..rows).step_by(2) {
        for col in (0..cols).step_by(2) {
            grid.set_cube(CellPos::new(row, col), true)
                .expect("in bounds");
        }
    }
    grid
}
