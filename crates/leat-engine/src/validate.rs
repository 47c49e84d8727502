//! Degree validation and connected-component partitioning.

use crate::cache::RunCache;
use leat_core::{CellPos, LayoutError};
use leat_grid::Grid;
use std::collections::VecDeque;

/// Enforce the single-thread degree rule: every cube may touch at most
/// two other cubes.
///
/// A cube with three or four occupied neighbours is a T- or plus-shaped
/// junction; one such cube invalidates the whole grid — there is no
/// partial validity, and the caller short-circuits to all-zero
/// requirements.
pub fn check_degrees(grid: &Grid) -> Result<(), LayoutError> {
    for pos in grid.occupied() {
        let occupied_neighbours = grid.degree(pos);
        if occupied_neighbours > 2 {
            return Err(LayoutError::BranchingJunction {
                at: pos,
                occupied_neighbours,
            });
        }
    }
    Ok(())
}

/// Partition the grid's cubes into connected components via BFS flood
/// fill, recording each into `cache`.
///
/// Cubes are visited in canonical row-major order, so component
/// discovery order and each component's recorded cell order are
/// deterministic. Call [`check_degrees`] first; partitioning itself
/// accepts any occupancy.
pub fn partition(grid: &Grid, cache: &mut RunCache) {
    for start in grid.occupied() {
        if cache.component_of(start).is_some() {
            continue;
        }
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(pos) = queue.pop_front() {
            for (_, next) in grid.occupied_neighbours(pos) {
                if !component.contains(&next) {
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }
        component.sort();
        cache.record(component);
    }
}
