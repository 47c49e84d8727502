//! Path tracing: ordering a component into a run and assigning flow.

use crate::shape::RunShape;
use leat_core::{CellPos, Connection, Direction, LayoutError, Turn};
use leat_grid::Grid;

/// An ordered, maximal chain of adjacent cubes with an assigned flow.
///
/// Produced only by [`trace`] — the single writer of connections. A run
/// of one cube has an unset connection (no natural flow direction); a
/// run of two or more is ordered from one open end to the other, and
/// every adjacent pair satisfies the continuity invariant: the upstream
/// exit is the compass opposite of the downstream entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    cells: Vec<CellPos>,
    connections: Vec<Connection>,
}

impl Run {
    /// Number of cubes in the run.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the run is a single isolated cube.
    pub fn is_single(&self) -> bool {
        self.cells.len() == 1
    }

    /// Always returns `false` — a run holds at least one cube.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The cells in path order.
    pub fn cells(&self) -> &[CellPos] {
        &self.cells
    }

    /// The first and last cells of the path.
    pub fn endpoints(&self) -> (CellPos, CellPos) {
        (self.cells[0], self.cells[self.cells.len() - 1])
    }

    /// The connection assigned to `pos`, if the cell belongs to this run.
    pub fn connection_at(&self, pos: CellPos) -> Option<Connection> {
        self.cells
            .iter()
            .position(|c| *c == pos)
            .map(|i| self.connections[i])
    }

    /// Iterate `(cell, connection)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, Connection)> + '_ {
        self.cells
            .iter()
            .copied()
            .zip(self.connections.iter().copied())
    }

    /// Iterate consecutive `(upstream, downstream)` link pairs in path
    /// order, each as `(cell, connection)`.
    pub fn links(
        &self,
    ) -> impl Iterator<Item = ((CellPos, Connection), (CellPos, Connection))> + '_ {
        (0..self.cells.len().saturating_sub(1)).map(|i| {
            (
                (self.cells[i], self.connections[i]),
                (self.cells[i + 1], self.connections[i + 1]),
            )
        })
    }

    /// The chirality of each corner cube, in path order.
    pub fn turns(&self) -> Vec<Turn> {
        self.connections.iter().filter_map(Connection::bend).collect()
    }

    /// Number of corner cubes in the run.
    pub fn corner_count(&self) -> usize {
        self.turns().len()
    }

    /// Diagnostic shape label. Never consulted for requirement numbers.
    pub fn shape(&self) -> RunShape {
        RunShape::of(self)
    }
}

/// Order a connected component into a [`Run`] and assign flow.
///
/// `component` must be one of the cell lists recorded by
/// [`partition`](crate::partition): connected, degree ≤ 2, canonically
/// sorted.
///
/// A single cube keeps an unset connection unless it carries a complete,
/// non-degenerate preset, which is respected verbatim. For longer
/// components the two degree-1 open ends are located (a component
/// without one is a closed loop and cannot be traced); if every cell
/// carries a complete preset consistent with the path geometry, the
/// preset flow is respected verbatim — in whichever of the two path
/// orientations it runs. Otherwise flow is assigned by walking from the
/// canonically first open end: each cube exits toward its successor,
/// each entry is the opposite of the predecessor's exit, and the two
/// ends are forced straight-through.
///
/// # Errors
///
/// [`LayoutError::UntraceableRun`] for closed loops;
/// [`LayoutError::FlowContinuityMismatch`] when presets disagree across
/// a joint and `repair_flow` is off. With `repair_flow` on, mismatched
/// entries are overwritten with the opposite of the adjacent exit, and
/// presets whose exits no longer follow the path geometry at all are
/// discarded in favour of a fresh trace.
pub fn trace(grid: &Grid, component: &[CellPos], repair_flow: bool) -> Result<Run, LayoutError> {
    if component.len() == 1 {
        let pos = component[0];
        let preset = grid.connection(pos).unwrap_or(Connection::EMPTY);
        let connection = if preset.is_complete() && preset.entry != preset.exit {
            preset
        } else {
            Connection::EMPTY
        };
        return Ok(Run {
            cells: vec![pos],
            connections: vec![connection],
        });
    }

    let (cells, steps) = order_path(grid, component)?;

    let presets: Vec<Connection> = cells
        .iter()
        .map(|p| grid.connection(*p).unwrap_or(Connection::EMPTY))
        .collect();
    if presets.iter().all(Connection::is_complete) {
        if let Some(run) = adopt_presets(&cells, &steps, &presets, repair_flow)? {
            return Ok(run);
        }
    }

    let mut connections = Vec::with_capacity(cells.len());
    connections.push(Connection::through(steps[0]));
    for i in 1..cells.len() - 1 {
        connections.push(Connection::new(steps[i - 1].opposite(), steps[i]));
    }
    connections.push(Connection::through(steps[steps.len() - 1]));
    Ok(Run { cells, connections })
}

/// Walk the component from its canonically first open end, returning the
/// cells in path order and the step direction of each link.
fn order_path(
    grid: &Grid,
    component: &[CellPos],
) -> Result<(Vec<CellPos>, Vec<Direction>), LayoutError> {
    let untraceable = || LayoutError::UntraceableRun {
        start: component[0],
        cells: component.len(),
    };
    // The component is sorted, so the first degree-1 cell is the
    // canonical choice of starting end.
    let start = component
        .iter()
        .copied()
        .find(|p| grid.degree(*p) == 1)
        .ok_or_else(untraceable)?;

    let mut cells = vec![start];
    let mut steps = Vec::with_capacity(component.len() - 1);
    let mut prev: Option<CellPos> = None;
    let mut current = start;
    // Degree ≤ 2 makes the next cell unambiguous; the length bound keeps
    // the walk finite even on malformed input.
    while cells.len() < component.len() {
        let Some((direction, next)) = grid
            .occupied_neighbours(current)
            .into_iter()
            .find(|(_, n)| Some(*n) != prev)
        else {
            break;
        };
        steps.push(direction);
        prev = Some(current);
        current = next;
        cells.push(current);
    }
    if cells.len() != component.len() {
        return Err(untraceable());
    }
    Ok((cells, steps))
}

/// Try to respect a complete preset flow verbatim.
///
/// Returns `Ok(Some(run))` on adoption (possibly with repaired entries),
/// `Ok(None)` when the presets should be discarded for a fresh trace,
/// and an error for a continuity mismatch without `repair_flow`.
fn adopt_presets(
    cells: &[CellPos],
    steps: &[Direction],
    presets: &[Connection],
    repair_flow: bool,
) -> Result<Option<Run>, LayoutError> {
    let forward = (0..steps.len()).all(|i| presets[i].exit == Some(steps[i]));
    if forward {
        return adopt_oriented(cells, steps, presets, repair_flow);
    }

    let backward = (0..steps.len()).all(|i| presets[i + 1].exit == Some(steps[i].opposite()));
    if backward {
        // The preset flow runs against the walk order; reverse the path
        // so the run's order follows the flow.
        let cells: Vec<CellPos> = cells.iter().rev().copied().collect();
        let steps: Vec<Direction> = steps.iter().rev().map(|d| d.opposite()).collect();
        let presets: Vec<Connection> = presets.iter().rev().copied().collect();
        return adopt_oriented(&cells, &steps, &presets, repair_flow);
    }

    if repair_flow {
        // Exits do not follow the path geometry in either orientation;
        // rebuild the flow from scratch.
        return Ok(None);
    }
    let i = (0..steps.len())
        .find(|i| presets[*i].exit != Some(steps[*i]))
        .unwrap_or(0);
    Err(LayoutError::FlowContinuityMismatch {
        upstream: cells[i],
        downstream: cells[i + 1],
        exit: presets[i].exit,
        entry: presets[i + 1].entry,
    })
}

/// Adopt presets whose exits follow the path orientation, verifying (or
/// with `repair_flow`, overwriting) each downstream entry.
fn adopt_oriented(
    cells: &[CellPos],
    steps: &[Direction],
    presets: &[Connection],
    repair_flow: bool,
) -> Result<Option<Run>, LayoutError> {
    let mut connections = presets.to_vec();
    for i in 0..steps.len() {
        let expected = steps[i].opposite();
        if connections[i + 1].entry != Some(expected) {
            if !repair_flow {
                return Err(LayoutError::FlowContinuityMismatch {
                    upstream: cells[i],
                    downstream: cells[i + 1],
                    exit: connections[i].exit,
                    entry: connections[i + 1].entry,
                });
            }
            connections[i + 1].entry = Some(expected);
        }
    }
    // A repair can leave a cube entering and exiting through the same
    // face; such a flow is unusable, so fall back to a fresh trace.
    if connections
        .iter()
        .any(|c| c.is_complete() && c.entry == c.exit)
    {
        return Ok(None);
    }
    Ok(Some(Run {
        cells: cells.to_vec(),
        connections,
    }))
}
