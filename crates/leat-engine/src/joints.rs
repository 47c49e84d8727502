//! Connector classification for the joints between consecutive cubes.

use leat_core::{CellPos, Connection, ConnectorKind, LayoutError, Turn};

/// Classify the joint between two consecutive cubes of a run.
///
/// The continuity invariant is verified first: the upstream exit must be
/// the compass opposite of the downstream entry. The joint kind is then
/// the bend at the downstream cube — a straight coupling when flow
/// passes straight through it, otherwise a corner connector whose
/// chirality comes from the downstream cube's turn.
///
/// # Errors
///
/// [`LayoutError::FlowContinuityMismatch`] when the invariant fails, or
/// when the downstream cube's flow is degenerate (entry equals exit —
/// reported against the cube itself).
pub fn classify_joint(
    upstream_pos: CellPos,
    upstream: &Connection,
    downstream_pos: CellPos,
    downstream: &Connection,
) -> Result<ConnectorKind, LayoutError> {
    let continuous = matches!(
        (upstream.exit, downstream.entry),
        (Some(exit), Some(entry)) if entry == exit.opposite()
    );
    if !continuous {
        return Err(LayoutError::FlowContinuityMismatch {
            upstream: upstream_pos,
            downstream: downstream_pos,
            exit: upstream.exit,
            entry: downstream.entry,
        });
    }
    if downstream.is_straight_through() {
        return Ok(ConnectorKind::Straight);
    }
    match downstream.bend() {
        Some(Turn::Left) => Ok(ConnectorKind::CornerLeft),
        Some(Turn::Right) => Ok(ConnectorKind::CornerRight),
        None => Err(LayoutError::FlowContinuityMismatch {
            upstream: downstream_pos,
            downstream: downstream_pos,
            exit: downstream.exit,
            entry: downstream.entry,
        }),
    }
}
