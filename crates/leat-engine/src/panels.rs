//! Panel classification for exposed cube faces.

use leat_core::{Connection, Direction, PanelKind};

/// The fixed layout applied to an isolated cube with no assigned flow:
/// west-to-east, so the west face takes the left cap, the east face the
/// right cap, and the north/south flanks take side panels.
pub const CANONICAL_FLOW: Connection = Connection {
    entry: Some(Direction::West),
    exit: Some(Direction::East),
};

/// Classify one exposed face of a cube.
///
/// The exposed entry face is the upstream end cap (left panel), the
/// exposed exit face the downstream end cap (right panel), and every
/// other exposed face a flank (side panel). Interior cubes never expose
/// their entry or exit faces — those point at neighbours — so caps only
/// appear at the open ends of a run. Cubes without a complete
/// connection use [`CANONICAL_FLOW`].
///
/// Pure reader: exposure is the caller's concern, and nothing here
/// mutates the connection.
pub fn panel_for(connection: &Connection, exposed: Direction) -> PanelKind {
    let flow = if connection.is_complete() {
        *connection
    } else {
        CANONICAL_FLOW
    };
    if flow.entry == Some(exposed) {
        PanelKind::Left
    } else if flow.exit == Some(exposed) {
        PanelKind::Right
    } else {
        PanelKind::Side
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{East, North, South, West};

    #[test]
    fn isolated_cube_uses_canonical_layout() {
        let conn = Connection::EMPTY;
        assert_eq!(panel_for(&conn, North), PanelKind::Side);
        assert_eq!(panel_for(&conn, East), PanelKind::Right);
        assert_eq!(panel_for(&conn, South), PanelKind::Side);
        assert_eq!(panel_for(&conn, West), PanelKind::Left);
    }

    #[test]
    fn caps_follow_the_flow() {
        let conn = Connection::through(North); // entry south, exit north
        assert_eq!(panel_for(&conn, South), PanelKind::Left);
        assert_eq!(panel_for(&conn, North), PanelKind::Right);
        assert_eq!(panel_for(&conn, East), PanelKind::Side);
        assert_eq!(panel_for(&conn, West), PanelKind::Side);
    }

    #[test]
    fn corner_cube_flanks_are_sides() {
        // Entry north, exit east: the exposed faces of such a corner are
        // south and west, both flanks.
        let conn = Connection::new(North, East);
        assert_eq!(panel_for(&conn, South), PanelKind::Side);
        assert_eq!(panel_for(&conn, West), PanelKind::Side);
    }

    #[test]
    fn reversing_flow_swaps_caps_only() {
        let conn = Connection::through(East);
        let reversed = conn.reversed();
        for d in Direction::ALL {
            assert_eq!(panel_for(&conn, d).reversed(), panel_for(&reversed, d));
        }
    }
}
