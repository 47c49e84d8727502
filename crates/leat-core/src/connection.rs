//! Flow connections: the entry/exit direction pair carried by each cube.

use crate::direction::Direction;
use std::fmt;

/// Rotational sense of a 90° turn between a cube's entry and exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Flow bends to the left of the incoming travel direction.
    Left,
    /// Flow bends to the right of the incoming travel direction.
    Right,
}

impl Turn {
    /// Chirality of the turn from an entry face to an exit face.
    ///
    /// The incoming travel direction is `entry.opposite()`; the result is
    /// `Left`/`Right` when the exit lies on the corresponding perpendicular,
    /// and `None` when the flow passes straight through. An `entry == exit`
    /// reversal also yields `None`: it is geometrically impossible for a
    /// traced run and is rejected as a continuity error before
    /// classification ever sees it.
    pub fn between(entry: Direction, exit: Direction) -> Option<Self> {
        let travel = entry.opposite();
        if exit == travel.left() {
            Some(Self::Left)
        } else if exit == travel.right() {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// The opposite chirality.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// The compass directions through which flow enters and leaves a cube.
///
/// The path tracer is the canonical writer: it assigns a complete
/// connection to every cube of a traced run, and classification reads
/// the result. Presets may supply connections as input; the tracer
/// respects them verbatim when they are mutually consistent.
///
/// An isolated cube carries [`Connection::EMPTY`] — it has no natural
/// flow direction, and classification falls back to the canonical
/// west-to-east layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Face through which flow enters, if assigned.
    pub entry: Option<Direction>,
    /// Face through which flow leaves, if assigned.
    pub exit: Option<Direction>,
}

impl Connection {
    /// No flow assigned (isolated cube, or not yet traced).
    pub const EMPTY: Self = Self {
        entry: None,
        exit: None,
    };

    /// A fully specified connection.
    pub fn new(entry: Direction, exit: Direction) -> Self {
        Self {
            entry: Some(entry),
            exit: Some(exit),
        }
    }

    /// A straight-through connection exiting toward `exit`, entry forced
    /// to the opposite face. Used for the open ends of a run.
    pub fn through(exit: Direction) -> Self {
        Self::new(exit.opposite(), exit)
    }

    /// Whether neither face is assigned.
    pub fn is_unset(&self) -> bool {
        self.entry.is_none() && self.exit.is_none()
    }

    /// Whether both faces are assigned.
    pub fn is_complete(&self) -> bool {
        self.entry.is_some() && self.exit.is_some()
    }

    /// Whether flow passes straight through (entry and exit opposite).
    pub fn is_straight_through(&self) -> bool {
        match (self.entry, self.exit) {
            (Some(entry), Some(exit)) => exit == entry.opposite(),
            _ => false,
        }
    }

    /// Chirality of the bend, if this connection turns a corner.
    ///
    /// `None` for straight-through, incomplete, or degenerate
    /// (entry == exit) connections.
    pub fn bend(&self) -> Option<Turn> {
        match (self.entry, self.exit) {
            (Some(entry), Some(exit)) => Turn::between(entry, exit),
            _ => None,
        }
    }

    /// The connection with flow running the other way (entry/exit swapped).
    pub fn reversed(&self) -> Self {
        Self {
            entry: self.exit,
            exit: self.entry,
        }
    }

    /// Presentation-only orientation hint: clockwise quarter turns from
    /// the canonical west entry, derived from the entry face.
    ///
    /// Not authoritative — renderers use it to rotate cube sprites, and
    /// nothing in the engine reads it back. Unset connections report 0.
    pub fn orientation(&self) -> u8 {
        match self.entry {
            Some(Direction::West) | None => 0,
            Some(Direction::North) => 1,
            Some(Direction::East) => 2,
            Some(Direction::South) => 3,
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.entry, self.exit) {
            (Some(entry), Some(exit)) => write!(f, "{entry}→{exit}"),
            (Some(entry), None) => write!(f, "{entry}→?"),
            (None, Some(exit)) => write!(f, "?→{exit}"),
            (None, None) => write!(f, "unset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{East, North, South, West};

    // ── Turn tests ──────────────────────────────────────────────

    #[test]
    fn turn_left_and_right() {
        // Entering from the west (travelling east): north is a left
        // turn, south a right turn.
        assert_eq!(Turn::between(West, North), Some(Turn::Left));
        assert_eq!(Turn::between(West, South), Some(Turn::Right));
        // Entering from the north (travelling south).
        assert_eq!(Turn::between(North, East), Some(Turn::Left));
        assert_eq!(Turn::between(North, West), Some(Turn::Right));
    }

    #[test]
    fn turn_straight_and_reversal_are_none() {
        assert_eq!(Turn::between(West, East), None);
        assert_eq!(Turn::between(West, West), None);
    }

    #[test]
    fn turn_mirror() {
        assert_eq!(Turn::Left.mirrored(), Turn::Right);
        assert_eq!(Turn::Right.mirrored(), Turn::Left);
    }

    // ── Connection tests ────────────────────────────────────────

    #[test]
    fn through_forces_opposite_entry() {
        let c = Connection::through(East);
        assert_eq!(c.entry, Some(West));
        assert_eq!(c.exit, Some(East));
        assert!(c.is_straight_through());
        assert_eq!(c.bend(), None);
    }

    #[test]
    fn corner_connection_bends() {
        let c = Connection::new(West, North);
        assert!(!c.is_straight_through());
        assert_eq!(c.bend(), Some(Turn::Left));
        assert_eq!(c.reversed().bend(), Some(Turn::Right));
    }

    #[test]
    fn reversal_swaps_faces() {
        let c = Connection::new(North, East);
        let r = c.reversed();
        assert_eq!(r.entry, Some(East));
        assert_eq!(r.exit, Some(North));
    }

    #[test]
    fn empty_is_unset() {
        assert!(Connection::EMPTY.is_unset());
        assert!(!Connection::EMPTY.is_complete());
        assert_eq!(Connection::EMPTY.bend(), None);
    }

    #[test]
    fn orientation_follows_entry() {
        assert_eq!(Connection::through(East).orientation(), 0); // entry west
        assert_eq!(Connection::through(South).orientation(), 1); // entry north
        assert_eq!(Connection::through(West).orientation(), 2); // entry east
        assert_eq!(Connection::through(North).orientation(), 3); // entry south
        assert_eq!(Connection::EMPTY.orientation(), 0);
    }

    #[test]
    fn display_arrow_form() {
        assert_eq!(Connection::new(West, East).to_string(), "west→east");
        assert_eq!(Connection::EMPTY.to_string(), "unset");
    }
}
