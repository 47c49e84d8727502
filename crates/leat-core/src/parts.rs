//! Panel and connector kinds, and the requirement counters they feed.

use std::fmt;

/// Classification of a single exposed cube face.
///
/// Faces parallel to the local flow are side panels; the two end caps of
/// a run (the exposed entry face upstream, the exposed exit face
/// downstream) take the left and right panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// A flank panel parallel to the flow axis.
    Side,
    /// The upstream end cap, covering an exposed entry face.
    Left,
    /// The downstream end cap, covering an exposed exit face.
    Right,
}

impl PanelKind {
    /// The kind this panel becomes when the run's flow is reversed.
    ///
    /// Reversal swaps the two end caps and leaves flanks untouched.
    pub fn reversed(self) -> Self {
        match self {
            Self::Side => Self::Side,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Side => write!(f, "side"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Classification of the joint between two consecutive cubes in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    /// A straight coupling: flow continues through the downstream cube.
    Straight,
    /// A corner connector turning left at the downstream cube.
    CornerLeft,
    /// A corner connector turning right at the downstream cube.
    CornerRight,
}

impl ConnectorKind {
    /// Whether this joint needs a corner connector.
    pub fn is_corner(self) -> bool {
        !matches!(self, Self::Straight)
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => write!(f, "straight"),
            Self::CornerLeft => write!(f, "corner-left"),
            Self::CornerRight => write!(f, "corner-right"),
        }
    }
}

/// Unbundled requirement totals summed across every run on the grid.
///
/// Produced by the aggregation fold over per-face and per-joint
/// classifications; consumed by the packer. Corner chirality is not
/// carried here — left and right corners need the same connector part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawRequirements {
    /// Flank panels.
    pub side_panels: u32,
    /// Upstream end caps.
    pub left_panels: u32,
    /// Downstream end caps.
    pub right_panels: u32,
    /// Straight couplings between consecutive cubes.
    pub straight_couplings: u32,
    /// Corner connectors between consecutive cubes.
    pub corner_connectors: u32,
}

impl RawRequirements {
    /// All counters zero.
    pub const ZERO: Self = Self {
        side_panels: 0,
        left_panels: 0,
        right_panels: 0,
        straight_couplings: 0,
        corner_connectors: 0,
    };

    /// Count one classified face.
    pub fn add_panel(&mut self, kind: PanelKind) {
        match kind {
            PanelKind::Side => self.side_panels += 1,
            PanelKind::Left => self.left_panels += 1,
            PanelKind::Right => self.right_panels += 1,
        }
    }

    /// Count one classified joint.
    pub fn add_connector(&mut self, kind: ConnectorKind) {
        if kind.is_corner() {
            self.corner_connectors += 1;
        } else {
            self.straight_couplings += 1;
        }
    }

    /// Total panels of all kinds.
    pub fn total_panels(&self) -> u32 {
        self.side_panels + self.left_panels + self.right_panels
    }

    /// Total connectors of both kinds.
    pub fn total_connectors(&self) -> u32 {
        self.straight_couplings + self.corner_connectors
    }

    /// Whether every counter is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Purchasable bundle counts plus unavoidable loose parts.
///
/// A four-pack holds 2 side + 1 left + 1 right panel; a two-pack holds
/// 2 side panels. Couplings and corner connectors are never bundled and
/// pass through from [`RawRequirements`] unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedRequirements {
    /// Four-packs (2 side + 1 left + 1 right each).
    pub four_packs: u32,
    /// Two-packs (2 side each).
    pub two_packs: u32,
    /// Side panels left over after bundling.
    pub loose_side: u32,
    /// Left end caps left over after bundling.
    pub loose_left: u32,
    /// Right end caps left over after bundling.
    pub loose_right: u32,
    /// Straight couplings, passed through unbundled.
    pub straight_couplings: u32,
    /// Corner connectors, passed through unbundled.
    pub corner_connectors: u32,
}

impl PackedRequirements {
    /// All counters zero — the result displayed alongside any layout error.
    pub const ZERO: Self = Self {
        four_packs: 0,
        two_packs: 0,
        loose_side: 0,
        loose_left: 0,
        loose_right: 0,
        straight_couplings: 0,
        corner_connectors: 0,
    };

    /// Panels left outside any bundle.
    pub fn loose_total(&self) -> u32 {
        self.loose_side + self.loose_left + self.loose_right
    }

    /// Total panels represented: bundled plus loose.
    ///
    /// Always equals [`RawRequirements::total_panels`] of the input the
    /// packer consumed.
    pub fn panel_total(&self) -> u32 {
        self.four_packs * 4 + self.two_packs * 2 + self.loose_total()
    }

    /// Whether every counter is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
