//! Aggregation of classified faces and joints into raw totals.

use leat_core::{ConnectorKind, PanelKind, RawRequirements};

/// Fold per-face and per-joint classifications into [`RawRequirements`].
///
/// A pure fold over the whole grid's classifications — all runs at once.
/// No normalization and no packing happen here.
pub fn tally(
    panels: impl IntoIterator<Item = PanelKind>,
    connectors: impl IntoIterator<Item = ConnectorKind>,
) -> RawRequirements {
    let mut raw = RawRequirements::ZERO;
    for kind in panels {
        raw.add_panel(kind);
    }
    for kind in connectors {
        raw.add_connector(kind);
    }
    raw
}
