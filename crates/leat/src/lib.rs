//! Leat: a bill-of-materials engine for modular irrigation runs.
//!
//! A user places unit cubes on a small bounded grid to sketch an
//! irrigation run; Leat validates the layout (single-thread paths only —
//! no T- or plus-junctions), assigns a flow direction to every cube,
//! classifies each exposed face and each joint, and bundles the
//! resulting panel counts into purchasable packs.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Leat sub-crates. For most users, adding `leat` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use leat::prelude::*;
//!
//! // Sketch an L-shaped run on a 4×4 board.
//! let mut grid = Grid::new(4, 4).unwrap();
//! for pos in [CellPos::new(1, 1), CellPos::new(1, 2), CellPos::new(2, 2)] {
//!     grid.toggle_cube(pos).unwrap();
//! }
//!
//! let planner = Planner::new();
//! let packed = planner.validate_and_compute(&grid).unwrap();
//!
//! // Three cubes: 8 exposed faces in one four-pack and two two-packs,
//! // joined by one straight coupling and one corner connector.
//! assert_eq!(packed.four_packs, 1);
//! assert_eq!(packed.two_packs, 2);
//! assert_eq!(packed.loose_total(), 0);
//! assert_eq!(packed.straight_couplings, 1);
//! assert_eq!(packed.corner_connectors, 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `leat-core` | Directions, positions, connections, kinds, counters, errors |
//! | [`grid`] | `leat-grid` | The bounded occupancy grid and its mutations |
//! | [`engine`] | `leat-engine` | Validation, tracing, classification, packing, the planner |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`leat-core`).
///
/// Directions and direction sets, grid positions, flow connections,
/// panel/connector kinds, requirement counters, and [`types::LayoutError`].
pub use leat_core as types;

/// The bounded occupancy grid (`leat-grid`).
///
/// [`grid::Grid`] owns cube occupancy, preset connections, and the
/// user-editable cladding marks, and answers adjacency and exposure
/// queries.
pub use leat_grid as grid;

/// The recomputation engine (`leat-engine`).
///
/// [`engine::Planner`] is the single entry point; [`engine::Survey`]
/// carries the per-face and per-joint classifications for rendering.
pub use leat_engine as engine;

/// Common imports for typical Leat usage.
///
/// ```rust
/// use leat::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use leat_core::{
        CellPos, Connection, ConnectorKind, Direction, DirectionSet, LayoutError,
        PackedRequirements, PanelKind, RawRequirements, Turn,
    };

    // Grid
    pub use leat_grid::{Cell, Grid, GridError};

    // Engine
    pub use leat_engine::{
        NoopObserver, Planner, PlannerConfig, Run, RunShape, Survey, SurveyObserver,
    };
}
