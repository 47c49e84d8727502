//! Core types for the Leat irrigation-run cladding planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Leat workspace:
//! compass directions, grid positions, flow connections, panel and
//! connector kinds, requirement counters, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connection;
pub mod direction;
pub mod error;
pub mod parts;
pub mod pos;

pub use connection::{Connection, Turn};
pub use direction::{Direction, DirectionSet};
pub use error::LayoutError;
pub use parts::{ConnectorKind, PackedRequirements, PanelKind, RawRequirements};
pub use pos::CellPos;
