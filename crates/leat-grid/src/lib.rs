//! The bounded occupancy grid the cladding engine computes over.
//!
//! [`Grid`] owns a fixed-size board of [`Cell`]s: cube occupancy, preset
//! flow connections, and the user-editable per-face cladding marks. It
//! answers the adjacency and exposure queries the engine needs
//! (4-connected, absorbing boundary — edge cells simply have fewer
//! neighbours) and hosts the mutations the external state layer issues
//! (toggle cube, toggle cladding, apply preset, clear).
//!
//! The grid never computes requirements itself; the engine consumes a
//! snapshot after every mutation and recomputes from scratch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
