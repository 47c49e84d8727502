//! The recomputation engine: grid validation, run tracing, face and
//! joint classification, aggregation, and bundle packing.
//!
//! The engine is pure and synchronous. [`Planner::validate_and_compute`]
//! is the single entry point the external state layer calls after every
//! grid mutation; [`Planner::survey`] returns the richer
//! [`Survey`] the rendering layer queries for per-face and per-joint
//! classifications. Every invocation recomputes from scratch with a
//! fresh [`RunCache`] — no state survives between calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod cache;
pub mod joints;
pub mod observer;
pub mod pack;
pub mod panels;
pub mod shape;
pub mod survey;
pub mod trace;
pub mod validate;

pub use aggregate::tally;
pub use cache::RunCache;
pub use joints::classify_joint;
pub use observer::{NoopObserver, SurveyObserver};
pub use pack::pack;
pub use panels::panel_for;
pub use shape::RunShape;
pub use survey::{Planner, PlannerConfig, Survey};
pub use trace::Run;
pub use validate::{check_degrees, partition};
