//! Shared test utilities for the Leat workspace.
//!
//! - [`grid_from_diagram`] — build a grid from ASCII art (`#` cube,
//!   `.` empty).
//! - [`shapes`] — the canonical layouts used as regression fixtures.
//! - [`RecordingObserver`] — captures every observer hook for
//!   instrumentation tests.

#![forbid(unsafe_code)]

pub mod diagram;
pub mod observer;
pub mod shapes;

pub use diagram::grid_from_diagram;
pub use observer::{RecordingObserver, SurveyEvent};
