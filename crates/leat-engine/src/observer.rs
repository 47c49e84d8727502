//! The injected observer interface for engine instrumentation.

use crate::trace::Run;
use leat_core::{CellPos, ConnectorKind, Direction, PackedRequirements, PanelKind, RawRequirements};

/// Hooks called at the engine's defined extension points.
///
/// Implementations receive telemetry during a recomputation: validation
/// start, each traced run, each face and joint classification, and the
/// final packed totals. Every method has an empty default, so an
/// implementation overrides only what it needs; production uses
/// [`NoopObserver`].
///
/// # Contract
///
/// - Hooks take `&self` — observers that accumulate state use interior
///   mutability.
/// - Hooks MUST NOT influence the computation; the engine's results are
///   identical under any observer.
///
/// # Object safety
///
/// This trait is object-safe; the planner stores its observer as
/// `Box<dyn SurveyObserver>`.
pub trait SurveyObserver {
    /// A recomputation began over a grid holding `occupied_cells` cubes.
    fn validation_started(&self, occupied_cells: usize) {
        let _ = occupied_cells;
    }

    /// A component was ordered and assigned flow.
    fn run_traced(&self, run: &Run) {
        let _ = run;
    }

    /// An exposed face was classified.
    fn face_classified(&self, pos: CellPos, direction: Direction, kind: PanelKind) {
        let _ = (pos, direction, kind);
    }

    /// A joint between consecutive cubes was classified.
    fn joint_classified(&self, upstream: CellPos, downstream: CellPos, kind: ConnectorKind) {
        let _ = (upstream, downstream, kind);
    }

    /// Raw totals were bundled into packs; the recomputation is complete.
    fn requirements_packed(&self, raw: &RawRequirements, packed: &PackedRequirements) {
        let _ = (raw, packed);
    }
}

/// The production observer: ignores every hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SurveyObserver for NoopObserver {}
