//! An observer that records every hook invocation.

use leat_core::{CellPos, ConnectorKind, Direction, PackedRequirements, PanelKind, RawRequirements};
use leat_engine::{Run, SurveyObserver};
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded observer hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurveyEvent {
    /// `validation_started` fired.
    ValidationStarted {
        /// Cubes on the grid at recomputation start.
        occupied_cells: usize,
    },
    /// `run_traced` fired.
    RunTraced {
        /// First cell of the traced run.
        start: CellPos,
        /// Number of cubes in the run.
        cells: usize,
    },
    /// `face_classified` fired.
    FaceClassified {
        /// The classified cube.
        pos: CellPos,
        /// The exposed face.
        direction: Direction,
        /// The computed panel kind.
        kind: PanelKind,
    },
    /// `joint_classified` fired.
    JointClassified {
        /// Upstream cube of the joint.
        upstream: CellPos,
        /// Downstream cube of the joint.
        downstream: CellPos,
        /// The computed connector kind.
        kind: ConnectorKind,
    },
    /// `requirements_packed` fired.
    RequirementsPacked {
        /// Raw totals before bundling.
        raw: RawRequirements,
        /// Bundled totals.
        packed: PackedRequirements,
    },
}

/// Records every hook into a shared log.
///
/// Clone the observer before boxing it into a planner config; both
/// clones share the same log, so the test half can inspect what the
/// engine half recorded.
///
/// Uses `Rc<RefCell<…>>` — the engine is single-threaded and the
/// observer trait takes `&self`.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<SurveyEvent>>>,
}

impl RecordingObserver {
    /// A recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events so far.
    pub fn events(&self) -> Vec<SurveyEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Discard the log.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: SurveyEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl SurveyObserver for RecordingObserver {
    fn validation_started(&self, occupied_cells: usize) {
        self.push(SurveyEvent::ValidationStarted { occupied_cells });
    }

    fn run_traced(&self, run: &Run) {
        self.push(SurveyEvent::RunTraced {
            start: run.cells()[0],
            cells: run.len(),
        });
    }

    fn face_classified(&self, pos: CellPos, direction: Direction, kind: PanelKind) {
        self.push(SurveyEvent::FaceClassified {
            pos,
            direction,
            kind,
        });
    }

    fn joint_classified(&self, upstream: CellPos, downstream: CellPos, kind: ConnectorKind) {
        self.push(SurveyEvent::JointClassified {
            upstream,
            downstream,
            kind,
        });
    }

    fn requirements_packed(&self, raw: &RawRequirements, packed: &PackedRequirements) {
        self.push(SurveyEvent::RequirementsPacked {
            raw: *raw,
            packed: *packed,
        });
    }
}
