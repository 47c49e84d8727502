//! The planner: the single recomputation entry point and its result.

use crate::aggregate::tally;
use crate::cache::RunCache;
use crate::joints::classify_joint;
use crate::observer::{NoopObserver, SurveyObserver};
use crate::pack::pack;
use crate::panels::panel_for;
use crate::shape::RunShape;
use crate::trace::{trace, Run};
use crate::validate::{check_degrees, partition};
use indexmap::IndexMap;
use leat_core::{
    CellPos, Connection, ConnectorKind, Direction, LayoutError, PackedRequirements, PanelKind,
    RawRequirements,
};
use leat_grid::Grid;

/// Configuration for a [`Planner`].
pub struct PlannerConfig {
    /// Observer receiving instrumentation hooks. Default: [`NoopObserver`].
    pub observer: Box<dyn SurveyObserver>,
    /// Overwrite inconsistent preset entries instead of rejecting the
    /// grid. Default: `false` — inconsistencies are reported as
    /// [`LayoutError::FlowContinuityMismatch`].
    pub repair_flow: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            observer: Box::new(NoopObserver),
            repair_flow: false,
        }
    }
}

/// The recomputation engine's public face.
///
/// The external state layer calls
/// [`validate_and_compute`](Planner::validate_and_compute) after every
/// grid mutation (cube toggle, cladding toggle, preset apply, clear);
/// the rendering layer calls [`survey`](Planner::survey) when it also
/// needs per-face and per-joint classifications. Both recompute from
/// scratch — a fresh [`RunCache`] per call, no state carried between
/// calls, so no mutation can observe stale results.
///
/// # Example
///
/// ```
/// use leat_core::CellPos;
/// use leat_engine::Planner;
/// use leat_grid::Grid;
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.toggle_cube(CellPos::new(1, 1)).unwrap();
///
/// let planner = Planner::new();
/// let packed = planner.validate_and_compute(&grid).unwrap();
/// assert_eq!(packed.four_packs, 1);
/// ```
#[derive(Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// A planner with the default configuration: no-op observer, no
    /// flow repair.
    pub fn new() -> Self {
        Self::default()
    }

    /// A planner with an explicit configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Validate the grid and compute its packed bill of materials.
    ///
    /// # Errors
    ///
    /// Any [`LayoutError`]; the caller displays
    /// [`PackedRequirements::ZERO`] alongside the error tag, and the
    /// next mutation starts from a clean slate.
    pub fn validate_and_compute(&self, grid: &Grid) -> Result<PackedRequirements, LayoutError> {
        self.survey(grid).map(|survey| survey.packed())
    }

    /// Validate the grid and return the full [`Survey`], including
    /// per-face and per-joint classifications for the rendering layer.
    pub fn survey(&self, grid: &Grid) -> Result<Survey, LayoutError> {
        let observer = self.config.observer.as_ref();
        observer.validation_started(grid.cube_count());

        check_degrees(grid)?;

        let mut cache = RunCache::new();
        partition(grid, &mut cache);

        let mut runs = Vec::with_capacity(cache.len());
        for component in cache.components() {
            let run = trace(grid, component, self.config.repair_flow)?;
            observer.run_traced(&run);
            runs.push(run);
        }

        let mut faces = IndexMap::new();
        let mut joints = IndexMap::new();
        for run in &runs {
            for (pos, connection) in run.iter() {
                for direction in Direction::ALL {
                    if grid.is_exposed(pos, direction) {
                        let kind = panel_for(&connection, direction);
                        observer.face_classified(pos, direction, kind);
                        faces.insert((pos, direction), kind);
                    }
                }
            }
            for ((up_pos, up), (down_pos, down)) in run.links() {
                let kind = classify_joint(up_pos, &up, down_pos, &down)?;
                observer.joint_classified(up_pos, down_pos, kind);
                joints.insert((up_pos, down_pos), kind);
            }
        }

        let raw = tally(faces.values().copied(), joints.values().copied());
        let packed = pack(raw);
        observer.requirements_packed(&raw, &packed);

        Ok(Survey {
            runs,
            faces,
            joints,
            raw,
            packed,
        })
    }
}

/// The full result of one recomputation.
///
/// Owns the traced runs and every classification, so the rendering
/// layer colors faces and joints with plain lookups — no revalidation.
#[derive(Debug, PartialEq, Eq)]
pub struct Survey {
    runs: Vec<Run>,
    faces: IndexMap<(CellPos, Direction), PanelKind>,
    joints: IndexMap<(CellPos, CellPos), ConnectorKind>,
    raw: RawRequirements,
    packed: PackedRequirements,
}

impl Survey {
    /// The traced runs in discovery order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Raw (unbundled) totals.
    pub fn raw(&self) -> RawRequirements {
        self.raw
    }

    /// Bundled totals.
    pub fn packed(&self) -> PackedRequirements {
        self.packed
    }

    /// The panel required on one exposed face, or `None` when the face
    /// is unexposed or the cell holds no cube.
    pub fn panel_at(&self, pos: CellPos, direction: Direction) -> Option<PanelKind> {
        self.faces.get(&(pos, direction)).copied()
    }

    /// The connector required between two adjacent cubes, in either
    /// order, or `None` when they are not consecutive in any run.
    pub fn joint_at(&self, a: CellPos, b: CellPos) -> Option<ConnectorKind> {
        self.joints
            .get(&(a, b))
            .or_else(|| self.joints.get(&(b, a)))
            .copied()
    }

    /// The flow assigned to the cube at `pos`, if any run contains it.
    pub fn connection_at(&self, pos: CellPos) -> Option<Connection> {
        self.runs.iter().find_map(|run| run.connection_at(pos))
    }

    /// Diagnostic shape label of the run at `index`.
    pub fn shape_of(&self, index: usize) -> Option<RunShape> {
        self.runs.get(index).map(Run::shape)
    }

    /// Iterate every classified face as `(cell, direction, kind)`.
    pub fn faces(&self) -> impl Iterator<Item = (CellPos, Direction, PanelKind)> + '_ {
        self.faces.iter().map(|((p, d), k)| (*p, *d, *k))
    }

    /// Iterate every classified joint as `(upstream, downstream, kind)`.
    pub fn joints(&self) -> impl Iterator<Item = (CellPos, CellPos, ConnectorKind)> + '_ {
        self.joints.iter().map(|((a, b), k)| (*a, *b, *k))
    }
}
