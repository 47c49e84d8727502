//! Preset handling at the planner level: verbatim adoption, continuity
//! rejection, and opt-in repair.

use leat_core::{CellPos, Connection, Direction, LayoutError, PanelKind};
use leat_engine::{NoopObserver, Planner, PlannerConfig};
use leat_grid::Grid;
use Direction::{East, North, West};

fn p(row: u16, col: u16) -> CellPos {
    CellPos::new(row, col)
}

fn repairing_planner() -> Planner {
    Planner::with_config(PlannerConfig {
        observer: Box::new(NoopObserver),
        repair_flow: true,
    })
}

/// A preset line of three cubes flowing east-to-west, applied wholesale.
fn preset_line_east_to_west() -> Grid {
    let mut grid = Grid::new(3, 5).unwrap();
    grid.apply(&[
        (p(1, 1), Connection::new(East, West)),
        (p(1, 2), Connection::new(East, West)),
        (p(1, 3), Connection::new(East, West)),
    ])
    .unwrap();
    grid
}

#[test]
fn applied_preset_flow_is_respected() {
    let grid = preset_line_east_to_west();
    let survey = Planner::new().survey(&grid).unwrap();

    // The run is ordered along the preset flow, east end first.
    assert_eq!(survey.runs()[0].cells()[0], p(1, 3));
    // The caps sit where the preset says: left cap at the east end.
    assert_eq!(survey.panel_at(p(1, 3), East), Some(PanelKind::Left));
    assert_eq!(survey.panel_at(p(1, 1), West), Some(PanelKind::Right));
    assert_eq!(survey.raw().straight_couplings, 2);
}

#[test]
fn preset_and_traced_totals_agree() {
    // Direction of flow never changes how much material a line needs.
    let preset = Planner::new()
        .validate_and_compute(&preset_line_east_to_west())
        .unwrap();
    let mut traced_grid = Grid::new(3, 5).unwrap();
    for col in 1..=3 {
        traced_grid.toggle_cube(p(1, col)).unwrap();
    }
    let traced = Planner::new().validate_and_compute(&traced_grid).unwrap();
    assert_eq!(preset, traced);
}

#[test]
fn malformed_preset_is_reported() {
    let mut grid = preset_line_east_to_west();
    // Break the middle cube's entry.
    grid.set_connection(p(1, 2), Connection::new(North, West))
        .unwrap();
    let err = Planner::new().validate_and_compute(&grid).unwrap_err();
    assert_eq!(
        err,
        LayoutError::FlowContinuityMismatch {
            upstream: p(1, 3),
            downstream: p(1, 2),
            exit: Some(West),
            entry: Some(North),
        }
    );
}

#[test]
fn repair_mode_recovers_a_malformed_preset() {
    let mut grid = preset_line_east_to_west();
    grid.set_connection(p(1, 2), Connection::new(North, West))
        .unwrap();
    let survey = repairing_planner().survey(&grid).unwrap();
    assert_eq!(
        survey.connection_at(p(1, 2)),
        Some(Connection::new(East, West))
    );
    assert_eq!(survey.raw().straight_couplings, 2);
}

#[test]
fn repaired_and_rejected_planners_agree_on_valid_grids() {
    let grid = preset_line_east_to_west();
    let strict = Planner::new().survey(&grid).unwrap();
    let lenient = repairing_planner().survey(&grid).unwrap();
    assert_eq!(strict, lenient);
}
