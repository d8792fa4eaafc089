//! Integration tests for run progress and timing reporting.

use std::io::Write;
use wec_app::{
    RunMode, RunOverrides, RunProgressEvent, RunRequest, RunStage, run_optimization_with_progress,
    run_power_surface_with_progress,
};

const SMALL_GRID: &str = r#"
version: 1
name: small grid
parameters:
  m_a: 4866.0
  m_b: 2433.0
  m_add: 100.0
  k_e: 80000.0
  c1: 10.0
  c2: 656.3616
  f: 6250.0
  omega: 1.4005
  rho0: 1025.0
  g: 9.81
  h_cyl: 0.5
  h_cone: 0.3
  r: 0.1
  x_a0: 0.2
  x_a1: -0.1
optimizer:
  c1_start: 0.0
  c1_stop: 4000.0
  c1_step: 1000.0
  alpha_start: 0.0
  alpha_stop: 0.5
  alpha_step: 0.5
  periods: 5.0
"#;

fn write_scenario(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("small.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SMALL_GRID.as_bytes()).unwrap();
    path
}

#[test]
fn optimization_progress_and_timing_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(&dir);
    let request = RunRequest {
        scenario_path: &path,
        overrides: RunOverrides::default(),
    };

    let mut events: Vec<RunProgressEvent> = Vec::new();
    let response =
        run_optimization_with_progress(&request, Some(&mut |event| events.push(event))).unwrap();

    assert_eq!(response.optimum.trials.len(), 10);
    assert_eq!(response.timing.trials, 10);
    assert_eq!(response.omega, 1.4005);
    assert!(response.timing.total_time_s >= response.timing.compute_time_s);

    assert!(matches!(events[0].stage, RunStage::LoadingScenario));
    assert!(events.iter().any(|e| matches!(e.stage, RunStage::Compiling)));
    assert!(matches!(events.last().unwrap().stage, RunStage::Completed));
    assert!(events.iter().all(|e| e.mode == RunMode::Optimization));

    let last_sweep = events
        .iter()
        .filter_map(|e| e.sweep)
        .last()
        .expect("grid progress should be reported");
    assert_eq!(last_sweep.rows_done, 5);
    assert_eq!(last_sweep.rows_total, 5);
    assert_eq!(last_sweep.fraction_complete, 1.0);
}

#[test]
fn surface_matches_grid_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(&dir);
    let request = RunRequest {
        scenario_path: &path,
        overrides: RunOverrides {
            omega: Some(2.0),
            ..Default::default()
        },
    };

    let response = run_power_surface_with_progress(&request, None).unwrap();
    assert_eq!(response.omega, 2.0);
    assert_eq!(response.surface.c1_values, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
    assert_eq!(response.surface.alpha_values, vec![0.0, 0.5]);
    assert_eq!(response.timing.trials, 10);
    assert!(response.surface.power[0].iter().all(|&p| p == 0.0));
}
