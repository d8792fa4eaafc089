//! Simulation and damping-search execution service.

use std::path::Path;
use std::time::Instant;
use tracing::info;
use wec_optim::{DampingOptimum, OptimizerOptions, PowerSurface};
use wec_project::ScenarioFile;
use wec_sim::{DampingLaw, HeaveState, SystemParameters, Trajectory};

use crate::error::{AppError, AppResult};
use crate::progress::{RunMode, RunProgressEvent, RunStage, SweepProgress};
use crate::project_service;
use crate::scenario_compile::{self, SimulationPlan};

/// Command-line style overrides applied on top of the scenario file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunOverrides {
    pub dt: Option<f64>,
    pub t_end: Option<f64>,
    pub law: Option<DampingLaw>,
    /// Search-horizon wave frequency (optimization and surface runs).
    pub omega: Option<f64>,
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub scenario_path: &'a Path,
    pub overrides: RunOverrides,
}

/// Wall-clock timing and size of a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub load_time_s: f64,
    pub compile_time_s: f64,
    pub compute_time_s: f64,
    pub total_time_s: f64,
    pub samples: usize,
    pub trials: usize,
}

#[derive(Debug, Clone)]
pub struct SimulationResponse {
    pub scenario_name: String,
    pub trajectory: Trajectory,
    pub plan: SimulationPlan,
    /// Average damper power over the run (W).
    pub average_power: f64,
    pub timing: RunTimingSummary,
}

impl SimulationResponse {
    pub fn final_state(&self) -> Option<&HeaveState> {
        self.trajectory.last()
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResponse {
    pub scenario_name: String,
    pub omega: f64,
    pub optimum: DampingOptimum,
    pub timing: RunTimingSummary,
}

#[derive(Debug, Clone)]
pub struct SurfaceResponse {
    pub scenario_name: String,
    pub omega: f64,
    pub surface: PowerSurface,
    pub timing: RunTimingSummary,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    mode: RunMode,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
    sweep: Option<SweepProgress>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        let elapsed = started.elapsed().as_secs_f64();
        cb(RunProgressEvent::stage(mode, stage, elapsed, message).with_sweep(sweep));
    }
}

fn positive_override(value: Option<f64>, name: &str) -> AppResult<Option<f64>> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(AppError::InvalidInput(format!(
            "{} must be positive and finite, got {}",
            name, v
        ))),
        other => Ok(other),
    }
}

fn load_scenario(
    request: &RunRequest<'_>,
    mode: RunMode,
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    started: Instant,
    timing: &mut RunTimingSummary,
) -> AppResult<ScenarioFile> {
    emit_progress(
        progress_cb,
        mode,
        RunStage::LoadingScenario,
        started,
        Some(request.scenario_path.display().to_string()),
        None,
    );
    let load_started = Instant::now();
    let scenario = project_service::load_project(request.scenario_path)?;
    timing.load_time_s = load_started.elapsed().as_secs_f64();
    Ok(scenario)
}

/// Integrate the scenario's simulation block.
pub fn run_simulation(request: &RunRequest) -> AppResult<SimulationResponse> {
    run_simulation_with_progress(request, None)
}

/// Integrate the scenario's simulation block and stream stage events.
///
/// A scenario without a simulation block uses the default block.
pub fn run_simulation_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<SimulationResponse> {
    let started = Instant::now();
    let mode = RunMode::Simulation;
    let mut timing = RunTimingSummary::default();

    let scenario = load_scenario(request, mode, &mut progress_cb, started, &mut timing)?;

    emit_progress(&mut progress_cb, mode, RunStage::Compiling, started, None, None);
    let compile_started = Instant::now();
    let params = scenario_compile::compile_parameters(&scenario.parameters)?;
    let mut sim_def = scenario.simulation.clone().unwrap_or_default();
    if let Some(dt) = positive_override(request.overrides.dt, "dt")? {
        sim_def.dt = dt;
    }
    if let Some(t_end) = request.overrides.t_end {
        sim_def.t_end = t_end;
    }
    let mut plan = scenario_compile::compile_simulation(&sim_def)?;
    if let Some(law) = request.overrides.law {
        plan.law = law;
    }
    timing.compile_time_s = compile_started.elapsed().as_secs_f64();

    emit_progress(&mut progress_cb, mode, RunStage::Integrating, started, None, None);
    let compute_started = Instant::now();
    let trajectory = wec_sim::integrate(
        plan.initial,
        plan.window.t0,
        plan.window.t_end,
        plan.window.dt,
        &params,
        plan.law,
    )?;
    let average_power = wec_sim::average_power(&trajectory, params.c1, plan.law)?;
    timing.compute_time_s = compute_started.elapsed().as_secs_f64();
    timing.samples = trajectory.len();
    timing.total_time_s = started.elapsed().as_secs_f64();

    info!(
        scenario = %scenario.name,
        samples = trajectory.len(),
        law = %plan.law,
        average_power,
        "Simulation complete."
    );
    emit_progress(&mut progress_cb, mode, RunStage::Completed, started, None, None);

    Ok(SimulationResponse {
        scenario_name: scenario.name,
        trajectory,
        plan,
        average_power,
        timing,
    })
}

/// Resolved inputs shared by optimization and surface runs.
struct SearchSetup {
    scenario_name: String,
    params: SystemParameters,
    omega: f64,
    options: OptimizerOptions,
}

fn compile_search(scenario: ScenarioFile, overrides: &RunOverrides) -> AppResult<SearchSetup> {
    let params = scenario_compile::compile_parameters(&scenario.parameters)?;
    let opt_def = scenario.optimizer.unwrap_or_default();
    let mut options = scenario_compile::compile_optimizer(&opt_def);

    if let Some(dt) = positive_override(overrides.dt, "dt")? {
        options.dt = dt;
    }
    if let Some(law) = overrides.law {
        options.law = law;
    }
    let omega = positive_override(overrides.omega, "omega")?
        .or(opt_def.omega)
        .unwrap_or(params.omega);

    Ok(SearchSetup {
        scenario_name: scenario.name,
        params,
        omega,
        options,
    })
}

fn run_grid<T>(
    request: &RunRequest,
    mode: RunMode,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
    search: impl FnOnce(&SearchSetup, &mut dyn FnMut(usize, usize)) -> AppResult<(T, usize)>,
) -> AppResult<(SearchSetup, T, RunTimingSummary)> {
    let started = Instant::now();
    let mut timing = RunTimingSummary::default();

    let scenario = load_scenario(request, mode, &mut progress_cb, started, &mut timing)?;

    emit_progress(&mut progress_cb, mode, RunStage::Compiling, started, None, None);
    let compile_started = Instant::now();
    let setup = compile_search(scenario, &request.overrides)?;
    timing.compile_time_s = compile_started.elapsed().as_secs_f64();

    emit_progress(
        &mut progress_cb,
        mode,
        RunStage::EvaluatingGrid,
        started,
        None,
        Some(SweepProgress::new(0, setup.options.grid.c1.points()?.len())),
    );
    let compute_started = Instant::now();
    let mut on_row = |done: usize, total: usize| {
        emit_progress(
            &mut progress_cb,
            mode,
            RunStage::EvaluatingGrid,
            started,
            None,
            Some(SweepProgress::new(done, total)),
        );
    };
    let (output, trials) = search(&setup, &mut on_row)?;
    timing.compute_time_s = compute_started.elapsed().as_secs_f64();
    timing.trials = trials;
    timing.total_time_s = started.elapsed().as_secs_f64();

    emit_progress(&mut progress_cb, mode, RunStage::Completed, started, None, None);
    Ok((setup, output, timing))
}

/// Search the scenario's damping grid for the maximum-power coefficient.
pub fn run_optimization(request: &RunRequest) -> AppResult<OptimizationResponse> {
    run_optimization_with_progress(request, None)
}

/// Like [`run_optimization`], reporting grid progress per `c1` row.
pub fn run_optimization_with_progress(
    request: &RunRequest,
    progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<OptimizationResponse> {
    let (setup, optimum, timing) =
        run_grid(request, RunMode::Optimization, progress_cb, |setup, on_row| {
            let optimum = wec_optim::optimize_damping_with(
                &setup.params,
                setup.omega,
                &setup.options,
                Some(on_row),
            )?;
            let trials = optimum.trials.len();
            Ok((optimum, trials))
        })?;

    info!(
        scenario = %setup.scenario_name,
        best_c1 = optimum.best_c1,
        best_power = optimum.best_power,
        total_time_s = timing.total_time_s,
        "Optimization complete."
    );

    Ok(OptimizationResponse {
        scenario_name: setup.scenario_name,
        omega: setup.omega,
        optimum,
        timing,
    })
}

/// Evaluate average power over the full damping grid.
pub fn run_power_surface(request: &RunRequest) -> AppResult<SurfaceResponse> {
    run_power_surface_with_progress(request, None)
}

pub fn run_power_surface_with_progress(
    request: &RunRequest,
    progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<SurfaceResponse> {
    let (setup, surface, timing) =
        run_grid(request, RunMode::PowerSurface, progress_cb, |setup, on_row| {
            let surface = wec_optim::evaluate_power_surface(
                &setup.params,
                setup.omega,
                &setup.options,
                Some(on_row),
            )?;
            let trials = surface.c1_values.len() * surface.alpha_values.len();
            Ok((surface, trials))
        })?;

    Ok(SurfaceResponse {
        scenario_name: setup.scenario_name,
        omega: setup.omega,
        surface,
        timing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_must_be_positive() {
        assert!(positive_override(Some(0.0), "dt").is_err());
        assert!(positive_override(Some(f64::NAN), "dt").is_err());
        assert_eq!(positive_override(Some(0.5), "dt").unwrap(), Some(0.5));
        assert_eq!(positive_override(None, "dt").unwrap(), None);
    }

    #[test]
    fn search_omega_precedence() {
        let scenario = ScenarioFile {
            version: 1,
            name: "omega".to_string(),
            parameters: wec_project::ParametersDef::reference(),
            simulation: None,
            optimizer: Some(wec_project::OptimizerDef {
                omega: Some(2.0),
                ..Default::default()
            }),
        };

        let from_file = compile_search(scenario.clone(), &RunOverrides::default()).unwrap();
        assert_eq!(from_file.omega, 2.0);

        let overrides = RunOverrides {
            omega: Some(3.0),
            ..Default::default()
        };
        let from_cli = compile_search(scenario.clone(), &overrides).unwrap();
        assert_eq!(from_cli.omega, 3.0);

        let mut no_block = scenario;
        no_block.optimizer = None;
        let fallback = compile_search(no_block, &RunOverrides::default()).unwrap();
        assert_eq!(fallback.omega, 1.4005);
        assert_eq!(fallback.options, OptimizerOptions::default());
    }
}
