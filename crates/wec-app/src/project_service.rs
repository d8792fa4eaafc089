//! Scenario loading, validation, and introspection.

use std::path::Path;
use wec_project::ScenarioFile;

use crate::error::{AppError, AppResult};
use crate::scenario_compile;

/// Short description of a scenario for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub name: String,
    pub version: u32,
    /// `m_a + m_add` (kg)
    pub floater_inertia_kg: f64,
    pub wave_period_s: f64,
    /// Integration steps of the simulation block, if present.
    pub simulation_steps: Option<usize>,
    /// Grid points of the optimizer block, if present.
    pub optimizer_trials: Option<usize>,
}

/// Load a scenario from YAML or JSON (by extension), migrated and validated.
pub fn load_project(path: &Path) -> AppResult<ScenarioFile> {
    if !path.exists() {
        return Err(AppError::ScenarioFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }
    Ok(wec_project::load_scenario(path)?)
}

/// Validate a scenario and check that the engine accepts it.
pub fn validate_project(scenario: &ScenarioFile) -> AppResult<()> {
    wec_project::validate_scenario(scenario)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    scenario_compile::compile_parameters(&scenario.parameters)?;
    if let Some(sim) = &scenario.simulation {
        scenario_compile::compile_simulation(sim)?;
    }
    if let Some(opt) = &scenario.optimizer {
        let options = scenario_compile::compile_optimizer(opt);
        options.grid.len()?;
    }
    Ok(())
}

pub fn summarize(scenario: &ScenarioFile) -> AppResult<ScenarioSummary> {
    let params = scenario_compile::compile_parameters(&scenario.parameters)?;

    let simulation_steps = match &scenario.simulation {
        Some(sim) => Some(scenario_compile::compile_simulation(sim)?.window.num_steps()?),
        None => None,
    };
    let optimizer_trials = match &scenario.optimizer {
        Some(opt) => Some(scenario_compile::compile_optimizer(opt).grid.len()?),
        None => None,
    };

    Ok(ScenarioSummary {
        name: scenario.name.clone(),
        version: scenario.version,
        floater_inertia_kg: params.floater_inertia(),
        wave_period_s: params.wave_period(),
        simulation_steps,
        optimizer_trials,
    })
}
