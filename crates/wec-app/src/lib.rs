//! Shared application service layer for the heave simulator.
//!
//! Frontends load scenarios, run simulations and damping searches, and
//! export results through this crate rather than wiring the engine crates
//! themselves.

pub mod error;
pub mod export;
pub mod progress;
pub mod project_service;
pub mod run_service;
pub mod scenario_compile;

pub use error::{AppError, AppResult};
pub use progress::{RunMode, RunProgressEvent, RunStage, SweepProgress};
pub use project_service::{ScenarioSummary, load_project, summarize, validate_project};
pub use run_service::{
    OptimizationResponse, RunOverrides, RunRequest, RunTimingSummary, SimulationResponse,
    SurfaceResponse, run_optimization, run_optimization_with_progress, run_power_surface,
    run_power_surface_with_progress, run_simulation, run_simulation_with_progress,
};
pub use scenario_compile::{
    SimulationPlan, compile_optimizer, compile_parameters, compile_simulation,
};
