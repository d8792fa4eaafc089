//! Error types for the wec-app service layer.

use std::path::PathBuf;

/// Application error wrapping the engine crates' errors for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Project(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Scenario compilation failed: {0}")]
    Compile(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Optimization error: {0}")]
    Optimization(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wec-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<wec_project::ProjectError> for AppError {
    fn from(err: wec_project::ProjectError) -> Self {
        match err {
            wec_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<wec_sim::SimError> for AppError {
    fn from(err: wec_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<wec_optim::OptimError> for AppError {
    fn from(err: wec_optim::OptimError) -> Self {
        AppError::Optimization(err.to_string())
    }
}

impl From<wec_results::ReportError> for AppError {
    fn from(err: wec_results::ReportError) -> Self {
        AppError::Results(err.to_string())
    }
}
