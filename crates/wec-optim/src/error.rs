//! Error types for the damping search.

use thiserror::Error;
use wec_sim::SimError;

/// Errors raised while setting up or running a damping search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimError {
    #[error("Invalid search setup: {what}")]
    InvalidSetup { what: &'static str },

    #[error("No grid point produced a finite power ({evaluated} trials evaluated)")]
    NoFiniteTrial { evaluated: usize },

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type OptimResult<T> = Result<T, OptimError>;

impl From<wec_core::CoreError> for OptimError {
    fn from(e: wec_core::CoreError) -> Self {
        match e {
            wec_core::CoreError::InvalidArg { what } => OptimError::InvalidSetup { what },
            wec_core::CoreError::NonFinite { what, .. } => OptimError::InvalidSetup { what },
        }
    }
}
