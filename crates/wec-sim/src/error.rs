//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while configuring or running a heave simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: &'static str },

    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Cannot evaluate power of an empty trajectory")]
    EmptyTrajectory,

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<wec_core::CoreError> for SimError {
    fn from(e: wec_core::CoreError) -> Self {
        match e {
            wec_core::CoreError::NonFinite { what, value } => SimError::NonFinite { what, value },
            wec_core::CoreError::InvalidArg { what } => SimError::InvalidInput { what },
        }
    }
}
