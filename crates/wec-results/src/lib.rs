//! wec-results: tab-separated reports for trajectories and damping searches.

pub mod table;
pub mod types;

pub use table::{
    TableWriter, write_optimum, write_power_surface, write_trajectory, write_trajectory_file,
};
pub use types::*;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid time step: {dt}")]
    InvalidStep { dt: f64 },
}
