//! Damping-coefficient search for the two-body heave converter.
//!
//! Provides:
//! - Inclusive parameter grids over the damping coefficient and exponent
//! - Trial evaluation (integrate + average power) per grid point
//! - Exhaustive maximum-power search with first-in-order tie-break
//! - Full power surface over the grid
//!
//! Trials are independent; enabling the `parallel` feature evaluates them
//! with rayon while keeping results in iteration order.

pub mod error;
pub mod grid;
pub mod optimizer;
pub mod surface;
pub mod trials;

pub use error::{OptimError, OptimResult};
pub use grid::{DampingGrid, GridAxis};
pub use optimizer::{
    DampingOptimum, OptimizerOptions, optimize_damping, optimize_damping_with, select_best,
};
pub use surface::{PowerSurface, evaluate_power_surface};
pub use trials::{Trial, evaluate_trials, evaluate_trials_with_progress};
