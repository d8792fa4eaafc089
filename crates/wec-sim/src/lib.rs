//! Heave dynamics of a two-body wave-energy converter.
//!
//! Provides:
//! - Displacement-dependent buoyancy restoring force
//! - Coupled floater/oscillator equations of motion (linear or nonlinear damping)
//! - Fixed-step RK4 integrator
//! - Average extracted power of a trajectory

pub mod buoyancy;
pub mod dynamics;
pub mod error;
pub mod integrator;
pub mod model;
pub mod params;
pub mod power;
pub mod sim;
pub mod state;

// Re-exports for public API
pub use buoyancy::buoyancy_force;
pub use dynamics::{DampingLaw, HeaveModel, coupling_damping_force, derivative};
pub use error::{SimError, SimResult};
pub use integrator::{Integrator, RK4};
pub use model::TransientModel;
pub use params::SystemParameters;
pub use power::{POWER_EPSILON, average_power, instantaneous_power};
pub use sim::{Trajectory, TimeWindow, integrate, integrate_slice, run_fixed_step};
pub use state::HeaveState;
