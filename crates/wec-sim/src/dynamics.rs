//! Coupled floater/oscillator equations of motion.

use crate::buoyancy::buoyancy_force;
use crate::error::{SimError, SimResult};
use crate::model::TransientModel;
use crate::params::SystemParameters;
use crate::state::HeaveState;
use std::fmt;
use std::str::FromStr;

/// Functional form of the coupling damper force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DampingLaw {
    /// `D = c1 * v_rel`
    Linear,
    /// `D = c1 * |v_rel|^0.5 * v_rel` (sign-preserving half-power drag)
    #[default]
    Nonlinear,
}

impl fmt::Display for DampingLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Nonlinear => write!(f, "nonlinear"),
        }
    }
}

impl FromStr for DampingLaw {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "nonlinear" | "non-linear" => Ok(Self::Nonlinear),
            _ => Err(SimError::InvalidInput {
                what: "damping law must be 'linear' or 'nonlinear'",
            }),
        }
    }
}

/// Damper force transmitted between floater and oscillator (N).
pub fn coupling_damping_force(rel_vel: f64, c1: f64, law: DampingLaw) -> f64 {
    match law {
        DampingLaw::Linear => c1 * rel_vel,
        DampingLaw::Nonlinear => c1 * rel_vel.abs().sqrt() * rel_vel,
    }
}

/// Time derivative of the heave state at time `t`.
///
/// With `m_add = 0` and [`DampingLaw::Linear`] this reduces to the plain
/// single-mass floater model; no separate code path exists for it.
pub fn derivative(
    state: &HeaveState,
    t: f64,
    params: &SystemParameters,
    law: DampingLaw,
) -> HeaveState {
    let damping = coupling_damping_force(state.relative_velocity(), params.c1, law);
    let excitation = params.f * (params.omega * t).cos();
    let spring = params.k_e * (state.x_a - state.x_b);

    let a_a = (excitation
        - damping
        - params.c2 * state.v_a
        - spring
        - buoyancy_force(state.x_a, params))
        / params.floater_inertia();
    let a_b = (-params.k_e * (state.x_b - state.x_a) - damping) / params.m_b;

    HeaveState {
        x_a: state.v_a,
        x_b: state.v_b,
        v_a: a_a,
        v_b: a_b,
    }
}

/// Two-body heave system as a [`TransientModel`].
#[derive(Clone, Copy, Debug)]
pub struct HeaveModel {
    pub params: SystemParameters,
    pub law: DampingLaw,
}

impl HeaveModel {
    /// Build a model from validated parameters.
    pub fn new(params: SystemParameters, law: DampingLaw) -> SimResult<Self> {
        params.validate()?;
        Ok(Self { params, law })
    }
}

impl TransientModel for HeaveModel {
    type State = HeaveState;

    fn rhs(&self, t: f64, x: &Self::State) -> SimResult<Self::State> {
        Ok(derivative(x, t, &self.params, self.law))
    }

    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State {
        a.add(b)
    }

    fn scale(&self, a: &Self::State, scale: f64) -> Self::State {
        a.scale(scale)
    }
}
