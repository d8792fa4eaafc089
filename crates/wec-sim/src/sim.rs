//! Fixed-step simulation runner and trajectory recording.

use crate::dynamics::{DampingLaw, HeaveModel};
use crate::error::{SimError, SimResult};
use crate::integrator::{Integrator, RK4};
use crate::model::TransientModel;
use crate::params::SystemParameters;
use crate::state::HeaveState;
use tracing::{debug, instrument};

/// Integration window `[t0, t_end]` advanced with a fixed step `dt`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    /// Start time (s)
    pub t0: f64,
    /// End time (s)
    pub t_end: f64,
    /// Fixed time step (s)
    pub dt: f64,
}

impl TimeWindow {
    pub fn new(t0: f64, t_end: f64, dt: f64) -> Self {
        Self { t0, t_end, dt }
    }

    /// Number of whole steps in the window, `floor((t_end - t0) / dt)`.
    ///
    /// # Errors
    /// `InvalidInput` if `dt <= 0` or `t_end < t0`; `NonFinite` for
    /// non-finite bounds.
    pub fn num_steps(&self) -> SimResult<usize> {
        Ok(wec_core::whole_steps(self.t0, self.t_end, self.dt)?)
    }

    /// Time of the `index`-th step, `t0 + index * dt`.
    pub fn time_at(&self, index: usize) -> f64 {
        self.t0 + index as f64 * self.dt
    }
}

/// Sampled heave states, one per integration step, starting with the
/// initial state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    states: Vec<HeaveState>,
}

impl Trajectory {
    pub fn from_states(states: Vec<HeaveState>) -> Self {
        Self { states }
    }

    pub fn states(&self) -> &[HeaveState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaveState> {
        self.states.iter()
    }

    pub fn first(&self) -> Option<&HeaveState> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&HeaveState> {
        self.states.last()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a HeaveState;
    type IntoIter = std::slice::Iter<'a, HeaveState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// Advance `initial` across `window` with a fixed-step integrator.
///
/// Step `i` starts at `t0 + i * dt`; times are not accumulated, so long runs
/// do not drift. Returns `num_steps + 1` states including `initial`.
pub fn run_fixed_step<M, I>(
    model: &M,
    integrator: &I,
    initial: &M::State,
    window: &TimeWindow,
) -> SimResult<Vec<M::State>>
where
    M: TransientModel,
    I: Integrator,
{
    let num_steps = window.num_steps()?;
    let samples = num_steps.checked_add(1).ok_or(SimError::InvalidInput {
        what: "step count exceeds addressable range",
    })?;

    let mut states = Vec::new();
    states
        .try_reserve_exact(samples)
        .map_err(|_| SimError::InvalidInput {
            what: "trajectory does not fit in memory",
        })?;
    let mut x = initial.clone();
    states.push(x.clone());

    for i in 0..num_steps {
        x = integrator.step(model, window.time_at(i), &x, window.dt)?;
        states.push(x.clone());
    }

    Ok(states)
}

/// Integrate the two-body heave system with classical RK4.
///
/// # Errors
/// - `InvalidConfiguration` if `params` fails validation
/// - `InvalidInput` if `dt <= 0` or `t_end < t0`
#[instrument(level = "debug", skip(initial, params, law), fields(law = %law))]
pub fn integrate(
    initial: HeaveState,
    t0: f64,
    t_end: f64,
    dt: f64,
    params: &SystemParameters,
    law: DampingLaw,
) -> SimResult<Trajectory> {
    let model = HeaveModel::new(*params, law)?;
    let window = TimeWindow::new(t0, t_end, dt);
    let states = run_fixed_step(&model, &RK4, &initial, &window)?;

    debug!(samples = states.len(), "Heave integration complete.");
    if let Some(last) = states.last().filter(|s| !s.is_finite()) {
        debug!(?last, "Integration produced non-finite state.");
    }

    Ok(Trajectory::from_states(states))
}

/// Integrate from an untyped initial state `[x_a, x_b, v_a, v_b]`.
///
/// # Errors
/// `InvalidInput` if `initial` does not have exactly four components, plus
/// everything [`integrate`] rejects.
pub fn integrate_slice(
    initial: &[f64],
    t0: f64,
    t_end: f64,
    dt: f64,
    params: &SystemParameters,
    law: DampingLaw,
) -> SimResult<Trajectory> {
    let initial = HeaveState::try_from(initial)?;
    integrate(initial, t0, t_end, dt, params, law)
}
