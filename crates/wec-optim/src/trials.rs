//! Evaluation of individual grid points.

use crate::error::OptimResult;
use crate::optimizer::OptimizerOptions;
use tracing::debug;
use wec_sim::{SystemParameters, average_power, integrate};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub c1: f64,
    /// Damping exponent. Recorded only; it does not enter the dynamics.
    pub alpha: f64,
    /// Average damper power (W). May be non-finite if the run diverged.
    pub power: f64,
}

/// Integration end time for a search at wave frequency `omega`.
pub(crate) fn search_horizon(omega: f64, periods: f64) -> OptimResult<f64> {
    let omega = wec_core::ensure_finite(omega, "omega")?;
    if omega <= 0.0 {
        return Err(crate::error::OptimError::InvalidSetup {
            what: "omega must be positive",
        });
    }
    Ok(periods * 2.0 * std::f64::consts::PI / omega)
}

fn evaluate_point(
    params: &SystemParameters,
    options: &OptimizerOptions,
    t_end: f64,
    c1: f64,
    alpha: f64,
) -> OptimResult<Trial> {
    let trial_params = params.with_coupling_damping(c1);
    let traj = integrate(
        options.initial_state,
        0.0,
        t_end,
        options.dt,
        &trial_params,
        options.law,
    )?;
    let power = average_power(&traj, c1, options.law)?;
    Ok(Trial { c1, alpha, power })
}

fn evaluate_row(
    params: &SystemParameters,
    options: &OptimizerOptions,
    t_end: f64,
    c1: f64,
    alphas: &[f64],
) -> OptimResult<Vec<Trial>> {
    alphas
        .iter()
        .map(|&alpha| evaluate_point(params, options, t_end, c1, alpha))
        .collect()
}

/// Evaluate every grid point in iteration order (`c1` outer, `alpha` inner).
pub fn evaluate_trials(
    params: &SystemParameters,
    omega: f64,
    options: &OptimizerOptions,
) -> OptimResult<Vec<Trial>> {
    evaluate_trials_with_progress(params, omega, options, None)
}

/// Like [`evaluate_trials`], reporting `(rows_done, rows_total)` after each
/// completed `c1` row.
///
/// With the `parallel` feature rows run concurrently and progress is
/// reported once, when all rows are done. Output order is unchanged.
pub fn evaluate_trials_with_progress(
    params: &SystemParameters,
    omega: f64,
    options: &OptimizerOptions,
    mut progress: Option<&mut dyn FnMut(usize, usize)>,
) -> OptimResult<Vec<Trial>> {
    params.validate()?;
    let t_end = search_horizon(omega, options.periods)?;
    let c1_values = options.grid.c1.points()?;
    let alphas = options.grid.alpha.points()?;
    let total = c1_values.len();

    debug!(rows = total, cols = alphas.len(), t_end, "Evaluating damping grid.");

    #[cfg(not(feature = "parallel"))]
    let rows = {
        let mut rows = Vec::with_capacity(total);
        for (i, &c1) in c1_values.iter().enumerate() {
            rows.push(evaluate_row(params, options, t_end, c1, &alphas)?);
            if let Some(cb) = progress.as_mut() {
                cb(i + 1, total);
            }
        }
        rows
    };

    #[cfg(feature = "parallel")]
    let rows = {
        let rows = c1_values
            .par_iter()
            .map(|&c1| evaluate_row(params, options, t_end, c1, &alphas))
            .collect::<OptimResult<Vec<_>>>()?;
        if let Some(cb) = progress.as_mut() {
            cb(total, total);
        }
        rows
    };

    Ok(rows.into_iter().flatten().collect())
}
