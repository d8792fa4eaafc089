//! Average power over the full damping grid.

use crate::error::OptimResult;
use crate::optimizer::OptimizerOptions;
use crate::trials::{Trial, evaluate_trials_with_progress};
use tracing::{instrument, warn};
use wec_sim::SystemParameters;

/// Power table indexed as `power[c1_index][alpha_index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSurface {
    pub c1_values: Vec<f64>,
    pub alpha_values: Vec<f64>,
    pub power: Vec<Vec<f64>>,
    /// Cells whose power was non-finite and were stored as zero.
    pub replaced: usize,
}

impl PowerSurface {
    /// Arrange row-major trials into a table. Non-finite powers become 0.
    pub fn from_trials(c1_values: Vec<f64>, alpha_values: Vec<f64>, trials: &[Trial]) -> Self {
        let cols = alpha_values.len().max(1);
        let mut replaced = 0;
        let power = trials
            .chunks(cols)
            .map(|row| {
                row.iter()
                    .map(|t| {
                        if t.power.is_finite() {
                            t.power
                        } else {
                            replaced += 1;
                            0.0
                        }
                    })
                    .collect()
            })
            .collect();

        if replaced > 0 {
            warn!(replaced, "Non-finite power values replaced with zero.");
        }

        Self {
            c1_values,
            alpha_values,
            power,
            replaced,
        }
    }

    /// Iterate `(c1, alpha, power)` cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.c1_values
            .iter()
            .zip(&self.power)
            .flat_map(move |(&c1, row)| {
                self.alpha_values
                    .iter()
                    .zip(row)
                    .map(move |(&alpha, &p)| (c1, alpha, p))
            })
    }

    /// Highest cell, first in row-major order on ties.
    pub fn peak(&self) -> Option<(f64, f64, f64)> {
        self.cells().fold(None, |best, cell| match best {
            Some((_, _, p)) if cell.2 <= p => best,
            _ => Some(cell),
        })
    }
}

/// Evaluate every grid point and collect the results as a [`PowerSurface`].
#[instrument(skip_all, name = "power_surface", fields(omega = omega))]
pub fn evaluate_power_surface(
    params: &SystemParameters,
    omega: f64,
    options: &OptimizerOptions,
    progress: Option<&mut dyn FnMut(usize, usize)>,
) -> OptimResult<PowerSurface> {
    let trials = evaluate_trials_with_progress(params, omega, options, progress)?;
    Ok(PowerSurface::from_trials(
        options.grid.c1.points()?,
        options.grid.alpha.points()?,
        &trials,
    ))
}
