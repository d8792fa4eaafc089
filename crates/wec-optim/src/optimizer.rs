//! Exhaustive maximum-power damping search.

use crate::error::{OptimError, OptimResult};
use crate::grid::DampingGrid;
use crate::trials::{Trial, evaluate_trials_with_progress};
use tracing::{info, instrument, warn};
use wec_sim::{DampingLaw, HeaveState, SystemParameters};

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerOptions {
    pub grid: DampingGrid,
    /// Number of wave periods integrated per trial.
    pub periods: f64,
    /// Fixed RK4 step (s).
    pub dt: f64,
    pub law: DampingLaw,
    pub initial_state: HeaveState,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            grid: DampingGrid::default(),
            periods: 40.0,
            dt: 0.2,
            law: DampingLaw::Nonlinear,
            initial_state: HeaveState::default(),
        }
    }
}

/// Best grid point found by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct DampingOptimum {
    pub best_c1: f64,
    pub best_alpha: f64,
    /// Average power at the optimum (W).
    pub best_power: f64,
    /// Every evaluated grid point, in iteration order.
    pub trials: Vec<Trial>,
    /// Trials ignored because their power was not finite.
    pub skipped: usize,
}

/// Pick the trial with the largest power.
///
/// Comparison is strict, so on ties the earliest trial wins. Non-finite
/// powers are skipped with a warning.
///
/// # Errors
/// `NoFiniteTrial` if no trial has a finite power.
pub fn select_best(trials: &[Trial]) -> OptimResult<(Trial, usize)> {
    let mut best: Option<Trial> = None;
    let mut skipped = 0;

    for trial in trials {
        if !trial.power.is_finite() {
            warn!(
                c1 = trial.c1,
                alpha = trial.alpha,
                power = trial.power,
                "Skipping non-finite trial."
            );
            skipped += 1;
            continue;
        }
        match best {
            Some(b) if trial.power > b.power => best = Some(*trial),
            None => best = Some(*trial),
            _ => {}
        }
    }

    best.map(|b| (b, skipped)).ok_or(OptimError::NoFiniteTrial {
        evaluated: trials.len(),
    })
}

/// Find the coupling damping coefficient that maximises average power at
/// wave frequency `omega`, using the default grid and settings.
///
/// `omega` sets the integration horizon only; the excitation inside each
/// trial uses `params.omega`.
pub fn optimize_damping(params: &SystemParameters, omega: f64) -> OptimResult<DampingOptimum> {
    optimize_damping_with(params, omega, &OptimizerOptions::default(), None)
}

/// [`optimize_damping`] with explicit options and optional row progress.
#[instrument(
    skip_all,
    name = "damping_optimization",
    fields(omega = omega, law = %options.law)
)]
pub fn optimize_damping_with(
    params: &SystemParameters,
    omega: f64,
    options: &OptimizerOptions,
    progress: Option<&mut dyn FnMut(usize, usize)>,
) -> OptimResult<DampingOptimum> {
    info!("Starting damping grid search.");

    let trials = evaluate_trials_with_progress(params, omega, options, progress)?;
    let (best, skipped) = select_best(&trials)?;

    info!(
        best_c1 = best.c1,
        best_power = best.power,
        trials = trials.len(),
        skipped,
        "Damping search finished."
    );

    Ok(DampingOptimum {
        best_c1: best.c1,
        best_alpha: best.alpha,
        best_power: best.power,
        trials,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridAxis;
    use crate::test_support::reference;

    fn trial(c1: f64, alpha: f64, power: f64) -> Trial {
        Trial { c1, alpha, power }
    }

    #[test]
    fn default_options() {
        let opts = OptimizerOptions::default();
        assert_eq!(opts.periods, 40.0);
        assert_eq!(opts.dt, 0.2);
        assert_eq!(opts.law, DampingLaw::Nonlinear);
        assert_eq!(opts.initial_state, HeaveState::default());
    }

    #[test]
    fn first_of_equal_maxima_wins() {
        let trials = [
            trial(0.0, 0.0, 1.0),
            trial(0.0, 0.1, 3.0),
            trial(1.0, 0.0, 3.0),
            trial(1.0, 0.1, 2.0),
        ];
        let (best, skipped) = select_best(&trials).unwrap();
        assert_eq!((best.c1, best.alpha), (0.0, 0.1));
        assert_eq!(skipped, 0);
    }

    #[test]
    fn non_finite_trials_are_skipped() {
        let trials = [
            trial(0.0, 0.0, f64::NAN),
            trial(1.0, 0.0, 2.0),
            trial(2.0, 0.0, f64::INFINITY),
        ];
        let (best, skipped) = select_best(&trials).unwrap();
        assert_eq!(best.c1, 1.0);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn all_non_finite_is_an_error() {
        let trials = [trial(0.0, 0.0, f64::NAN)];
        assert_eq!(
            select_best(&trials).unwrap_err(),
            OptimError::NoFiniteTrial { evaluated: 1 }
        );
        assert!(select_best(&[]).is_err());
    }

    #[test]
    fn reduced_search_is_deterministic_and_in_bounds() {
        let options = OptimizerOptions {
            grid: DampingGrid {
                c1: GridAxis::new(0.0, 20_000.0, 5_000.0),
                alpha: GridAxis::new(0.0, 1.0, 0.5),
            },
            periods: 10.0,
            ..OptimizerOptions::default()
        };
        let params = reference();
        let a = optimize_damping_with(&params, params.omega, &options, None).unwrap();
        let b = optimize_damping_with(&params, params.omega, &options, None).unwrap();

        assert_eq!(a.best_c1, b.best_c1);
        assert_eq!(a.best_power.to_bits(), b.best_power.to_bits());
        assert_eq!(a.trials.len(), 15);
        assert!((0.0..=20_000.0).contains(&a.best_c1));
        assert!(a.best_power >= 0.0);
        // Exponent does not affect the dynamics, so the first alpha wins.
        assert_eq!(a.best_alpha, 0.0);
    }
}
