//! Fixed-step time integrators.

use crate::error::SimResult;
use crate::model::TransientModel;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let k1 = model.rhs(t, x)?;

        let x2 = model.add(x, &model.scale(&k1, 0.5 * dt));
        let k2 = model.rhs(t + 0.5 * dt, &x2)?;

        let x3 = model.add(x, &model.scale(&k2, 0.5 * dt));
        let k3 = model.rhs(t + 0.5 * dt, &x3)?;

        let x4 = model.add(x, &model.scale(&k3, dt));
        let k4 = model.rhs(t + dt, &x4)?;

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        Ok(model.add(x, &model.scale(&k_sum, dt / 6.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dx/dt = x, exact solution e^t.
    struct Growth;

    impl TransientModel for Growth {
        type State = f64;

        fn rhs(&self, _t: f64, x: &f64) -> SimResult<f64> {
            Ok(*x)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    /// dx/dt = t, exact solution t²/2; exercises the stage times.
    struct Ramp;

    impl TransientModel for Ramp {
        type State = f64;

        fn rhs(&self, t: f64, _x: &f64) -> SimResult<f64> {
            Ok(t)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    #[test]
    fn single_step_matches_taylor_series() {
        let dt = 0.1_f64;
        let x1 = RK4.step(&Growth, 0.0, &1.0, dt).unwrap();
        // RK4 reproduces e^dt through the dt^4 term.
        let taylor = 1.0 + dt + dt.powi(2) / 2.0 + dt.powi(3) / 6.0 + dt.powi(4) / 24.0;
        assert!((x1 - taylor).abs() < 1e-14);
    }

    #[test]
    fn time_dependent_rhs_is_exact_for_polynomials() {
        let x1 = RK4.step(&Ramp, 1.0, &0.5, 0.5).unwrap();
        // x(1.5) = 1.5^2 / 2 = 1.125 starting from x(1) = 0.5
        assert!((x1 - 1.125).abs() < 1e-14);
    }
}
