//! Average power extracted by the coupling damper.

use crate::dynamics::DampingLaw;
use crate::error::{SimError, SimResult};
use crate::sim::Trajectory;
use crate::state::HeaveState;

/// Offset added to `|v_rel|` under the half-power law so the square root is
/// never evaluated at exactly zero.
pub const POWER_EPSILON: f64 = 1e-10;

/// Power absorbed by the damper for one sampled state (W).
///
/// - Linear: `c1 * v_rel²`
/// - Nonlinear: `c1 * (|v_rel| + ε)^0.5 * v_rel²`
pub fn instantaneous_power(state: &HeaveState, c1: f64, law: DampingLaw) -> f64 {
    let rel = state.relative_velocity();
    match law {
        DampingLaw::Linear => c1 * rel * rel,
        DampingLaw::Nonlinear => c1 * (rel.abs() + POWER_EPSILON).sqrt() * rel * rel,
    }
}

/// Mean of the per-sample damper power over every state in `trajectory`.
///
/// This is a sample mean (sum divided by the number of samples), not a
/// time integral divided by the elapsed time.
///
/// # Errors
/// `EmptyTrajectory` if `trajectory` holds no samples.
pub fn average_power(trajectory: &Trajectory, c1: f64, law: DampingLaw) -> SimResult<f64> {
    if trajectory.is_empty() {
        return Err(SimError::EmptyTrajectory);
    }

    let total: f64 = trajectory
        .iter()
        .map(|state| instantaneous_power(state, c1, law))
        .sum();

    Ok(total / trajectory.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(v_a: f64, v_b: f64) -> HeaveState {
        HeaveState::new(0.0, 0.0, v_a, v_b)
    }

    #[test]
    fn empty_trajectory_is_rejected() {
        let err = average_power(&Trajectory::default(), 1000.0, DampingLaw::Linear).unwrap_err();
        assert_eq!(err, SimError::EmptyTrajectory);
    }

    #[test]
    fn linear_power_is_sample_mean() {
        let traj =
            Trajectory::from_states(vec![moving(1.0, 0.0), moving(0.0, 2.0), moving(0.0, 0.0)]);
        // (10*1 + 10*4 + 0) / 3
        let p = average_power(&traj, 10.0, DampingLaw::Linear).unwrap();
        assert!((p - 50.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn nonlinear_power_includes_epsilon() {
        let traj = Trajectory::from_states(vec![moving(4.0, 0.0)]);
        let p = average_power(&traj, 2.0, DampingLaw::Nonlinear).unwrap();
        let expected = 2.0 * (4.0 + POWER_EPSILON).sqrt() * 16.0;
        assert_eq!(p, expected);
    }

    #[test]
    fn zero_relative_velocity_gives_zero_power() {
        let traj = Trajectory::from_states(vec![moving(1.5, 1.5)]);
        assert_eq!(average_power(&traj, 5.0, DampingLaw::Nonlinear).unwrap(), 0.0);
        assert_eq!(average_power(&traj, 5.0, DampingLaw::Linear).unwrap(), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linear_power_is_non_negative(
            c1 in 0.0_f64..1e5,
            vels in prop::collection::vec((-10.0_f64..10.0, -10.0_f64..10.0), 1..50),
        ) {
            let states = vels
                .iter()
                .map(|&(v_a, v_b)| HeaveState::new(0.0, 0.0, v_a, v_b))
                .collect();
            let traj = Trajectory::from_states(states);
            let p = average_power(&traj, c1, DampingLaw::Linear).unwrap();
            prop_assert!(p >= 0.0);
        }
    }
}
