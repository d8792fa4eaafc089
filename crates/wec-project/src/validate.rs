//! Scenario validation logic.

use crate::schema::{OptimizerDef, ScenarioFile, SimulationDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_scenario(scenario: &ScenarioFile) -> Result<(), ValidationError> {
    if scenario.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    for (name, value) in scenario.parameters.fields() {
        if !value.is_finite() {
            return Err(invalid(
                &format!("parameters.{name}"),
                value,
                "must be finite",
            ));
        }
    }

    let p = &scenario.parameters;
    if p.x_a1 == p.x_a0 {
        return Err(invalid(
            "parameters.x_a1",
            p.x_a1,
            "must differ from x_a0",
        ));
    }

    if let Some(sim) = &scenario.simulation {
        validate_simulation(sim)?;
    }
    if let Some(opt) = &scenario.optimizer {
        validate_optimizer(opt)?;
    }

    Ok(())
}

fn validate_simulation(sim: &SimulationDef) -> Result<(), ValidationError> {
    if sim.initial_state.len() != 4 {
        return Err(invalid(
            "simulation.initial_state",
            format!("{:?}", sim.initial_state),
            "must have exactly 4 components [x_a, x_b, v_a, v_b]",
        ));
    }
    if sim.initial_state.iter().any(|v| !v.is_finite()) {
        return Err(invalid(
            "simulation.initial_state",
            format!("{:?}", sim.initial_state),
            "must be finite",
        ));
    }
    if !(sim.dt.is_finite() && sim.dt > 0.0) {
        return Err(invalid("simulation.dt", sim.dt, "must be positive and finite"));
    }
    if !(sim.t0.is_finite() && sim.t_end.is_finite()) || sim.t_end < sim.t0 {
        return Err(invalid(
            "simulation.t_end",
            sim.t_end,
            "must be finite and not precede t0",
        ));
    }
    Ok(())
}

fn validate_axis(name: &str, start: f64, stop: f64, step: f64) -> Result<(), ValidationError> {
    if !(start.is_finite() && stop.is_finite()) {
        return Err(invalid(&format!("optimizer.{name}_start"), start, "bounds must be finite"));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(invalid(
            &format!("optimizer.{name}_step"),
            step,
            "must be positive and finite",
        ));
    }
    if stop < start {
        return Err(invalid(
            &format!("optimizer.{name}_stop"),
            stop,
            "must not precede start",
        ));
    }
    Ok(())
}

fn validate_optimizer(opt: &OptimizerDef) -> Result<(), ValidationError> {
    validate_axis("c1", opt.c1_start, opt.c1_stop, opt.c1_step)?;
    validate_axis("alpha", opt.alpha_start, opt.alpha_stop, opt.alpha_step)?;

    if !(opt.dt.is_finite() && opt.dt > 0.0) {
        return Err(invalid("optimizer.dt", opt.dt, "must be positive and finite"));
    }
    if !(opt.periods.is_finite() && opt.periods >= 0.0) {
        return Err(invalid(
            "optimizer.periods",
            opt.periods,
            "must be non-negative and finite",
        ));
    }
    if let Some(omega) = opt.omega {
        if !(omega.is_finite() && omega > 0.0) {
            return Err(invalid("optimizer.omega", omega, "must be positive and finite"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ParametersDef;

    fn base() -> ScenarioFile {
        ScenarioFile {
            version: 1,
            name: "base".to_string(),
            parameters: ParametersDef::reference(),
            simulation: Some(SimulationDef::default()),
            optimizer: Some(OptimizerDef::default()),
        }
    }

    fn field_of(err: ValidationError) -> String {
        match err {
            ValidationError::InvalidValue { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reference_scenario_is_valid() {
        validate_scenario(&base()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let mut s = base();
        s.version = 99;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        ));
    }

    #[test]
    fn rejects_equal_thresholds() {
        let mut s = base();
        s.parameters.x_a1 = s.parameters.x_a0;
        assert_eq!(field_of(validate_scenario(&s).unwrap_err()), "parameters.x_a1");
    }

    #[test]
    fn rejects_non_finite_parameter() {
        let mut s = base();
        s.parameters.k_e = f64::NAN;
        assert_eq!(field_of(validate_scenario(&s).unwrap_err()), "parameters.k_e");
    }

    #[test]
    fn rejects_bad_simulation_window() {
        let mut s = base();
        s.simulation = Some(SimulationDef {
            dt: 0.0,
            ..SimulationDef::default()
        });
        assert_eq!(field_of(validate_scenario(&s).unwrap_err()), "simulation.dt");

        s.simulation = Some(SimulationDef {
            t0: 5.0,
            t_end: 1.0,
            ..SimulationDef::default()
        });
        assert_eq!(field_of(validate_scenario(&s).unwrap_err()), "simulation.t_end");

        s.simulation = Some(SimulationDef {
            initial_state: vec![1.0, 1.0],
            ..SimulationDef::default()
        });
        assert_eq!(
            field_of(validate_scenario(&s).unwrap_err()),
            "simulation.initial_state"
        );
    }

    #[test]
    fn rejects_bad_grid() {
        let mut s = base();
        s.optimizer = Some(OptimizerDef {
            c1_step: 0.0,
            ..OptimizerDef::default()
        });
        assert_eq!(field_of(validate_scenario(&s).unwrap_err()), "optimizer.c1_step");

        s.optimizer = Some(OptimizerDef {
            alpha_start: 1.0,
            alpha_stop: 0.0,
            ..OptimizerDef::default()
        });
        assert_eq!(field_of(validate_scenario(&s).unwrap_err()), "optimizer.alpha_stop");
    }
}
