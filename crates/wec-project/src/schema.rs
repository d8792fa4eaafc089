//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFile {
    pub version: u32,
    pub name: String,
    pub parameters: ParametersDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<OptimizerDef>,
}

/// Physical parameters of the two-body converter, SI units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParametersDef {
    /// Floater mass (kg)
    pub m_a: f64,
    /// Oscillator mass (kg)
    pub m_b: f64,
    /// Heave added mass (kg)
    #[serde(default)]
    pub m_add: f64,
    /// Coupling spring stiffness (N/m)
    pub k_e: f64,
    /// Coupling damping coefficient
    pub c1: f64,
    /// Wave radiation damping (N·s/m)
    pub c2: f64,
    /// Excitation force amplitude (N)
    pub f: f64,
    /// Wave frequency (rad/s)
    pub omega: f64,
    /// Sea water density (kg/m³)
    pub rho0: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Cylinder height (m)
    pub h_cyl: f64,
    /// Cone height (m)
    pub h_cone: f64,
    /// Floater radius (m)
    pub r: f64,
    /// Displacement at which the cylinder is fully submerged (m)
    pub x_a0: f64,
    /// Displacement at which the cylinder is fully exposed (m)
    pub x_a1: f64,
}

impl ParametersDef {
    /// Reference cylinder/cone buoy, a starting point for new scenarios.
    pub fn reference() -> Self {
        Self {
            m_a: 4866.0,
            m_b: 2433.0,
            m_add: 1335.535,
            k_e: 80000.0,
            c1: 10000.0,
            c2: 656.3616,
            f: 6250.0,
            omega: 1.4005,
            rho0: 1025.0,
            g: 9.81,
            h_cyl: 0.5,
            h_cone: 0.3,
            r: 0.1,
            x_a0: 0.2,
            x_a1: -0.1,
        }
    }

    /// Name/value pairs in declaration order, for validation and display.
    pub fn fields(&self) -> [(&'static str, f64); 15] {
        [
            ("m_a", self.m_a),
            ("m_b", self.m_b),
            ("m_add", self.m_add),
            ("k_e", self.k_e),
            ("c1", self.c1),
            ("c2", self.c2),
            ("f", self.f),
            ("omega", self.omega),
            ("rho0", self.rho0),
            ("g", self.g),
            ("h_cyl", self.h_cyl),
            ("h_cone", self.h_cone),
            ("r", self.r),
            ("x_a0", self.x_a0),
            ("x_a1", self.x_a1),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DampingLawDef {
    Linear,
    #[default]
    Nonlinear,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationDef {
    /// `[x_a, x_b, v_a, v_b]`
    #[serde(default = "default_initial_state")]
    pub initial_state: Vec<f64>,
    #[serde(default)]
    pub t0: f64,
    pub t_end: f64,
    pub dt: f64,
    #[serde(default)]
    pub damping_law: DampingLawDef,
}

impl Default for SimulationDef {
    fn default() -> Self {
        Self {
            initial_state: default_initial_state(),
            t0: 0.0,
            t_end: 10.0,
            dt: 0.2,
            damping_law: DampingLawDef::Nonlinear,
        }
    }
}

fn default_initial_state() -> Vec<f64> {
    vec![0.0; 4]
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OptimizerDef {
    pub c1_start: f64,
    pub c1_stop: f64,
    pub c1_step: f64,
    pub alpha_start: f64,
    pub alpha_stop: f64,
    pub alpha_step: f64,
    /// Wave periods integrated per trial.
    pub periods: f64,
    pub dt: f64,
    pub damping_law: DampingLawDef,
    /// Wave frequency used for the search horizon; defaults to the
    /// scenario's `omega`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omega: Option<f64>,
}

impl Default for OptimizerDef {
    fn default() -> Self {
        Self {
            c1_start: 0.0,
            c1_stop: 100_000.0,
            c1_step: 1_000.0,
            alpha_start: 0.0,
            alpha_stop: 1.0,
            alpha_step: 0.1,
            periods: 40.0,
            dt: 0.2,
            damping_law: DampingLawDef::Nonlinear,
            omega: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_law_uses_lowercase_names() {
        let yaml = serde_yaml::to_string(&DampingLawDef::Linear).unwrap();
        assert_eq!(yaml.trim(), "linear");
        let law: DampingLawDef = serde_yaml::from_str("nonlinear").unwrap();
        assert_eq!(law, DampingLawDef::Nonlinear);
    }

    #[test]
    fn optional_blocks_default() {
        let yaml = r#"
version: 1
name: minimal
parameters:
  m_a: 1.0
  m_b: 1.0
  k_e: 1.0
  c1: 0.0
  c2: 0.0
  f: 0.0
  omega: 1.0
  rho0: 1025.0
  g: 9.81
  h_cyl: 0.5
  h_cone: 0.3
  r: 0.1
  x_a0: 0.2
  x_a1: -0.1
simulation:
  t_end: 5.0
  dt: 0.1
optimizer:
  c1_stop: 5000.0
"#;
        let s: ScenarioFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(s.parameters.m_add, 0.0);

        let sim = s.simulation.unwrap();
        assert_eq!(sim.initial_state, vec![0.0; 4]);
        assert_eq!(sim.t0, 0.0);
        assert_eq!(sim.damping_law, DampingLawDef::Nonlinear);

        let opt = s.optimizer.unwrap();
        assert_eq!(opt.c1_stop, 5000.0);
        assert_eq!(opt.c1_step, 1000.0);
        assert_eq!(opt.periods, 40.0);
        assert_eq!(opt.omega, None);
    }
}
