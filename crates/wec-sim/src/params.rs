//! Physical parameters of the two-body heave system.

use crate::error::{SimError, SimResult};

/// Immutable parameter set for one simulation run.
///
/// Units are SI throughout. The engine only checks what would make the
/// equations undefined (`x_a1 == x_a0`, non-finite inputs); physical
/// plausibility such as positive masses is the caller's responsibility.
///
/// ```text
/// (m_a + m_add) * a_A = F cos(ωt) - D(v_A - v_B) - c2 v_A - k_e (x_A - x_B) - B(x_A)
///            m_b * a_B = -k_e (x_B - x_A) - D(v_A - v_B)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemParameters {
    /// Floater mass (kg)
    pub m_a: f64,
    /// Oscillator mass (kg)
    pub m_b: f64,
    /// Heave added mass of the floater (kg)
    pub m_add: f64,
    /// Coupling spring stiffness (N/m)
    pub k_e: f64,
    /// Coupling damping coefficient (N·s/m for the linear law)
    pub c1: f64,
    /// Floater radiation damping coefficient (N·s/m)
    pub c2: f64,
    /// Wave excitation force amplitude (N)
    pub f: f64,
    /// Wave angular frequency (rad/s)
    pub omega: f64,
    /// Seawater density (kg/m³)
    pub rho0: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Height of the cylindrical section of the floater (m)
    pub h_cyl: f64,
    /// Height of the conical section of the floater (m)
    pub h_cone: f64,
    /// Floater radius (m)
    pub r: f64,
    /// Floater displacement at which the cylinder is fully submerged (m)
    pub x_a0: f64,
    /// Floater displacement at which the cylinder is fully emerged (m)
    pub x_a1: f64,
}

impl SystemParameters {
    /// Check that the parameter set defines a well-posed system.
    ///
    /// # Errors
    /// `InvalidConfiguration` if any field is non-finite or if
    /// `x_a1 == x_a0` (the buoyancy interpolation would divide by zero).
    pub fn validate(&self) -> SimResult<()> {
        let fields = [
            self.m_a,
            self.m_b,
            self.m_add,
            self.k_e,
            self.c1,
            self.c2,
            self.f,
            self.omega,
            self.rho0,
            self.g,
            self.h_cyl,
            self.h_cone,
            self.r,
            self.x_a0,
            self.x_a1,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(SimError::InvalidConfiguration {
                what: "all parameters must be finite",
            });
        }
        if self.x_a1 == self.x_a0 {
            return Err(SimError::InvalidConfiguration {
                what: "x_a1 must differ from x_a0",
            });
        }
        Ok(())
    }

    /// Validate and return `self`, for use at construction sites.
    pub fn validated(self) -> SimResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Copy of these parameters with a different coupling damping coefficient.
    pub fn with_coupling_damping(&self, c1: f64) -> Self {
        Self { c1, ..*self }
    }

    /// Combined floater inertia (own mass plus added mass).
    pub fn floater_inertia(&self) -> f64 {
        self.m_a + self.m_add
    }

    /// Wave period 2π/ω (s).
    pub fn wave_period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.omega
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::SystemParameters;

    /// Floater/oscillator pair used across the unit tests.
    pub fn reference() -> SystemParameters {
        SystemParameters {
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
}
