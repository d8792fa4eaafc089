//! Four-component heave state.

use crate::error::{SimError, SimResult};

/// Heave state `[x_a, x_b, v_a, v_b]`.
///
/// Used both for the state itself and for its time derivative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaveState {
    /// Floater displacement (m)
    pub x_a: f64,
    /// Oscillator displacement (m)
    pub x_b: f64,
    /// Floater velocity (m/s)
    pub v_a: f64,
    /// Oscillator velocity (m/s)
    pub v_b: f64,
}

impl HeaveState {
    pub const DIM: usize = 4;

    pub fn new(x_a: f64, x_b: f64, v_a: f64, v_b: f64) -> Self {
        Self { x_a, x_b, v_a, v_b }
    }

    /// Floater velocity relative to the oscillator.
    pub fn relative_velocity(&self) -> f64 {
        self.v_a - self.v_b
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            x_a: self.x_a + other.x_a,
            x_b: self.x_b + other.x_b,
            v_a: self.v_a + other.v_a,
            v_b: self.v_b + other.v_b,
        }
    }

    /// Componentwise scaling.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x_a: self.x_a * factor,
            x_b: self.x_b * factor,
            v_a: self.v_a * factor,
            v_b: self.v_b * factor,
        }
    }

    pub fn to_array(&self) -> [f64; Self::DIM] {
        [self.x_a, self.x_b, self.v_a, self.v_b]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; HeaveState::DIM]> for HeaveState {
    fn from(v: [f64; HeaveState::DIM]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl TryFrom<&[f64]> for HeaveState {
    type Error = SimError;

    fn try_from(values: &[f64]) -> SimResult<Self> {
        match values {
            [x_a, x_b, v_a, v_b] => Ok(Self::new(*x_a, *x_b, *v_a, *v_b)),
            _ => Err(SimError::InvalidInput {
                what: "state must have exactly 4 components [x_a, x_b, v_a, v_b]",
            }),
        }
    }
}
