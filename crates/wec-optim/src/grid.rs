//! Inclusive search grids over the damping parameters.

use crate::error::OptimResult;

/// One swept parameter: `start, start + step, ..., stop` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAxis {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl GridAxis {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Generate the axis points in ascending order.
    pub fn points(&self) -> OptimResult<Vec<f64>> {
        Ok(wec_core::grid_points(self.start, self.stop, self.step)?)
    }
}

/// Two-dimensional grid: coupling damping coefficient (outer) by damping
/// exponent (inner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingGrid {
    pub c1: GridAxis,
    pub alpha: GridAxis,
}

impl Default for DampingGrid {
    /// 0..=100000 step 1000 for `c1`, 0..=1 step 0.1 for `alpha`.
    fn default() -> Self {
        Self {
            c1: GridAxis::new(0.0, 100_000.0, 1_000.0),
            alpha: GridAxis::new(0.0, 1.0, 0.1),
        }
    }
}

impl DampingGrid {
    /// Total number of grid points.
    pub fn len(&self) -> OptimResult<usize> {
        Ok(self.c1.points()?.len() * self.alpha.points()?.len())
    }

    pub fn is_empty(&self) -> OptimResult<bool> {
        Ok(self.len()? == 0)
    }
}
