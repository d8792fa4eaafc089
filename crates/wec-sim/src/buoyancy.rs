//! Buoyancy restoring force of the cylinder/cone floater.

use crate::params::SystemParameters;
use std::f64::consts::PI;

/// Restoring force on the floater at displacement `x_a` (N).
///
/// Below `x_a0` only the cylindrical section is wetted and the force is
/// constant. From `x_a0` onward the wetted volume is interpolated linearly
/// toward the cone regime at `x_a1`:
///
/// ```text
/// B(x) = ρ g π R² H                                 x <  x_a0
/// B(x) = ρ g π R² (H + h (x - x_a0) / (x_a1 - x_a0)) x >= x_a0
/// ```
///
/// No clamping is applied past `x_a1`; the formula extrapolates. The caller
/// guarantees `x_a1 != x_a0` (see [`SystemParameters::validate`]).
pub fn buoyancy_force(x_a: f64, params: &SystemParameters) -> f64 {
    let base = params.rho0 * params.g * PI * params.r * params.r;
    if x_a >= params.x_a0 {
        base * (params.h_cyl + params.h_cone * (x_a - params.x_a0) / (params.x_a1 - params.x_a0))
    } else {
        base * params.h_cyl
    }
}
