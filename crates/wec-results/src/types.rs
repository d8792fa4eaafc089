//! Row types written to the report tables.

use serde::Serialize;
use wec_sim::HeaveState;

/// One trajectory sample.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TrajectoryRow {
    pub time: f64,
    pub x_a: f64,
    pub x_b: f64,
    pub v_a: f64,
    pub v_b: f64,
}

impl TrajectoryRow {
    pub const HEADER: [&'static str; 5] = ["time", "xA", "xB", "vA", "vB"];

    pub fn new(time: f64, state: &HeaveState) -> Self {
        Self {
            time,
            x_a: state.x_a,
            x_b: state.x_b,
            v_a: state.v_a,
            v_b: state.v_b,
        }
    }
}

/// One cell of a power surface.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SurfaceRow {
    pub c1: f64,
    pub alpha: f64,
    pub power: f64,
}

impl SurfaceRow {
    pub const HEADER: [&'static str; 3] = ["c1", "alpha", "power"];
}

/// Key/value/unit line of the optimizer summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryRow {
    pub quantity: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl SummaryRow {
    pub const HEADER: [&'static str; 3] = ["quantity", "value", "unit"];
}
