//! Writing run results as tab-separated tables.

use std::io::Write;
use std::path::Path;

use crate::error::AppResult;
use crate::run_service::{OptimizationResponse, SimulationResponse, SurfaceResponse};

/// Write the trajectory table to `path`.
pub fn export_trajectory(response: &SimulationResponse, path: &Path) -> AppResult<()> {
    wec_results::write_trajectory_file(path, &response.trajectory, response.plan.window.dt)?;
    Ok(())
}

/// Write the trajectory table to any writer (e.g. stdout).
pub fn write_trajectory<W: Write>(response: &SimulationResponse, out: W) -> AppResult<()> {
    wec_results::write_trajectory(out, &response.trajectory, response.plan.window.dt)?;
    Ok(())
}

pub fn write_optimum<W: Write>(response: &OptimizationResponse, out: W) -> AppResult<()> {
    wec_results::write_optimum(out, &response.optimum)?;
    Ok(())
}

pub fn export_surface(response: &SurfaceResponse, path: &Path) -> AppResult<()> {
    let file = std::fs::File::create(path)?;
    write_surface(response, std::io::BufWriter::new(file))
}

pub fn write_surface<W: Write>(response: &SurfaceResponse, out: W) -> AppResult<()> {
    wec_results::write_power_surface(out, &response.surface)?;
    Ok(())
}
