//! Tab-separated writers built on `csv`.

use crate::types::{SummaryRow, SurfaceRow, TrajectoryRow};
use crate::{ReportError, ReportResult};
use std::io::Write;
use std::path::Path;
use wec_optim::{DampingOptimum, PowerSurface};
use wec_sim::Trajectory;

/// Tab-delimited record writer.
///
/// The header row is written up front, so a table with no records still
/// carries its column names.
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, header: &[&str]) -> ReportResult<Self> {
        let mut inner = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(writer);
        inner.write_record(header)?;
        Ok(Self { inner })
    }

    pub fn row<T: serde::Serialize>(&mut self, row: &T) -> ReportResult<()> {
        self.inner.serialize(row)?;
        Ok(())
    }

    pub fn finish(mut self) -> ReportResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Write `time  xA  xB  vA  vB`, one line per sample, with `time = i * dt`.
///
/// Times are step offsets from zero regardless of where the run started.
pub fn write_trajectory<W: Write>(out: W, trajectory: &Trajectory, dt: f64) -> ReportResult<()> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ReportError::InvalidStep { dt });
    }

    let mut table = TableWriter::new(out, &TrajectoryRow::HEADER)?;
    for (i, state) in trajectory.iter().enumerate() {
        table.row(&TrajectoryRow::new(i as f64 * dt, state))?;
    }
    table.finish()
}

pub fn write_trajectory_file(path: &Path, trajectory: &Trajectory, dt: f64) -> ReportResult<()> {
    let file = std::fs::File::create(path)?;
    write_trajectory(std::io::BufWriter::new(file), trajectory, dt)
}

/// Write the search result as `quantity  value  unit` lines.
pub fn write_optimum<W: Write>(out: W, optimum: &DampingOptimum) -> ReportResult<()> {
    let rows = [
        SummaryRow {
            quantity: "max_power",
            value: optimum.best_power,
            unit: "W",
        },
        SummaryRow {
            quantity: "optimal_c1",
            value: optimum.best_c1,
            unit: "N*s/m",
        },
        SummaryRow {
            quantity: "optimal_alpha",
            value: optimum.best_alpha,
            unit: "",
        },
    ];

    let mut table = TableWriter::new(out, &SummaryRow::HEADER)?;
    for row in &rows {
        table.row(row)?;
    }
    table.finish()
}

/// Write every surface cell as `c1  alpha  power`, row-major.
pub fn write_power_surface<W: Write>(out: W, surface: &PowerSurface) -> ReportResult<()> {
    let mut table = TableWriter::new(out, &SurfaceRow::HEADER)?;
    for (c1, alpha, power) in surface.cells() {
        table.row(&SurfaceRow { c1, alpha, power })?;
    }
    table.finish()
}
