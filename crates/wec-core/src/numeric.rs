use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Slack applied when counting grid intervals, so that `1.0 / 0.1` still
/// yields ten intervals after rounding.
const GRID_SLACK: Real = 1e-9;

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Number of whole fixed steps of size `dt` that fit in `[t0, t_end]`.
///
/// Truncates toward zero: a trailing partial interval shorter than `dt` is
/// dropped, never rounded up.
pub fn whole_steps(t0: Real, t_end: Real, dt: Real) -> CoreResult<usize> {
    let t0 = ensure_finite(t0, "t0")?;
    let t_end = ensure_finite(t_end, "t_end")?;
    let dt = ensure_finite(dt, "dt")?;
    if dt <= 0.0 {
        return Err(CoreError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if t_end < t0 {
        return Err(CoreError::InvalidArg {
            what: "t_end must not precede t0",
        });
    }
    let steps = ((t_end - t0) / dt).floor();
    if !steps.is_finite() || steps >= usize::MAX as Real {
        return Err(CoreError::InvalidArg {
            what: "step count exceeds addressable range",
        });
    }
    Ok(steps as usize)
}

/// Inclusive, evenly spaced grid `start, start + step, ..., stop`.
///
/// Points are computed as `start + i * step` rather than by repeated
/// addition, so long grids do not drift.
pub fn grid_points(start: Real, stop: Real, step: Real) -> CoreResult<Vec<Real>> {
    let start = ensure_finite(start, "grid start")?;
    let stop = ensure_finite(stop, "grid stop")?;
    let step = ensure_finite(step, "grid step")?;
    if step <= 0.0 {
        return Err(CoreError::InvalidArg {
            what: "grid step must be positive",
        });
    }
    if stop < start {
        return Err(CoreError::InvalidArg {
            what: "grid stop must not precede start",
        });
    }

    let intervals = ((stop - start) / step + GRID_SLACK).floor();
    if !intervals.is_finite() || intervals >= usize::MAX as Real {
        return Err(CoreError::InvalidArg {
            what: "grid point count exceeds addressable range",
        });
    }
    let intervals = intervals as usize;
    Ok((0..=intervals).map(|i| start + i as Real * step).collect())
}
