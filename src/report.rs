//! Console presentation of the simulations.
//!
//! Every sample becomes one progress line, written in chronological order.

use std::io::Write;

use crate::core::ballistics::{Projectile, TrajectorySample};
use crate::core::motion::{FreeFallSample, free_fall_samples};
use crate::error::ReportError;

pub fn format_free_fall_sample(sample: &FreeFallSample) -> String {
    format!(
        "time {:.2}, displacement {:.3}",
        sample.time, sample.displacement
    )
}

/// `vx`/`vy` carry the horizontal and vertical displacement of the sample.
pub fn format_trajectory_sample(sample: &TrajectorySample) -> String {
    format!(
        "time {:.2}, vx {:2.3}, vy {:2.3}",
        sample.time, sample.x, sample.y
    )
}

/// Writes one line per free-fall sample and returns the time of the last
/// one (0 if the target needs no fall at all).
pub fn write_free_fall<W: Write>(target: f64, out: &mut W) -> Result<f64, ReportError> {
    let mut time = 0.0;
    for sample in free_fall_samples(target) {
        writeln!(out, "{}", format_free_fall_sample(&sample))?;
        time = sample.time;
    }
    Ok(time)
}

/// Writes one line per trajectory sample and returns how many were written.
pub fn write_trajectory<W: Write>(
    projectile: &Projectile,
    out: &mut W,
) -> Result<usize, ReportError> {
    let mut count = 0;
    for sample in projectile.launch() {
        writeln!(out, "{}", format_trajectory_sample(&sample))?;
        count += 1;
    }
    Ok(count)
}

pub fn write_flight_summary<W: Write>(
    projectile: &Projectile,
    out: &mut W,
) -> Result<(), ReportError> {
    writeln!(out, "Time of flight: {:.4} s", projectile.flight_time())?;
    writeln!(out, "Horizontal distance: {:.4} m", projectile.range())?;
    writeln!(out, "Peak height: {:.4} m", projectile.peak_height())?;
    Ok(())
}
