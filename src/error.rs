use std::io;

use thiserror::Error;

/// Failure reading a number from the console.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended unexpectedly (EOF)")]
    Eof,
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("{label} must be a finite number, got {value}")]
    NotFinite { label: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("trajectory has no samples to draw")]
    EmptyTrajectory,
    #[error("failed to draw chart: {0}")]
    Draw(String),
}
