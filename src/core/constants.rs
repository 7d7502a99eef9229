use std::f64::consts::PI;

/// Gravitational acceleration in m/s^2. Negative is downward.
pub const GRAVITY: f64 = -9.8;
pub const GRAVITY_HALF: f64 = GRAVITY / 2.0;

pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Simulated seconds between two samples of a stepped simulation.
pub const TIME_STEP: f64 = 0.1;
