//! Constant-acceleration kinematics: free fall and projectile motion.
//!
//! The numeric core lives in [`crate::core`]. Simulations are exposed as lazy,
//! restartable sample sequences; [`report`] and [`chart`] turn those
//! sequences into console lines or an SVG plot.

pub mod chart;
pub mod core;
pub mod error;
pub mod report;

pub use crate::core::ballistics::{Projectile, Trajectory, TrajectorySample};
pub use crate::core::constants::{DEG_TO_RAD, GRAVITY, GRAVITY_HALF, TIME_STEP};
pub use crate::core::motion::{
    FreeFall, FreeFallSample, degree_to_radian, displacement, free_fall, free_fall_samples,
    free_fall_time,
};
pub use crate::error::{ChartError, InputError, ReportError};
