use std::iter::FusedIterator;

use log::{debug, trace};

use crate::core::constants::{GRAVITY, TIME_STEP};
use crate::core::motion::{degree_to_radian, displacement};

/// A projectile launched from ground level.
///
/// The velocity components are derived once in [`Projectile::new`] and the
/// value is immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    angle_deg: f64,
    speed: f64,
    velocity_x: f64,
    velocity_y: f64,
}

impl Projectile {
    pub fn new(speed: f64, angle_deg: f64) -> Self {
        let theta = degree_to_radian(angle_deg);
        Self {
            angle_deg,
            speed,
            velocity_x: speed * theta.cos(),
            velocity_y: speed * theta.sin(),
        }
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn velocity_x(&self) -> f64 {
        self.velocity_x
    }

    pub fn velocity_y(&self) -> f64 {
        self.velocity_y
    }

    /// Total flight time when launch and landing heights are equal.
    ///
    /// The final vertical velocity mirrors the initial one, so
    /// `t = (vfy - viy) / g`.
    pub fn flight_time(&self) -> f64 {
        let viy = self.velocity_y;
        let vfy = -viy;
        (vfy - viy) / GRAVITY
    }

    /// Horizontal and vertical displacement `time` seconds after launch.
    pub fn position_at(&self, time: f64) -> (f64, f64) {
        let x = displacement(self.velocity_x, time, 0.0);
        let y = displacement(self.velocity_y, time, GRAVITY);
        (x, y)
    }

    /// Horizontal distance covered by the time the projectile is back at
    /// launch height.
    pub fn range(&self) -> f64 {
        self.position_at(self.flight_time()).0
    }

    /// Height of the apex of the trajectory, reached halfway through the
    /// flight.
    pub fn peak_height(&self) -> f64 {
        self.position_at(self.flight_time() / 2.0).1
    }

    /// Samples the flight path every [`TIME_STEP`] until the projectile
    /// drops below launch height.
    pub fn launch(&self) -> Trajectory {
        Trajectory {
            projectile: *self,
            step: 0,
            landed: false,
        }
    }
}

/// One sample of a trajectory: time plus horizontal and vertical
/// displacement from the launch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

/// Lazy flight path of a [`Projectile`].
///
/// The first sample below launch height is yielded and ends the sequence.
#[derive(Clone, Debug)]
pub struct Trajectory {
    projectile: Projectile,
    step: usize,
    landed: bool,
}

impl Iterator for Trajectory {
    type Item = TrajectorySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.landed {
            return None;
        }

        let time = self.step as f64 * TIME_STEP;
        let (x, y) = self.projectile.position_at(time);
        self.step += 1;
        trace!("trajectory: time {time:.2}, x {x:.3}, y {y:.3}");

        if y < 0.0 {
            self.landed = true;
            debug!(
                "projectile at {:.1} deg, {:.2} m/s landed after {} samples at {time:.2} s",
                self.projectile.angle_deg, self.projectile.speed, self.step
            );
        }

        Some(TrajectorySample { time, x, y })
    }
}

impl FusedIterator for Trajectory {}
