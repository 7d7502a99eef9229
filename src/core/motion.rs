use std::iter::FusedIterator;

use log::{debug, trace, warn};

use crate::core::constants::{DEG_TO_RAD, GRAVITY, GRAVITY_HALF, TIME_STEP};

/// Displacement of an object after `time` seconds under constant
/// `acceleration`: `d = vi * t + 1/2 * a * t^2`.
pub fn displacement(initial_velocity: f64, time: f64, acceleration: f64) -> f64 {
    let half_accel = 0.5 * acceleration;
    (initial_velocity * time) + (half_accel * time.powi(2))
}

pub fn degree_to_radian(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Time needed to fall `displacement` metres from rest.
///
/// The displacement must carry the same sign as [`GRAVITY`], so a drop of
/// 8.52 m is passed as `-8.52`. A positive displacement has no real solution
/// and yields NaN.
pub fn free_fall_time(displacement: f64) -> f64 {
    let time = (displacement / GRAVITY_HALF).sqrt();
    if time.is_nan() {
        warn!("free fall time undefined for displacement {displacement}: sign must match gravity");
    }
    time
}

/// One sample of a free-fall simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreeFallSample {
    pub time: f64,
    pub displacement: f64,
}

/// Free fall from rest, sampled every [`TIME_STEP`] until the fallen
/// distance reaches the target magnitude.
///
/// The sample that reaches the target is the last one yielded. Only
/// magnitudes are compared, so the sign of the target does not matter.
#[derive(Clone, Debug)]
pub struct FreeFall {
    target: f64,
    fallen: f64,
    step: usize,
}

impl FreeFall {
    pub fn new(target: f64) -> Self {
        Self {
            target: target.abs(),
            fallen: 0.0,
            step: 0,
        }
    }
}

impl Iterator for FreeFall {
    type Item = FreeFallSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fallen < self.target {
            let time = self.step as f64 * TIME_STEP;
            let current = displacement(0.0, time, GRAVITY);
            self.step += 1;
            self.fallen = current.abs();
            trace!("free fall: time {time:.2}, displacement {current:.3}");
            Some(FreeFallSample {
                time,
                displacement: current,
            })
        } else {
            None
        }
    }
}

impl FusedIterator for FreeFall {}

pub fn free_fall_samples(target: f64) -> FreeFall {
    FreeFall::new(target)
}

/// Runs the free-fall simulation and returns the time of its final sample,
/// or 0 when the target is already reached at rest.
pub fn free_fall(target: f64) -> f64 {
    let mut samples = 0usize;
    let time = free_fall_samples(target)
        .inspect(|_| samples += 1)
        .last()
        .map_or(0.0, |sample| sample.time);
    debug!("free fall to {target} finished after {samples} samples at {time:.2} s");
    time
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn displacement_from_rest_is_exact() {
        assert_eq!(displacement(0.0, 0.0, GRAVITY), 0.0);
        assert_eq!(displacement(0.0, 1.0, GRAVITY), -4.9);
        assert_eq!(displacement(0.0, 2.0, GRAVITY), -19.6);
    }

    #[test]
    fn displacement_without_acceleration_is_linear() {
        assert_eq!(displacement(3.0, 2.0, 0.0), 6.0);
        assert_eq!(displacement(-1.5, 4.0, 0.0), -6.0);
    }

    #[test]
    fn displacement_combines_both_terms() {
        assert_close(displacement(10.0, 1.0, GRAVITY), 5.1, 1e-12);
    }

    #[test]
    fn converts_degrees() {
        assert_eq!(degree_to_radian(0.0), 0.0);
        assert_close(degree_to_radian(180.0), std::f64::consts::PI, 1e-12);
        assert_close(degree_to_radian(-90.0), -std::f64::consts::FRAC_PI_2, 1e-12);
    }

    #[test]
    fn computes_free_fall_time() {
        assert_close(free_fall_time(-8.52), 1.32, 0.01);
        assert_close(free_fall_time(-19.6), 2.0, 1e-12);
        assert_eq!(free_fall_time(0.0), 0.0);
    }

    #[test]
    fn free_fall_time_with_wrong_sign_is_nan() {
        assert!(free_fall_time(8.52).is_nan());
    }

    #[test]
    fn free_fall_reaches_target_at_four_seconds() {
        assert_close(free_fall(78.4), 4.0, 1e-9);
    }

    #[test]
    fn free_fall_ignores_target_sign() {
        assert_eq!(free_fall(-78.4), free_fall(78.4));
    }

    #[test]
    fn zero_target_emits_nothing() {
        assert_eq!(free_fall_samples(0.0).count(), 0);
        assert_eq!(free_fall(0.0), 0.0);
    }

    #[test]
    fn nan_target_emits_nothing() {
        assert_eq!(free_fall_samples(f64::NAN).count(), 0);
    }

    #[test]
    fn tiny_target_stops_after_first_fall_step() {
        let samples: Vec<_> = free_fall_samples(0.01).collect();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].time, 0.0);
        assert_eq!(samples[0].displacement, 0.0);
        assert_close(samples[1].displacement, -0.049, 1e-12);
    }

    #[test]
    fn last_sample_reaches_target_and_previous_does_not() {
        let samples: Vec<_> = free_fall_samples(10.0).collect();
        let (last, rest) = samples.split_last().expect("samples");
        assert!(last.displacement.abs() >= 10.0);
        assert!(rest.iter().all(|s| s.displacement.abs() < 10.0));
        assert!(samples.iter().all(|s| s.displacement <= 0.0));
    }

    #[test]
    fn samples_are_restartable() {
        let first: Vec<_> = free_fall_samples(20.0).collect();
        let second: Vec<_> = free_fall_samples(20.0).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn exhausted_sequence_stays_exhausted() {
        let mut samples = free_fall_samples(0.01);
        assert!(samples.by_ref().count() > 0);
        assert_eq!(samples.next(), None);
    }
}
