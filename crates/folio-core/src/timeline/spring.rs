//! Damped spring smoothing for timeline progress
//!
//! The spring chases the raw progress value. It is advanced by the elapsed
//! frame time, not on a timer of its own, so it moves at the display
//! cadence and stops costing anything once it is at rest.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::spring::{DAMPING, MASS, MAX_SUBSTEP, REST_DELTA, REST_SPEED, STIFFNESS};
use crate::error::FolioError;

/// Spring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: STIFFNESS,
            damping: DAMPING,
            mass: MASS,
            rest_delta: REST_DELTA,
            rest_speed: REST_SPEED,
        }
    }
}

impl SpringConfig {
    /// Spring with exactly critical damping for the given stiffness
    pub fn critically_damped(stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * MASS).sqrt(),
            ..Self::default()
        }
    }

    /// Damping ratio; 1.0 is critical, above is overdamped
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        let positive = [
            ("stiffness", self.stiffness),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(FolioError::InvalidConfig(format!(
                    "spring.{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(FolioError::InvalidConfig(format!(
                "spring.damping must be non-negative, got {}",
                self.damping
            )));
        }
        Ok(())
    }
}

/// One-dimensional damped spring
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Place the spring at rest on a value
    pub fn jump_to(&mut self, value: f64) {
        if value.is_finite() {
            self.position = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance by `dt`. Returns true while the spring is still moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        let total = dt.as_secs_f64();
        if total <= 0.0 {
            return true;
        }

        let substeps = (total / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = total / substeps as f64;
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;

        for _ in 0..substeps {
            let displacement = self.position - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            // Semi-implicit Euler: velocity first, then position
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn run(spring: &mut Spring, frames: usize) -> Vec<f64> {
        (0..frames)
            .map(|_| {
                spring.step(FRAME);
                spring.position()
            })
            .collect()
    }

    #[test]
    fn test_default_config_is_overdamped() {
        let config = SpringConfig::default();
        assert!(config.damping_ratio() > 1.0);
        assert!((SpringConfig::critically_damped(50.0).damping_ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_converges_to_held_target_without_oscillation() {
        let mut spring = Spring::default();
        spring.set_target(1.0);

        // 10 simulated seconds at 60fps
        let trace = run(&mut spring, 600);

        for pair in trace.windows(2) {
            assert!(pair[1] >= pair[0], "position moved away from the target");
        }
        assert!(trace.iter().all(|p| *p <= 1.0 + REST_DELTA));
        assert!((spring.position() - 1.0).abs() <= REST_DELTA);
        assert!(spring.is_at_rest());

        // Stays put once settled
        let after = run(&mut spring, 120);
        assert!(after.iter().all(|p| (*p - 1.0).abs() <= REST_DELTA));
    }

    #[test]
    fn test_lags_behind_raw_target() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        spring.step(FRAME);
        assert!(spring.position() > 0.0);
        assert!(spring.position() < 0.5);
    }

    #[test]
    fn test_critically_damped_overshoot_is_bounded() {
        let mut spring = Spring::new(SpringConfig::critically_damped(120.0));
        spring.set_target(1.0);
        let trace = run(&mut spring, 600);
        let peak = trace.iter().cloned().fold(f64::MIN, f64::max);
        assert!(peak <= 1.0 + 0.01, "overshoot {peak}");
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_large_frame_gap_stays_stable() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        spring.step(Duration::from_secs(3));
        assert!(spring.position().is_finite());
        assert!(spring.position() <= 1.0 + REST_DELTA);
    }

    #[test]
    fn test_follows_target_backwards() {
        let mut spring = Spring::default();
        spring.jump_to(1.0);
        spring.set_target(0.25);
        run(&mut spring, 600);
        assert!((spring.position() - 0.25).abs() <= REST_DELTA);
    }

    #[test]
    fn test_rejects_non_finite_targets() {
        let mut spring = Spring::default();
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 0.0);
        assert!(!spring.step(FRAME));
    }

    #[test]
    fn test_validate() {
        assert!(SpringConfig::default().validate().is_ok());
        let bad = SpringConfig {
            stiffness: 0.0,
            ..SpringConfig::default()
        };
        assert!(bad.validate().is_err());
        let bad = SpringConfig {
            damping: -1.0,
            ..SpringConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
