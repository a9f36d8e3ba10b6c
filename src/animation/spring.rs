//! Damped spring interpolation

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;

/// Integration substep in seconds. Small enough that stiff springs stay
/// stable under semi-implicit Euler at any frame rate.
const SUBSTEP: f32 = 0.001;

/// Spring parameters plus the rest threshold.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Position error and speed below this count as settled.
    pub rest_epsilon: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 170.0,
            damping: 26.0,
            rest_epsilon: 0.005,
        }
    }
}

/// A damped harmonic spring tracking a movable target.
///
/// Never exactly reaches the target on its own; once position error and
/// speed drop below the rest threshold it snaps to the target and stays.
/// Overshoot is expected for underdamped parameters. Re-targeting keeps
/// the current value and velocity, so the value never jumps.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    value: Vec3,
    velocity: Vec3,
    target: Vec3,
    config: SpringConfig,
}

impl Spring {
    /// Create a spring resting at `value`.
    pub fn resting(value: Vec3, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: Vec3::ZERO,
            target: value,
            config,
        }
    }

    /// Swap the target, keeping current value and velocity.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_settled() {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let displacement = self.value - self.target;
            let accel = (-self.config.stiffness * displacement
                - self.config.damping * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.near_rest() {
            self.value = self.target;
            self.velocity = Vec3::ZERO;
        }
    }

    /// Current value.
    pub fn value(&self) -> Vec3 {
        self.value
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// The value being converged toward.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Whether the spring has come to rest at its target.
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == Vec3::ZERO
    }

    fn near_rest(&self) -> bool {
        (self.value - self.target).length() < self.config.rest_epsilon
            && self.velocity.length() < self.config.rest_epsilon
    }
}
