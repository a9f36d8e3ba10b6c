//! Camera rig with bounded shake perturbation
//!
//! The rig holds a fixed base position and look-at. Shake, when configured
//! and active, adds a bounded periodic offset on X and Y; the base itself
//! never moves, so stopping the shake restores the camera exactly.

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;

/// Amplitude and frequency of the camera shake.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ShakeConfig {
    /// Peak offset in world units on each shaken axis.
    pub amplitude: f32,
    /// Oscillation frequency in radians per second.
    pub frequency: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.12,
            frequency: 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Shake {
    config: ShakeConfig,
    active: bool,
    /// Seconds spent shaking; only advances while active.
    elapsed: f32,
}

/// The scene camera.
#[derive(Clone, Debug)]
pub struct CameraRig {
    base: Vec3,
    look_at: Vec3,
    shake: Option<Shake>,
}

impl CameraRig {
    /// Create a rig at `base`, with shake available iff a config is given.
    pub fn new(base: Vec3, look_at: Vec3, shake: Option<ShakeConfig>) -> Self {
        Self {
            base,
            look_at,
            shake: shake.map(|config| Shake {
                config,
                active: false,
                elapsed: 0.0,
            }),
        }
    }

    /// Whether this rig has a shake config at all.
    pub fn has_shake(&self) -> bool {
        self.shake.is_some()
    }

    /// Start or stop the perturbation. Takes effect on the next update.
    ///
    /// A no-op on rigs without a shake config.
    pub fn set_shake(&mut self, active: bool) {
        if let Some(shake) = self.shake.as_mut() {
            shake.active = active;
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.map_or(false, |s| s.active)
    }

    /// Advance the shake clock by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let Some(shake) = self.shake.as_mut() {
            if shake.active {
                shake.elapsed += dt;
            }
        }
    }

    /// Camera position for the current frame: base plus the bounded offset.
    pub fn position(&self) -> Vec3 {
        self.base + self.offset()
    }

    pub fn base(&self) -> Vec3 {
        self.base
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Stop the shake and rewind its clock.
    pub fn reset(&mut self) {
        if let Some(shake) = self.shake.as_mut() {
            shake.active = false;
            shake.elapsed = 0.0;
        }
    }

    /// Current perturbation offset; zero whenever shake is inactive.
    fn offset(&self) -> Vec3 {
        match &self.shake {
            Some(shake) if shake.active => {
                let o = shake.config.amplitude * (shake.config.frequency * shake.elapsed).sin();
                Vec3::new(o, o, 0.0)
            }
            _ => Vec3::ZERO,
        }
    }
}
