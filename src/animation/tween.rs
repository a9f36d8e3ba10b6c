//! Fixed-duration eased transitions

use crate::animation::easing::Easing;
use crate::core::types::Vec3;

/// A fixed-duration transition converging on a movable target.
///
/// The value is a pure function of the eased elapsed fraction and reaches
/// the target exactly when the elapsed time hits the duration. Re-targeting
/// restarts the transition from the current intermediate value, so the
/// value never jumps.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl Tween {
    /// Create a tween resting at `value` with no transition in flight.
    pub fn resting(value: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
            easing,
        }
    }

    /// Begin converging toward `target` from the current value.
    ///
    /// Setting the current target again is a no-op: the in-flight
    /// transition keeps its elapsed time.
    pub fn set_target(&mut self, target: Vec3) {
        if target == self.to {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = 0.0;
    }

    /// Advance the transition by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.elapsed < self.duration {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> Vec3 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from.lerp(self.to, t)
    }

    /// The value the tween is converging toward.
    pub fn target(&self) -> Vec3 {
        self.to
    }

    /// Whether the transition has reached its target.
    pub fn is_settled(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}
