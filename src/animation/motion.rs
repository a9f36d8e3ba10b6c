//! Unified interpolation over the two transition policies

use serde::{Deserialize, Serialize};

use crate::animation::easing::Easing;
use crate::animation::spring::{Spring, SpringConfig};
use crate::animation::tween::Tween;
use crate::core::types::Vec3;

/// Transition policy declared per actor in a scene script.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Transition {
    /// Fixed-duration eased transition.
    Ease { seconds: f32, easing: Easing },
    /// Damped spring.
    Spring(SpringConfig),
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Ease {
            seconds: 2.0,
            easing: Easing::Linear,
        }
    }
}

/// Interpolation state for one animated attribute of one actor.
#[derive(Clone, Copy, Debug)]
pub enum Motion {
    Tween(Tween),
    Spring(Spring),
}

impl Motion {
    /// Create a motion resting at `value` under the given policy.
    pub fn resting(value: Vec3, transition: Transition) -> Self {
        match transition {
            Transition::Ease { seconds, easing } => {
                Motion::Tween(Tween::resting(value, seconds, easing))
            }
            Transition::Spring(config) => Motion::Spring(Spring::resting(value, config)),
        }
    }

    /// Begin converging toward `target` from the current value.
    pub fn set_target(&mut self, target: Vec3) {
        match self {
            Motion::Tween(tween) => tween.set_target(target),
            Motion::Spring(spring) => spring.set_target(target),
        }
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        match self {
            Motion::Tween(tween) => tween.update(dt),
            Motion::Spring(spring) => spring.update(dt),
        }
    }

    /// Current value.
    pub fn value(&self) -> Vec3 {
        match self {
            Motion::Tween(tween) => tween.value(),
            Motion::Spring(spring) => spring.value(),
        }
    }

    /// The value being converged toward.
    pub fn target(&self) -> Vec3 {
        match self {
            Motion::Tween(tween) => tween.target(),
            Motion::Spring(spring) => spring.target(),
        }
    }

    /// Whether the motion has arrived at its target.
    pub fn is_settled(&self) -> bool {
        match self {
            Motion::Tween(tween) => tween.is_settled(),
            Motion::Spring(spring) => spring.is_settled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_policies_start_settled() {
        let tween = Motion::resting(Vec3::ONE, Transition::default());
        let spring = Motion::resting(Vec3::ONE, Transition::Spring(SpringConfig::default()));
        assert!(tween.is_settled());
        assert!(spring.is_settled());
        assert_eq!(tween.value(), Vec3::ONE);
        assert_eq!(spring.value(), Vec3::ONE);
    }

    #[test]
    fn test_retarget_is_continuous_under_both_policies() {
        let policies = [
            Transition::default(),
            Transition::Spring(SpringConfig::default()),
        ];
        for transition in policies {
            let mut motion = Motion::resting(Vec3::ZERO, transition);
            motion.set_target(Vec3::new(4.0, 0.0, 0.0));
            motion.update(0.3);

            let before = motion.value();
            motion.set_target(Vec3::new(0.0, 4.0, 0.0));
            let after = motion.value();
            assert!(
                (before - after).length() < 1e-6,
                "value jumped on retarget under {transition:?}"
            );
        }
    }

    #[test]
    fn test_both_policies_converge() {
        let policies = [
            Transition::Ease { seconds: 0.5, easing: Easing::EaseInOut },
            Transition::Spring(SpringConfig::default()),
        ];
        for transition in policies {
            let mut motion = Motion::resting(Vec3::ZERO, transition);
            motion.set_target(Vec3::new(1.0, 2.0, 3.0));
            for _ in 0..180 {
                motion.update(1.0 / 60.0);
            }
            assert!(motion.is_settled(), "{transition:?} did not settle");
            assert!((motion.value() - Vec3::new(1.0, 2.0, 3.0)).length() < 0.01);
        }
    }
}
