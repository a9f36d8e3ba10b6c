//! Interpolation primitives for actor and camera attributes

pub mod easing;
pub mod tween;
pub mod spring;
pub mod motion;

pub use easing::Easing;
pub use tween::Tween;
pub use spring::{Spring, SpringConfig};
pub use motion::{Motion, Transition};
