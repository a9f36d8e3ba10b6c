//! Shipped vignettes
//!
//! Each vignette is a plain [`SceneScript`] built in code: the chase, the
//! fable, and the interactive cube. The registry maps the names the demo
//! binary accepts to their scripts.

pub mod chase;
pub mod cube;
pub mod fable;

use crate::core::types::{Color, Vec3};
use crate::scene::node::{Prop, Shape};
use crate::scene::script::SceneScript;

/// Vignette names accepted by [`by_name`].
pub const NAMES: [&str; 3] = ["chase", "fable", "cube"];

/// Look up a shipped vignette script by name.
pub fn by_name(name: &str) -> Option<SceneScript> {
    match name {
        "chase" => Some(chase::script()),
        "fable" => Some(fable::script()),
        "cube" => Some(cube::script()),
        _ => None,
    }
}

/// How long a full playback of the named vignette takes, roughly.
pub fn suggested_duration_secs(name: &str) -> Option<f32> {
    match name {
        "chase" => Some(12.0),
        "fable" => Some(14.0),
        "cube" => Some(8.0),
        _ => None,
    }
}

/// Shared color palette for the shipped vignettes.
pub mod palette {
    use crate::core::types::Color;

    pub const PEACHPUFF: Color = [1.0, 0.855, 0.725];
    pub const BLUE: Color = [0.0, 0.0, 1.0];
    pub const BROWN: Color = [0.647, 0.165, 0.165];
    pub const GRAY: Color = [0.5, 0.5, 0.5];
    pub const BLACK: Color = [0.0, 0.0, 0.0];
    pub const RED: Color = [1.0, 0.0, 0.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0];
    pub const OLIVE: Color = [0.42, 0.557, 0.137];
    pub const MOSS: Color = [0.35, 0.45, 0.2];
    pub const GOLD: Color = [0.855, 0.647, 0.125];
}

/// The six-prop humanoid both movie characters are built from: sphere
/// head, tapered torso, cylinder arms and legs.
pub(crate) fn humanoid(skin: Color, torso: Color, legs: Color) -> Vec<Prop> {
    vec![
        Prop::new(
            "head",
            Shape::Sphere { radius: 0.4 },
            Vec3::new(0.0, 1.8, 0.0),
            skin,
        ),
        Prop::new(
            "torso",
            Shape::Cylinder {
                radius_top: 0.3,
                radius_bottom: 0.5,
                height: 1.0,
            },
            Vec3::new(0.0, 1.0, 0.0),
            torso,
        ),
        Prop::new(
            "arm_l",
            Shape::Cylinder {
                radius_top: 0.15,
                radius_bottom: 0.15,
                height: 0.8,
            },
            Vec3::new(-0.5, 1.2, 0.0),
            skin,
        ),
        Prop::new(
            "arm_r",
            Shape::Cylinder {
                radius_top: 0.15,
                radius_bottom: 0.15,
                height: 0.8,
            },
            Vec3::new(0.5, 1.2, 0.0),
            skin,
        ),
        Prop::new(
            "leg_l",
            Shape::Cylinder {
                radius_top: 0.2,
                radius_bottom: 0.2,
                height: 1.0,
            },
            Vec3::new(-0.2, 0.3, 0.0),
            legs,
        ),
        Prop::new(
            "leg_r",
            Shape::Cylinder {
                radius_top: 0.2,
                radius_bottom: 0.2,
                height: 1.0,
            },
            Vec3::new(0.2, 0.3, 0.0),
            legs,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn test_every_registered_vignette_builds() {
        for name in NAMES {
            let script = by_name(name).unwrap();
            let scene = Scene::build(script);
            assert!(scene.is_ok(), "vignette '{name}' failed to build");
            assert!(suggested_duration_secs(name).is_some());
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(by_name("western").is_none());
        assert!(suggested_duration_secs("western").is_none());
    }

    #[test]
    fn test_humanoid_has_six_props() {
        let body = humanoid(palette::PEACHPUFF, palette::BLUE, palette::BROWN);
        assert_eq!(body.len(), 6);
        assert_eq!(body[0].name, "head");
        assert_eq!(body[0].color, palette::PEACHPUFF);
    }
}
