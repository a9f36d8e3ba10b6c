//! The chase: a silent-movie vignette
//!
//! A hero walks into frame, a red sphere drops where he stands, he dodges
//! at the last moment while the camera shakes and "BOOM!" flashes. The
//! villain watches from stage left and never moves.

use crate::animation::{Easing, Transition};
use crate::core::types::Vec3;
use crate::scene::actor::Pose;
use crate::scene::camera::ShakeConfig;
use crate::scene::node::{Prop, SetPiece, Shape};
use crate::scene::overlay::Anchor;
use crate::scene::script::{
    ActorScript, CameraScript, CueEffect, CueScript, OverlayScript, SceneScript,
};

use super::{humanoid, palette};

/// The object drops 4 units at 3 units per second, landing 1333 ms after
/// it is released at 7000 ms.
const IMPACT_MS: u64 = 8333;

pub fn script() -> SceneScript {
    SceneScript {
        name: "chase".into(),
        camera: CameraScript {
            position: Vec3::new(5.0, 5.0, 5.0),
            look_at: Vec3::ZERO,
        },
        shake: Some(ShakeConfig::default()),
        set_pieces: vec![SetPiece {
            name: "villain".into(),
            position: Vec3::new(3.0, 0.0, -1.0),
            body: humanoid(palette::GRAY, palette::BLACK, palette::BLACK),
        }],
        actors: vec![
            ActorScript {
                name: "hero".into(),
                body: humanoid(palette::PEACHPUFF, palette::BLUE, palette::BROWN),
                poses: vec![
                    // Start offstage left
                    Pose {
                        position: Vec3::new(-3.0, 0.0, 0.0),
                        color: None,
                    },
                    // Walk forward to center
                    Pose {
                        position: Vec3::ZERO,
                        color: None,
                    },
                    // Hold there while the danger drops
                    Pose {
                        position: Vec3::ZERO,
                        color: None,
                    },
                    // Dodge
                    Pose {
                        position: Vec3::new(1.5, 0.0, -1.0),
                        color: None,
                    },
                ],
                transition: Transition::Ease {
                    seconds: 2.0,
                    easing: Easing::Linear,
                },
                interactive: false,
            },
            ActorScript {
                name: "danger".into(),
                body: vec![Prop::new(
                    "sphere",
                    Shape::Sphere { radius: 0.5 },
                    Vec3::ZERO,
                    palette::RED,
                )],
                poses: vec![
                    Pose {
                        position: Vec3::new(1.5, 4.0, -1.0),
                        color: None,
                    },
                    Pose {
                        position: Vec3::new(1.5, 0.0, -1.0),
                        color: None,
                    },
                ],
                transition: Transition::Ease {
                    seconds: 4.0 / 3.0,
                    easing: Easing::Linear,
                },
                interactive: false,
            },
        ],
        overlays: vec![
            OverlayScript {
                name: "title".into(),
                text: "Once upon a time...".into(),
                anchor: Anchor::Center,
                shown_at_start: true,
            },
            OverlayScript {
                name: "boom".into(),
                text: "BOOM!".into(),
                anchor: Anchor::Center,
                shown_at_start: false,
            },
        ],
        cues: vec![
            CueScript {
                at_ms: 3000,
                effect: CueEffect::HideOverlay {
                    overlay: "title".into(),
                },
            },
            CueScript {
                at_ms: 4000,
                effect: CueEffect::SetStep {
                    actor: "hero".into(),
                    step: 1,
                },
            },
            CueScript {
                at_ms: 7000,
                effect: CueEffect::SetStep {
                    actor: "hero".into(),
                    step: 2,
                },
            },
            CueScript {
                at_ms: 7000,
                effect: CueEffect::SetStep {
                    actor: "danger".into(),
                    step: 1,
                },
            },
            CueScript {
                at_ms: IMPACT_MS,
                effect: CueEffect::StartShake,
            },
            CueScript {
                at_ms: 8500,
                effect: CueEffect::SetStep {
                    actor: "hero".into(),
                    step: 3,
                },
            },
            CueScript {
                at_ms: 9500,
                effect: CueEffect::ShowOverlay {
                    overlay: "boom".into(),
                },
            },
            CueScript {
                at_ms: 11000,
                effect: CueEffect::StopShake,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn chase() -> Scene {
        Scene::build(script()).unwrap()
    }

    #[test]
    fn test_opening_state() {
        let scene = chase();
        let hero = scene.actor_id("hero").unwrap();
        let title = scene.overlay_id("title").unwrap();
        let boom = scene.overlay_id("boom").unwrap();

        assert_eq!(scene.actor(hero).position(), Vec3::new(-3.0, 0.0, 0.0));
        assert!(scene.overlay_visible(title));
        assert!(!scene.overlay_visible(boom));
        assert!(!scene.is_shaking());

        let frame = scene.frame();
        assert_eq!(frame.camera.position, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_title_hides_at_three_seconds() {
        let mut scene = chase();
        let title = scene.overlay_id("title").unwrap();

        scene.advance(2.999);
        assert!(scene.overlay_visible(title));
        scene.advance(0.002);
        assert!(!scene.overlay_visible(title));
    }

    #[test]
    fn test_hero_walks_to_center_and_holds() {
        let mut scene = chase();
        let hero = scene.actor_id("hero").unwrap();

        scene.advance(4.1);
        assert_eq!(scene.actor(hero).step(), 1);
        assert_eq!(scene.actor(hero).target_position(), Vec3::ZERO);

        // Walk completes at 6.0s
        scene.advance(2.0);
        assert!((scene.actor(hero).position() - Vec3::ZERO).length() < 1e-3);

        // Step 2 at 7.0s holds the same spot
        scene.advance(1.4);
        assert_eq!(scene.actor(hero).step(), 2);
        assert!((scene.actor(hero).position() - Vec3::ZERO).length() < 1e-3);
    }

    #[test]
    fn test_danger_falls_and_lands() {
        let mut scene = chase();
        let danger = scene.actor_id("danger").unwrap();

        scene.advance(6.9);
        assert_eq!(scene.actor(danger).position(), Vec3::new(1.5, 4.0, -1.0));

        scene.advance(0.6);
        let falling = scene.actor(danger).position();
        assert!(falling.y < 4.0 && falling.y > 0.0);
        assert_eq!(
            scene.actor(danger).target_position(),
            Vec3::new(1.5, 0.0, -1.0)
        );

        // Lands 4/3 s after release
        scene.advance(0.9);
        assert_eq!(scene.actor(danger).position(), Vec3::new(1.5, 0.0, -1.0));
    }

    #[test]
    fn test_hero_dodges_at_eight_and_a_half() {
        let mut scene = chase();
        let hero = scene.actor_id("hero").unwrap();

        scene.advance(8.6);
        assert_eq!(scene.actor(hero).step(), 3);
        assert_eq!(
            scene.actor(hero).target_position(),
            Vec3::new(1.5, 0.0, -1.0)
        );

        // Dodge completes at 10.5s
        scene.advance(2.0);
        assert!((scene.actor(hero).position() - Vec3::new(1.5, 0.0, -1.0)).length() < 1e-3);
    }

    #[test]
    fn test_shake_starts_at_impact_and_stops_cleanly() {
        let mut scene = chase();
        let base = scene.camera().base();

        scene.advance(8.3);
        assert!(!scene.is_shaking());

        scene.advance(0.1);
        assert!(scene.is_shaking());

        scene.advance(2.7);
        assert!(!scene.is_shaking());
        assert_eq!(scene.camera().position(), base);
    }

    #[test]
    fn test_boom_appears_at_nine_and_a_half() {
        let mut scene = chase();
        let boom = scene.overlay_id("boom").unwrap();

        scene.advance(9.4);
        assert!(!scene.overlay_visible(boom));
        scene.advance(0.2);
        assert!(scene.overlay_visible(boom));

        let frame = scene.frame();
        assert!(frame.overlays.iter().any(|o| o.text == "BOOM!"));
    }

    #[test]
    fn test_villain_never_moves() {
        let mut scene = chase();
        for _ in 0..6 {
            scene.advance(2.0);
            let frame = scene.frame();
            let head = frame
                .nodes
                .iter()
                .find(|n| n.name == "villain/head")
                .unwrap();
            assert_eq!(head.position, Vec3::new(3.0, 1.8, -1.0));
        }
    }

    #[test]
    fn test_full_playback_fires_every_cue() {
        let mut scene = chase();
        scene.advance(12.0);
        assert_eq!(scene.cues_fired(), 8);
        assert_eq!(scene.cues_pending(), 0);
    }
}
