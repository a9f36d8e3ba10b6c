//! The fable: tortoise and hare, with a hawk
//!
//! The hare sprints ahead and naps mid-course. A hawk dives at the
//! tortoise, who ducks into its shell until the hawk gives up; the hare
//! wakes too late and the tortoise crosses the finish line first. Four
//! title cards narrate, one at a time.

use crate::animation::{Easing, Transition};
use crate::core::types::Vec3;
use crate::scene::actor::Pose;
use crate::scene::node::{Prop, SetPiece, Shape};
use crate::scene::overlay::Anchor;
use crate::scene::script::{
    ActorScript, CameraScript, CueEffect, CueScript, OverlayScript, SceneScript,
};

use super::palette;

fn tortoise_body() -> Vec<Prop> {
    vec![
        Prop::new(
            "shell",
            Shape::Sphere { radius: 0.45 },
            Vec3::new(0.0, 0.35, 0.0),
            palette::OLIVE,
        ),
        Prop::new(
            "head",
            Shape::Sphere { radius: 0.18 },
            Vec3::new(0.45, 0.35, 0.0),
            palette::MOSS,
        ),
    ]
}

fn hare_body() -> Vec<Prop> {
    vec![
        Prop::new(
            "body",
            Shape::Sphere { radius: 0.3 },
            Vec3::new(0.0, 0.3, 0.0),
            palette::WHITE,
        ),
        Prop::new(
            "head",
            Shape::Sphere { radius: 0.2 },
            Vec3::new(0.3, 0.55, 0.0),
            palette::WHITE,
        ),
        Prop::new(
            "ear_l",
            Shape::Cylinder {
                radius_top: 0.05,
                radius_bottom: 0.05,
                height: 0.4,
            },
            Vec3::new(0.25, 0.85, -0.08),
            palette::GRAY,
        ),
        Prop::new(
            "ear_r",
            Shape::Cylinder {
                radius_top: 0.05,
                radius_bottom: 0.05,
                height: 0.4,
            },
            Vec3::new(0.25, 0.85, 0.08),
            palette::GRAY,
        ),
    ]
}

fn hawk_body() -> Vec<Prop> {
    vec![
        Prop::new(
            "body",
            Shape::Sphere { radius: 0.25 },
            Vec3::ZERO,
            palette::BROWN,
        ),
        Prop::new(
            "wing_l",
            Shape::Cuboid {
                half_extents: Vec3::new(0.5, 0.04, 0.15),
            },
            Vec3::new(-0.55, 0.05, 0.0),
            palette::BROWN,
        ),
        Prop::new(
            "wing_r",
            Shape::Cuboid {
                half_extents: Vec3::new(0.5, 0.04, 0.15),
            },
            Vec3::new(0.55, 0.05, 0.0),
            palette::BROWN,
        ),
        Prop::new(
            "beak",
            Shape::Cone {
                radius: 0.08,
                height: 0.2,
            },
            Vec3::new(0.3, 0.0, 0.0),
            palette::GOLD,
        ),
    ]
}

fn finish_line() -> SetPiece {
    SetPiece {
        name: "finish".into(),
        position: Vec3::new(4.5, 0.0, 0.0),
        body: vec![
            Prop::new(
                "post_l",
                Shape::Cylinder {
                    radius_top: 0.05,
                    radius_bottom: 0.05,
                    height: 1.2,
                },
                Vec3::new(0.0, 0.6, 1.2),
                palette::WHITE,
            ),
            Prop::new(
                "post_r",
                Shape::Cylinder {
                    radius_top: 0.05,
                    radius_bottom: 0.05,
                    height: 1.2,
                },
                Vec3::new(0.0, 0.6, -1.2),
                palette::WHITE,
            ),
            Prop::new(
                "banner",
                Shape::Cuboid {
                    half_extents: Vec3::new(0.05, 0.08, 1.2),
                },
                Vec3::new(0.0, 1.2, 0.0),
                palette::RED,
            ),
        ],
    }
}

pub fn script() -> SceneScript {
    SceneScript {
        name: "fable".into(),
        camera: CameraScript {
            position: Vec3::new(0.0, 4.0, 9.0),
            look_at: Vec3::new(0.0, 0.5, 0.0),
        },
        shake: None,
        set_pieces: vec![finish_line()],
        actors: vec![
            ActorScript {
                name: "tortoise".into(),
                body: tortoise_body(),
                poses: vec![
                    // At the start line
                    Pose {
                        position: Vec3::new(-4.0, 0.0, 1.0),
                        color: None,
                    },
                    // First stretch
                    Pose {
                        position: Vec3::new(-2.0, 0.0, 1.0),
                        color: None,
                    },
                    // Mid-course
                    Pose {
                        position: Vec3::new(0.0, 0.0, 1.0),
                        color: None,
                    },
                    // Duck into the shell
                    Pose {
                        position: Vec3::new(0.0, -0.15, 1.0),
                        color: None,
                    },
                    // Across the line
                    Pose {
                        position: Vec3::new(4.0, 0.0, 1.0),
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
                name: "hare".into(),
                body: hare_body(),
                poses: vec![
                    // At the start line
                    Pose {
                        position: Vec3::new(-4.0, 0.0, -1.0),
                        color: None,
                    },
                    // Sprint far ahead
                    Pose {
                        position: Vec3::new(1.0, 0.0, -1.0),
                        color: None,
                    },
                    // Nap right there
                    Pose {
                        position: Vec3::new(1.0, 0.0, -1.0),
                        color: None,
                    },
                    // Wake and dash, too late
                    Pose {
                        position: Vec3::new(3.5, 0.0, -1.0),
                        color: None,
                    },
                ],
                transition: Transition::Ease {
                    seconds: 1.2,
                    easing: Easing::EaseInOut,
                },
                interactive: false,
            },
            ActorScript {
                name: "hawk".into(),
                body: hawk_body(),
                poses: vec![
                    // Circling high
                    Pose {
                        position: Vec3::new(0.0, 4.0, 0.0),
                        color: None,
                    },
                    // Dive at the tortoise
                    Pose {
                        position: Vec3::new(0.0, 0.8, 0.5),
                        color: None,
                    },
                    // Give up and leave
                    Pose {
                        position: Vec3::new(-5.0, 5.0, -2.0),
                        color: None,
                    },
                ],
                transition: Transition::Ease {
                    seconds: 1.0,
                    easing: Easing::EaseIn,
                },
                interactive: false,
            },
        ],
        overlays: vec![
            OverlayScript {
                name: "title".into(),
                text: "The Tortoise and the Hare".into(),
                anchor: Anchor::Center,
                shown_at_start: true,
            },
            OverlayScript {
                name: "danger".into(),
                text: "A hawk circles above!".into(),
                anchor: Anchor::Top,
                shown_at_start: false,
            },
            OverlayScript {
                name: "escape".into(),
                text: "Safe in its shell!".into(),
                anchor: Anchor::Bottom,
                shown_at_start: false,
            },
            OverlayScript {
                name: "end".into(),
                text: "Slow and steady.".into(),
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
                at_ms: 3000,
                effect: CueEffect::SetStep {
                    actor: "tortoise".into(),
                    step: 1,
                },
            },
            CueScript {
                at_ms: 3000,
                effect: CueEffect::SetStep {
                    actor: "hare".into(),
                    step: 1,
                },
            },
            CueScript {
                at_ms: 5000,
                effect: CueEffect::SetStep {
                    actor: "tortoise".into(),
                    step: 2,
                },
            },
            CueScript {
                at_ms: 5000,
                effect: CueEffect::SetStep {
                    actor: "hare".into(),
                    step: 2,
                },
            },
            CueScript {
                at_ms: 6000,
                effect: CueEffect::ShowOverlay {
                    overlay: "danger".into(),
                },
            },
            CueScript {
                at_ms: 6000,
                effect: CueEffect::SetStep {
                    actor: "hawk".into(),
                    step: 1,
                },
            },
            CueScript {
                at_ms: 6500,
                effect: CueEffect::SetStep {
                    actor: "tortoise".into(),
                    step: 3,
                },
            },
            CueScript {
                at_ms: 10000,
                effect: CueEffect::HideOverlay {
                    overlay: "danger".into(),
                },
            },
            CueScript {
                at_ms: 10000,
                effect: CueEffect::ShowOverlay {
                    overlay: "escape".into(),
                },
            },
            CueScript {
                at_ms: 10000,
                effect: CueEffect::SetStep {
                    actor: "hawk".into(),
                    step: 2,
                },
            },
            CueScript {
                at_ms: 10500,
                effect: CueEffect::SetStep {
                    actor: "tortoise".into(),
                    step: 4,
                },
            },
            CueScript {
                at_ms: 10500,
                effect: CueEffect::SetStep {
                    actor: "hare".into(),
                    step: 3,
                },
            },
            CueScript {
                at_ms: 12000,
                effect: CueEffect::HideOverlay {
                    overlay: "escape".into(),
                },
            },
            CueScript {
                at_ms: 12000,
                effect: CueEffect::ShowOverlay {
                    overlay: "end".into(),
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn fable() -> Scene {
        Scene::build(script()).unwrap()
    }

    fn visible_names(scene: &Scene) -> Vec<String> {
        scene
            .frame()
            .overlays
            .iter()
            .map(|o| o.name.clone())
            .collect()
    }

    #[test]
    fn test_title_cards_show_one_at_a_time() {
        let mut scene = fable();
        let mut elapsed = 0.0;
        while elapsed < 14.0 {
            scene.advance(0.25);
            elapsed += 0.25;
            let visible = visible_names(&scene);
            assert!(
                visible.len() <= 1,
                "overlapping cards {visible:?} at {elapsed}s"
            );
        }
    }

    #[test]
    fn test_card_windows() {
        let mut scene = fable();

        scene.advance(1.0);
        assert_eq!(visible_names(&scene), ["title"]);

        scene.advance(3.0); // 4.0s: between title and danger
        assert!(visible_names(&scene).is_empty());

        scene.advance(3.0); // 7.0s
        assert_eq!(visible_names(&scene), ["danger"]);

        scene.advance(4.0); // 11.0s
        assert_eq!(visible_names(&scene), ["escape"]);

        scene.advance(2.0); // 13.0s
        assert_eq!(visible_names(&scene), ["end"]);
    }

    #[test]
    fn test_hare_leads_early_but_tortoise_wins() {
        let mut scene = fable();
        let tortoise = scene.actor_id("tortoise").unwrap();
        let hare = scene.actor_id("hare").unwrap();

        scene.advance(5.5);
        assert!(scene.actor(hare).position().x > scene.actor(tortoise).position().x);

        scene.advance(8.4); // 13.9s: tortoise has crossed, hare has not
        let tortoise_x = scene.actor(tortoise).position().x;
        let hare_x = scene.actor(hare).position().x;
        assert!((tortoise_x - 4.0).abs() < 1e-3);
        assert!(tortoise_x > hare_x);
    }

    #[test]
    fn test_hawk_dives_then_leaves() {
        let mut scene = fable();
        let hawk = scene.actor_id("hawk").unwrap();

        scene.advance(5.0);
        assert_eq!(scene.actor(hawk).position(), Vec3::new(0.0, 4.0, 0.0));

        scene.advance(2.1); // 7.1s: dive finished at 7.0
        assert!((scene.actor(hawk).position() - Vec3::new(0.0, 0.8, 0.5)).length() < 1e-3);

        scene.advance(3.0); // 10.1s: leaving
        assert_eq!(
            scene.actor(hawk).target_position(),
            Vec3::new(-5.0, 5.0, -2.0)
        );
    }

    #[test]
    fn test_tortoise_ducks_while_hawk_dives() {
        let mut scene = fable();
        let tortoise = scene.actor_id("tortoise").unwrap();

        scene.advance(6.6);
        assert_eq!(scene.actor(tortoise).step(), 3);
        assert_eq!(
            scene.actor(tortoise).target_position(),
            Vec3::new(0.0, -0.15, 1.0)
        );
    }

    #[test]
    fn test_no_shake_in_this_scene() {
        let mut scene = fable();
        assert!(!scene.camera().has_shake());

        let base = scene.camera().base();
        scene.set_shake(true);
        scene.advance(5.0);
        assert!(!scene.is_shaking());
        assert_eq!(scene.camera().position(), base);
    }

    #[test]
    fn test_full_playback_fires_every_cue() {
        let mut scene = fable();
        scene.advance(14.0);
        assert_eq!(scene.cues_fired(), 15);
        assert_eq!(scene.cues_pending(), 0);
    }
}
