//! The interactive cube
//!
//! A single clickable cube and a hint card. No cues: nothing happens
//! until the viewer clicks, and each click springs the cube between its
//! resting pose and a raised red one.

use crate::animation::{SpringConfig, Transition};
use crate::core::types::Vec3;
use crate::scene::actor::Pose;
use crate::scene::node::{Prop, Shape};
use crate::scene::overlay::Anchor;
use crate::scene::script::{ActorScript, CameraScript, OverlayScript, SceneScript};

use super::palette;

pub fn script() -> SceneScript {
    SceneScript {
        name: "cube".into(),
        camera: CameraScript {
            position: Vec3::new(3.0, 3.0, 3.0),
            look_at: Vec3::ZERO,
        },
        shake: None,
        set_pieces: vec![],
        actors: vec![ActorScript {
            name: "cube".into(),
            body: vec![Prop::new(
                "mesh",
                Shape::Cuboid {
                    half_extents: Vec3::splat(0.5),
                },
                Vec3::new(0.0, 0.5, 0.0),
                palette::BLUE,
            )],
            poses: vec![
                Pose {
                    position: Vec3::ZERO,
                    color: Some(palette::BLUE),
                },
                Pose {
                    position: Vec3::new(0.0, 2.0, 0.0),
                    color: Some(palette::RED),
                },
            ],
            transition: Transition::Spring(SpringConfig::default()),
            interactive: true,
        }],
        overlays: vec![OverlayScript {
            name: "hint".into(),
            text: "Click the cube".into(),
            anchor: Anchor::Bottom,
            shown_at_start: true,
        }],
        cues: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn cube_scene() -> (Scene, crate::scene::ActorId) {
        let scene = Scene::build(script()).unwrap();
        let id = scene.actor_id("cube").unwrap();
        (scene, id)
    }

    #[test]
    fn test_idle_until_clicked() {
        let (mut scene, cube) = cube_scene();
        scene.advance(3.0);
        assert_eq!(scene.actor(cube).step(), 0);
        assert_eq!(scene.actor(cube).position(), Vec3::ZERO);
        assert_eq!(scene.actor(cube).color(), Some(palette::BLUE));
    }

    #[test]
    fn test_click_lifts_and_recolors() {
        let (mut scene, cube) = cube_scene();
        scene.notify_click(cube);
        assert_eq!(scene.actor(cube).step(), 1);
        assert_eq!(
            scene.actor(cube).target_position(),
            Vec3::new(0.0, 2.0, 0.0)
        );

        for _ in 0..120 {
            scene.advance(1.0 / 60.0);
        }
        let actor = scene.actor(cube);
        assert!((actor.position() - Vec3::new(0.0, 2.0, 0.0)).length() < 0.01);
        let color = actor.color().unwrap();
        for (got, want) in color.iter().zip(palette::RED) {
            assert!((got - want).abs() < 0.01);
        }
    }

    #[test]
    fn test_second_click_returns_to_rest() {
        let (mut scene, cube) = cube_scene();
        scene.notify_click(cube);
        scene.advance(2.0);
        scene.notify_click(cube);
        assert_eq!(scene.actor(cube).step(), 0);

        scene.advance(2.0);
        let actor = scene.actor(cube);
        assert!(actor.position().length() < 0.01);
        assert_eq!(actor.color(), Some(palette::BLUE));
    }

    #[test]
    fn test_reclick_mid_flight_keeps_position_continuous() {
        let (mut scene, cube) = cube_scene();
        scene.notify_click(cube);
        scene.advance(0.1);

        let before = scene.actor(cube).position();
        assert!(before.y > 0.0);
        scene.notify_click(cube);
        assert_eq!(scene.actor(cube).position(), before);
    }

    #[test]
    fn test_hint_never_goes_away() {
        let (mut scene, _) = cube_scene();
        scene.advance(10.0);
        let frame = scene.frame();
        assert_eq!(frame.overlays.len(), 1);
        assert_eq!(frame.overlays[0].text, "Click the cube");
    }

    #[test]
    fn test_frame_places_mesh_above_anchor() {
        let (mut scene, cube) = cube_scene();
        let frame = scene.frame();
        assert_eq!(frame.nodes.len(), 1);
        assert_eq!(frame.nodes[0].name, "cube/mesh");
        assert_eq!(frame.nodes[0].position, Vec3::new(0.0, 0.5, 0.0));

        scene.notify_click(cube);
        scene.advance(2.0);
        let lifted = scene.frame();
        assert!((lifted.nodes[0].position - Vec3::new(0.0, 2.5, 0.0)).length() < 0.01);
        assert_eq!(scene.actor(cube).step(), 1);
    }
}
