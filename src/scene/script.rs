//! Plain-data scene scripts
//!
//! Everything a vignette declares up front: actor bodies and pose tables,
//! overlays, the cue list, the camera. Scripts reference actors and
//! overlays by name; [`Scene::build`](crate::scene::Scene::build) validates
//! a script and resolves the names to dense ids.

use serde::{Deserialize, Serialize};

use crate::animation::Transition;
use crate::core::types::Vec3;
use crate::scene::actor::Pose;
use crate::scene::camera::ShakeConfig;
use crate::scene::node::{Prop, SetPiece};
use crate::scene::overlay::Anchor;

/// Camera placement for a scene.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CameraScript {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// One scripted actor: a body, a pose per action step, and how to move
/// between poses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActorScript {
    pub name: String,
    pub body: Vec<Prop>,
    pub poses: Vec<Pose>,
    pub transition: Transition,
    /// Interactive actors toggle between poses 0 and 1 on click and take
    /// no part in step monotonicity.
    pub interactive: bool,
}

/// One scripted overlay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverlayScript {
    pub name: String,
    pub text: String,
    pub anchor: Anchor,
    pub shown_at_start: bool,
}

/// A scheduled mutation referencing actors and overlays by name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CueScript {
    /// Milliseconds from scene start.
    pub at_ms: u64,
    pub effect: CueEffect,
}

/// The by-name form of a cue effect.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CueEffect {
    SetStep { actor: String, step: usize },
    ShowOverlay { overlay: String },
    HideOverlay { overlay: String },
    StartShake,
    StopShake,
}

/// A complete vignette declaration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneScript {
    pub name: String,
    pub camera: CameraScript,
    /// Present iff the timeline may shake the camera.
    pub shake: Option<ShakeConfig>,
    pub set_pieces: Vec<SetPiece>,
    pub actors: Vec<ActorScript>,
    pub overlays: Vec<OverlayScript>,
    pub cues: Vec<CueScript>,
}
