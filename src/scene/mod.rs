//! Scene state and playback
//!
//! A scene is built once from a plain-data script, driven by per-frame
//! [`Scene::advance`] calls, and read back through [`Scene::frame`].

pub mod actor;
pub mod camera;
pub mod frame;
pub mod node;
pub mod overlay;
pub mod scene;
pub mod script;
pub mod timeline;

pub use actor::{Actor, ActorId, Pose};
pub use camera::{CameraRig, ShakeConfig};
pub use frame::{CameraView, DrawNode, Frame};
pub use node::{Prop, SetPiece, Shape};
pub use overlay::{Anchor, OverlayDef, OverlayId, OverlayView, present};
pub use scene::Scene;
pub use script::{ActorScript, CameraScript, CueEffect, CueScript, OverlayScript, SceneScript};
pub use timeline::{Cue, Director, Effect};
