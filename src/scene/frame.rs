//! Presented frame data
//!
//! The per-tick snapshot handed to the rendering collaborator: a flat
//! world-space draw list, the camera view, and the visible overlays. Node
//! names are stable `owner/prop` paths so the collaborator can diff
//! frames.

use serde::Serialize;

use crate::core::types::{Color, Vec3};
use crate::scene::node::Shape;
use crate::scene::overlay::OverlayView;

/// Camera view for one frame.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CameraView {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// One drawable primitive in world space.
#[derive(Clone, Debug, Serialize)]
pub struct DrawNode {
    pub name: String,
    pub shape: Shape,
    pub position: Vec3,
    pub color: Color,
}

/// A complete presented frame.
#[derive(Clone, Debug, Serialize)]
pub struct Frame {
    pub camera: CameraView,
    pub nodes: Vec<DrawNode>,
    pub overlays: Vec<OverlayView>,
}
