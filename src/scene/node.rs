//! Primitive-shape node types
//!
//! Static building blocks for vignette bodies: shapes, props, and set
//! pieces. Mesh tessellation and materials belong to the rendering
//! collaborator; the engine only names the primitives.

use serde::{Deserialize, Serialize};

use crate::core::types::{Color, Vec3};

/// Primitive mesh shape understood by the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Sphere {
        radius: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Cone {
        radius: f32,
        height: f32,
    },
    Cuboid {
        half_extents: Vec3,
    },
}

/// One primitive of a body, offset from the body origin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prop {
    pub name: String,
    pub shape: Shape,
    pub offset: Vec3,
    pub color: Color,
}

impl Prop {
    /// Create a new prop.
    pub fn new(name: impl Into<String>, shape: Shape, offset: Vec3, color: Color) -> Self {
        Self {
            name: name.into(),
            shape,
            offset,
            color,
        }
    }
}

/// A static primitive group with no state machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetPiece {
    pub name: String,
    pub position: Vec3,
    pub body: Vec<Prop>,
}
