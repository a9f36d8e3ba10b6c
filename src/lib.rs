//! Vignette - a scripted 3D vignette engine

pub mod core;
pub mod animation;
pub mod scene;
pub mod vignettes;
