//! Error types for the vignette engine

use thiserror::Error;

/// Main error type for the engine
///
/// Every variant is a scene configuration error: all of them surface from
/// [`Scene::build`](crate::scene::Scene::build), never at playback time.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown actor: {0}")]
    UnknownActor(String),

    #[error("unknown overlay: {0}")]
    UnknownOverlay(String),

    #[error("duplicate name: {0}")]
    DuplicateName(String),

    #[error("actor config error: {0}")]
    ActorConfig(String),

    #[error("cue config error: {0}")]
    CueConfig(String),
}
