//! The scene director: a declarative cue list behind a cursor
//!
//! Every scheduled mutation of a scene lives here as a cue: an absolute
//! delay from scene start plus exactly one effect. The director fires each
//! cue exactly once, in delay order, and dies with the scene; dropping a
//! scene cancels every pending cue at once.

use serde::{Deserialize, Serialize};

use crate::scene::actor::ActorId;
use crate::scene::overlay::OverlayId;

/// Resolved state mutation fired by a cue.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    SetStep { actor: ActorId, step: usize },
    SetOverlay { overlay: OverlayId, visible: bool },
    SetShake { active: bool },
}

/// One scheduled mutation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Seconds from scene start.
    pub at: f32,
    pub effect: Effect,
}

/// Fires cues in delay order, each exactly once.
///
/// Cues with equal delays fire in registration order.
#[derive(Clone, Debug)]
pub struct Director {
    cues: Vec<Cue>,
    cursor: usize,
}

impl Director {
    /// Create a director over the given cues, sorted stably by delay.
    pub fn new(mut cues: Vec<Cue>) -> Self {
        cues.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { cues, cursor: 0 }
    }

    /// Pop the next cue due at or before `elapsed` seconds, if any.
    pub fn pop_due(&mut self, elapsed: f32) -> Option<Cue> {
        let cue = *self.cues.get(self.cursor)?;
        if cue.at <= elapsed {
            self.cursor += 1;
            Some(cue)
        } else {
            None
        }
    }

    /// Delay of the next unfired cue, if any.
    pub fn next_at(&self) -> Option<f32> {
        self.cues.get(self.cursor).map(|c| c.at)
    }

    /// Number of cues fired so far.
    pub fn fired(&self) -> usize {
        self.cursor
    }

    /// Number of cues still pending.
    pub fn pending(&self) -> usize {
        self.cues.len() - self.cursor
    }

    /// All cues in firing order.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Re-arm every cue from scene start.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
