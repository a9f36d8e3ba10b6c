//! Scene assembly and playback
//!
//! [`Scene::build`] validates a [`SceneScript`] and resolves its names to
//! dense ids; [`Scene::advance`] drives the director, the interpolators,
//! and the shake clock; [`Scene::frame`] snapshots the world for the
//! rendering collaborator.

use std::collections::HashMap;

use crate::core::Error;
use crate::core::types::Result;
use crate::scene::actor::{Actor, ActorId};
use crate::scene::camera::CameraRig;
use crate::scene::frame::{CameraView, DrawNode, Frame};
use crate::scene::node::SetPiece;
use crate::scene::overlay::{self, OverlayDef, OverlayId};
use crate::scene::script::{CueEffect, SceneScript};
use crate::scene::timeline::{Cue, Director, Effect};

/// A running vignette.
///
/// Owns every piece of scene state: actors, overlay flags, the camera rig,
/// and the cue list. Dropping the scene cancels all pending cues; nothing
/// it schedules can outlive it.
pub struct Scene {
    name: String,
    elapsed: f32,
    ticks: u64,
    actors: Vec<Actor>,
    set_pieces: Vec<SetPiece>,
    overlays: Vec<OverlayDef>,
    visible: Vec<bool>,
    rig: CameraRig,
    director: Director,
}

impl Scene {
    /// Validate a script and bring up the scene at t = 0.
    ///
    /// Every configuration error surfaces here: unknown actor or overlay
    /// names, steps outside a pose table, step regressions, shake cues
    /// without a shake config, duplicate names, and malformed pose tables.
    /// A scene that builds cannot fail during playback.
    pub fn build(script: SceneScript) -> Result<Self> {
        let mut actor_ids: HashMap<String, usize> = HashMap::new();
        for (index, actor) in script.actors.iter().enumerate() {
            if actor_ids.insert(actor.name.clone(), index).is_some() {
                return Err(Error::DuplicateName(format!("actor '{}'", actor.name)));
            }
        }
        let mut overlay_ids: HashMap<String, usize> = HashMap::new();
        for (index, overlay) in script.overlays.iter().enumerate() {
            if overlay_ids.insert(overlay.name.clone(), index).is_some() {
                return Err(Error::DuplicateName(format!("overlay '{}'", overlay.name)));
            }
        }

        let mut cues = Vec::with_capacity(script.cues.len());
        for cue in &script.cues {
            let at = cue.at_ms as f32 / 1000.0;
            let effect = match &cue.effect {
                CueEffect::SetStep { actor, step } => {
                    let index = *actor_ids
                        .get(actor)
                        .ok_or_else(|| Error::UnknownActor(actor.clone()))?;
                    let steps = script.actors[index].poses.len();
                    if *step >= steps {
                        return Err(Error::CueConfig(format!(
                            "step {step} out of range for actor '{actor}' ({steps} poses)"
                        )));
                    }
                    Effect::SetStep {
                        actor: ActorId(index),
                        step: *step,
                    }
                }
                CueEffect::ShowOverlay { overlay } => Effect::SetOverlay {
                    overlay: OverlayId(
                        *overlay_ids
                            .get(overlay)
                            .ok_or_else(|| Error::UnknownOverlay(overlay.clone()))?,
                    ),
                    visible: true,
                },
                CueEffect::HideOverlay { overlay } => Effect::SetOverlay {
                    overlay: OverlayId(
                        *overlay_ids
                            .get(overlay)
                            .ok_or_else(|| Error::UnknownOverlay(overlay.clone()))?,
                    ),
                    visible: false,
                },
                CueEffect::StartShake | CueEffect::StopShake => {
                    if script.shake.is_none() {
                        return Err(Error::CueConfig(format!(
                            "scene '{}' schedules a shake but has no shake config",
                            script.name
                        )));
                    }
                    Effect::SetShake {
                        active: matches!(cue.effect, CueEffect::StartShake),
                    }
                }
            };
            cues.push(Cue { at, effect });
        }
        let director = Director::new(cues);

        // Steps must not regress across the sorted timeline
        let mut last_step: HashMap<usize, usize> = HashMap::new();
        for cue in director.cues() {
            if let Effect::SetStep { actor, step } = cue.effect {
                if script.actors[actor.0].interactive {
                    continue;
                }
                let last = last_step.entry(actor.0).or_insert(0);
                if step < *last {
                    return Err(Error::CueConfig(format!(
                        "step regression for actor '{}': {} scheduled after {}",
                        script.actors[actor.0].name, step, last
                    )));
                }
                *last = step;
            }
        }

        let rig = CameraRig::new(script.camera.position, script.camera.look_at, script.shake);
        let overlays: Vec<OverlayDef> = script
            .overlays
            .into_iter()
            .map(|o| OverlayDef {
                name: o.name,
                text: o.text,
                anchor: o.anchor,
                shown_at_start: o.shown_at_start,
            })
            .collect();
        let visible: Vec<bool> = overlays.iter().map(|o| o.shown_at_start).collect();

        let mut actors = Vec::with_capacity(script.actors.len());
        for actor_script in script.actors {
            actors.push(Actor::from_script(actor_script)?);
        }

        log::info!(
            "scene '{}' built: {} actors, {} overlays, {} cues",
            script.name,
            actors.len(),
            overlays.len(),
            director.pending()
        );

        Ok(Self {
            name: script.name,
            elapsed: 0.0,
            ticks: 0,
            actors,
            set_pieces: script.set_pieces,
            overlays,
            visible,
            rig,
            director,
        })
    }

    /// Advance the scene by `dt` seconds.
    ///
    /// Integration splits at each due cue's exact delay: interpolators and
    /// the shake clock consume time up to the boundary, the effect is
    /// applied, then integration continues. The state after one large
    /// advance therefore matches any sequence of smaller ones summing to
    /// the same time.
    pub fn advance(&mut self, dt: f32) {
        let target = self.elapsed + dt.max(0.0);
        while let Some(cue) = self.director.pop_due(target) {
            self.integrate_to(cue.at.max(self.elapsed));
            self.apply(cue.effect);
        }
        self.integrate_to(target);
        self.ticks += 1;
    }

    fn integrate_to(&mut self, t: f32) {
        let dt = t - self.elapsed;
        if dt > 0.0 {
            for actor in &mut self.actors {
                actor.update(dt);
            }
            self.rig.update(dt);
            self.elapsed = t;
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SetStep { actor, step } => {
                log::debug!(
                    "cue at {:.3}s: actor '{}' -> step {}",
                    self.elapsed,
                    self.actors[actor.0].name(),
                    step
                );
                self.actors[actor.0].set_step(step);
            }
            Effect::SetOverlay { overlay, visible } => {
                log::debug!(
                    "cue at {:.3}s: overlay '{}' -> {}",
                    self.elapsed,
                    self.overlays[overlay.0].name,
                    if visible { "shown" } else { "hidden" }
                );
                self.visible[overlay.0] = visible;
            }
            Effect::SetShake { active } => {
                log::debug!(
                    "cue at {:.3}s: shake -> {}",
                    self.elapsed,
                    if active { "on" } else { "off" }
                );
                self.rig.set_shake(active);
            }
        }
    }

    /// Set an actor's action step directly.
    pub fn set_action_step(&mut self, actor: ActorId, step: usize) {
        self.actors[actor.0].set_step(step);
    }

    /// Show or hide an overlay directly.
    pub fn set_overlay(&mut self, overlay: OverlayId, visible: bool) {
        self.visible[overlay.0] = visible;
    }

    /// Start or stop the camera shake directly.
    pub fn set_shake(&mut self, active: bool) {
        self.rig.set_shake(active);
    }

    /// Host-reported click on an actor's body.
    ///
    /// Toggles interactive actors between their two poses; ignored for
    /// timeline-driven actors.
    pub fn notify_click(&mut self, actor: ActorId) {
        if self.actors[actor.0].toggle() {
            log::debug!(
                "click: actor '{}' -> step {}",
                self.actors[actor.0].name(),
                self.actors[actor.0].step()
            );
        } else {
            log::debug!(
                "click ignored: actor '{}' is not interactive",
                self.actors[actor.0].name()
            );
        }
    }

    /// Snapshot the current frame for the rendering collaborator.
    ///
    /// Set pieces flatten first, then actors in declaration order; node
    /// names are stable `owner/prop` paths.
    pub fn frame(&self) -> Frame {
        let mut nodes = Vec::new();
        for piece in &self.set_pieces {
            for prop in &piece.body {
                nodes.push(DrawNode {
                    name: format!("{}/{}", piece.name, prop.name),
                    shape: prop.shape,
                    position: piece.position + prop.offset,
                    color: prop.color,
                });
            }
        }
        for actor in &self.actors {
            let tint = actor.color();
            let origin = actor.position();
            for prop in actor.body() {
                nodes.push(DrawNode {
                    name: format!("{}/{}", actor.name(), prop.name),
                    shape: prop.shape,
                    position: origin + prop.offset,
                    color: tint.unwrap_or(prop.color),
                });
            }
        }
        Frame {
            camera: CameraView {
                position: self.rig.position(),
                look_at: self.rig.look_at(),
            },
            nodes,
            overlays: overlay::present(&self.overlays, &self.visible),
        }
    }

    /// Rewind to t = 0: every actor at pose 0, overlays at their starting
    /// visibility, shake off, all cues re-armed.
    pub fn reset(&mut self) {
        for actor in &mut self.actors {
            actor.reset();
        }
        for (flag, def) in self.visible.iter_mut().zip(&self.overlays) {
            *flag = def.shown_at_start;
        }
        self.rig.reset();
        self.director.reset();
        self.elapsed = 0.0;
        self.ticks = 0;
        log::info!("scene '{}' reset", self.name);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds since scene start.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Ticks driven so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Look up an actor by name.
    pub fn actor_id(&self, name: &str) -> Option<ActorId> {
        self.actors
            .iter()
            .position(|a| a.name() == name)
            .map(ActorId)
    }

    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.0]
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Look up an overlay by name.
    pub fn overlay_id(&self, name: &str) -> Option<OverlayId> {
        self.overlays
            .iter()
            .position(|o| o.name == name)
            .map(OverlayId)
    }

    pub fn overlay_visible(&self, id: OverlayId) -> bool {
        self.visible[id.0]
    }

    pub fn is_shaking(&self) -> bool {
        self.rig.is_shaking()
    }

    pub fn camera(&self) -> &CameraRig {
        &self.rig
    }

    pub fn cues_fired(&self) -> usize {
        self.director.fired()
    }

    pub fn cues_pending(&self) -> usize {
        self.director.pending()
    }
}
