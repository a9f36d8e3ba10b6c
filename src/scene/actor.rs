//! Actor state machines and pose mapping
//!
//! Each actor holds a discrete action step, a pose per step, and the
//! interpolators converging on the current pose. Steps are set by the
//! director (or by a click for interactive actors), never advanced by time
//! on their own.

use serde::{Deserialize, Serialize};

use crate::animation::{Motion, Transition};
use crate::core::Error;
use crate::core::types::{Color, Result, Vec3};
use crate::scene::node::Prop;
use crate::scene::script::ActorScript;

/// Index of an actor within its scene, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub usize);

/// The visual target an actor converges toward for one action step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    /// Body tint; all of an actor's poses carry one, or none do.
    pub color: Option<Color>,
}

/// Runtime state of one scripted actor.
#[derive(Clone, Debug)]
pub struct Actor {
    name: String,
    body: Vec<Prop>,
    poses: Vec<Pose>,
    transition: Transition,
    interactive: bool,
    step: usize,
    position: Motion,
    color: Option<Motion>,
}

impl Actor {
    /// Build the runtime actor from its script, validating the pose table.
    pub fn from_script(script: ActorScript) -> Result<Self> {
        if script.poses.is_empty() {
            return Err(Error::ActorConfig(format!(
                "actor '{}' declares no poses",
                script.name
            )));
        }
        if script.interactive && script.poses.len() != 2 {
            return Err(Error::ActorConfig(format!(
                "interactive actor '{}' needs exactly 2 poses, has {}",
                script.name,
                script.poses.len()
            )));
        }
        let colored = script.poses.iter().filter(|p| p.color.is_some()).count();
        if colored != 0 && colored != script.poses.len() {
            return Err(Error::ActorConfig(format!(
                "actor '{}' mixes colored and uncolored poses",
                script.name
            )));
        }

        let initial = script.poses[0];
        Ok(Self {
            name: script.name,
            body: script.body,
            transition: script.transition,
            interactive: script.interactive,
            step: 0,
            position: Motion::resting(initial.position, script.transition),
            color: initial
                .color
                .map(|c| Motion::resting(Vec3::from(c), script.transition)),
            poses: script.poses,
        })
    }

    /// Set the action step, retargeting the interpolators.
    ///
    /// Setting the current step again is a no-op: no transition restarts.
    /// Steps must stay within the pose table, and may not regress for
    /// timeline-driven actors; both are programming errors here (cues are
    /// checked at scene build).
    pub fn set_step(&mut self, step: usize) {
        assert!(
            step < self.poses.len(),
            "step {step} out of range for actor '{}'",
            self.name
        );
        if step == self.step {
            return;
        }
        if !self.interactive {
            assert!(
                step >= self.step,
                "step regression on actor '{}': {step} after {}",
                self.name,
                self.step
            );
        }
        self.step = step;
        let pose = self.poses[step];
        self.position.set_target(pose.position);
        if let (Some(motion), Some(color)) = (self.color.as_mut(), pose.color) {
            motion.set_target(Vec3::from(color));
        }
    }

    /// Flip an interactive actor between steps 0 and 1.
    ///
    /// Returns false (and changes nothing) for timeline-driven actors.
    pub fn toggle(&mut self) -> bool {
        if !self.interactive {
            return false;
        }
        let next = if self.step == 0 { 1 } else { 0 };
        self.set_step(next);
        true
    }

    /// Advance the interpolators by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.position.update(dt);
        if let Some(motion) = self.color.as_mut() {
            motion.update(dt);
        }
    }

    /// Rewind to step 0 with the interpolators at rest.
    pub fn reset(&mut self) {
        self.step = 0;
        let initial = self.poses[0];
        self.position = Motion::resting(initial.position, self.transition);
        self.color = initial
            .color
            .map(|c| Motion::resting(Vec3::from(c), self.transition));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &[Prop] {
        &self.body
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.poses.len()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Current interpolated position of the body origin.
    pub fn position(&self) -> Vec3 {
        self.position.value()
    }

    /// The position the actor is converging toward.
    pub fn target_position(&self) -> Vec3 {
        self.position.target()
    }

    /// Current body tint, if the pose table carries colors.
    pub fn color(&self) -> Option<Color> {
        self.color.as_ref().map(|m| m.value().to_array())
    }

    /// Whether every interpolator has arrived at the current pose.
    pub fn is_settled(&self) -> bool {
        self.position.is_settled() && self.color.as_ref().map_or(true, |m| m.is_settled())
    }
}
