//! Movement domain: outbound collaborator interfaces for the controller.
//!
//! The state machine never reaches into the animation, effects or jump-assist
//! code directly. It talks to a bridge that implements the three traits below;
//! in the running game that bridge is a [`CueBuffer`] drained into Bevy messages
//! after every tick.

use bevy::prelude::*;

use crate::movement::Side;

/// One-shot animation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTrigger {
    Jump,
    Dash,
}

impl AnimTrigger {
    pub fn name(self) -> &'static str {
        match self {
            AnimTrigger::Jump => "jump",
            AnimTrigger::Dash => "dash",
        }
    }
}

pub trait AnimationBridge {
    fn set_trigger(&mut self, trigger: AnimTrigger);
    fn set_horizontal_movement(&mut self, x: f32, y: f32, vertical_velocity: f32);
    fn flip(&mut self, side: Side);
}

pub trait EffectsBridge {
    /// Dash burst at a world position; the receiver converts it to viewport space.
    fn emit_dash_effect(&mut self, position: Vec2);
    fn shake_camera(&mut self);
    fn show_ghost_trail(&mut self);
}

/// Jump arc shaping, switched off while dashing.
pub trait JumpAssist {
    fn set_enabled(&mut self, enabled: bool);
}

pub trait MovementBridge: AnimationBridge + EffectsBridge + JumpAssist {}

impl<T: AnimationBridge + EffectsBridge + JumpAssist> MovementBridge for T {}

/// Everything the controller asked its collaborators to do during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementCue {
    Trigger(AnimTrigger),
    HorizontalMovement {
        x: f32,
        y: f32,
        vertical_velocity: f32,
    },
    Flip(Side),
    DashEffect(Vec2),
    CameraShake,
    GhostTrail,
    JumpAssist(bool),
}

#[derive(Debug, Default)]
pub struct CueBuffer {
    cues: Vec<MovementCue>,
}

impl CueBuffer {
    pub fn drain(&mut self) -> std::vec::Drain<'_, MovementCue> {
        self.cues.drain(..)
    }

    pub fn cues(&self) -> &[MovementCue] {
        &self.cues
    }
}

impl AnimationBridge for CueBuffer {
    fn set_trigger(&mut self, trigger: AnimTrigger) {
        self.cues.push(MovementCue::Trigger(trigger));
    }

    fn set_horizontal_movement(&mut self, x: f32, y: f32, vertical_velocity: f32) {
        self.cues.push(MovementCue::HorizontalMovement {
            x,
            y,
            vertical_velocity,
        });
    }

    fn flip(&mut self, side: Side) {
        self.cues.push(MovementCue::Flip(side));
    }
}

impl EffectsBridge for CueBuffer {
    fn emit_dash_effect(&mut self, position: Vec2) {
        self.cues.push(MovementCue::DashEffect(position));
    }

    fn shake_camera(&mut self) {
        self.cues.push(MovementCue::CameraShake);
    }

    fn show_ghost_trail(&mut self) {
        self.cues.push(MovementCue::GhostTrail);
    }
}

impl JumpAssist for CueBuffer {
    fn set_enabled(&mut self, enabled: bool) {
        self.cues.push(MovementCue::JumpAssist(enabled));
    }
}
