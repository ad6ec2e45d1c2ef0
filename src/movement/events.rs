//! Movement domain: messages emitted by the controller for effect systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Dash burst at a world position
#[derive(Debug)]
pub struct DashEffectEvent {
    pub position: Vec2,
}

impl Message for DashEffectEvent {}

/// Restart the camera shake from rest
#[derive(Debug)]
pub struct CameraShakeEvent;

impl Message for CameraShakeEvent {}

/// Start a ghost trail behind the given entity
#[derive(Debug)]
pub struct GhostTrailEvent {
    pub entity: Entity,
}

impl Message for GhostTrailEvent {}
