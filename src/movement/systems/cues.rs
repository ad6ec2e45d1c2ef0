//! Movement domain: hand the controller's collaborator calls to the game.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    CameraShakeEvent, DashEffectEvent, GhostTrailEvent, JumpAssistState, MovementCue, Player,
    PlayerController,
};
use crate::sprites::PlayerAnimator;

pub(crate) fn dispatch_movement_cues(
    mut query: Query<
        (
            Entity,
            &mut PlayerController,
            &mut PlayerAnimator,
            &mut JumpAssistState,
        ),
        With<Player>,
    >,
    mut dash_effects: MessageWriter<DashEffectEvent>,
    mut camera_shakes: MessageWriter<CameraShakeEvent>,
    mut ghost_trails: MessageWriter<GhostTrailEvent>,
) {
    for (entity, mut controller, mut animator, mut assist) in &mut query {
        for cue in controller.bridge_mut().drain() {
            match cue {
                MovementCue::Trigger(trigger) => animator.set_trigger(trigger),
                MovementCue::HorizontalMovement {
                    x,
                    y,
                    vertical_velocity,
                } => animator.set_horizontal_movement(x, y, vertical_velocity),
                MovementCue::Flip(side) => animator.flip(side),
                MovementCue::DashEffect(position) => {
                    dash_effects.write(DashEffectEvent { position });
                }
                MovementCue::CameraShake => {
                    camera_shakes.write(CameraShakeEvent);
                }
                MovementCue::GhostTrail => {
                    ghost_trails.write(GhostTrailEvent { entity });
                }
                MovementCue::JumpAssist(enabled) => {
                    if assist.enabled != enabled {
                        debug!("Jump assist: enabled={}", enabled);
                    }
                    assist.enabled = enabled;
                }
            }
        }
    }
}
