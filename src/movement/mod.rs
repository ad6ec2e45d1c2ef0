//! Movement domain: the player controller and the systems that feed it.

mod bootstrap;
mod bridge;
mod components;
mod dev;
mod events;
mod facing;
mod machine;
mod motion;
mod resources;
mod scheduler;
mod systems;


pub use bootstrap::{PLAYER_SIZE, PLAYER_SPAWN};
pub use bridge::{
    AnimTrigger, AnimationBridge, CueBuffer, EffectsBridge, JumpAssist, MovementBridge,
    MovementCue,
};
pub use components::{
    DashCooldown, GameLayer, Ground, MovementFlags, PhysicsState, Player, PlayerState, Side, Wall,
};
pub use events::{CameraShakeEvent, DashEffectEvent, GhostTrailEvent};
pub use facing::FacingController;
pub use machine::PlayerStateMachine;
pub use resources::{
    CollisionSnapshot, InputSnapshot, InputTuning, JumpAssistTuning, MovementTuning,
};
pub use scheduler::{ActionToken, SequenceEvent, TimedAction, TimedActionScheduler};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_jump_assist, detect_contacts, dispatch_movement_cues, pull_physics_state,
    push_physics_state, read_input, run_player_controller,
};

/// The player's controller, holding a state machine whose collaborators are
/// reached through a [`CueBuffer`].
#[derive(Component, Debug, Deref, DerefMut)]
pub struct PlayerController(pub PlayerStateMachine<CueBuffer>);

impl Default for PlayerController {
    fn default() -> Self {
        Self(PlayerStateMachine::new(CueBuffer::default()))
    }
}

/// Whether the jump assist currently shapes the jump arc.
#[derive(Component, Debug)]
pub struct JumpAssistState {
    pub enabled: bool,
}

impl Default for JumpAssistState {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Input sampling, contact detection and the controller tick, in that order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<JumpAssistTuning>()
            .init_resource::<InputTuning>()
            .init_resource::<InputSnapshot>()
            .add_message::<DashEffectEvent>()
            .add_message::<CameraShakeEvent>()
            .add_message::<GhostTrailEvent>()
            .add_systems(OnEnter(GameState::Run), (spawn_test_room, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    detect_contacts,
                    pull_physics_state,
                    run_player_controller,
                    push_physics_state,
                    apply_jump_assist,
                    dispatch_movement_cues,
                )
                    .chain()
                    .in_set(MovementSet)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
