//! Movement domain: player spawn with controller and physics body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CollisionSnapshot, GameLayer, JumpAssistState, MovementTuning, PhysicsState, Player,
    PlayerController,
};
use crate::sprites::PlayerAnimator;

pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.2);
pub const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, -3.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player: speed={}, jump_force={}, dash_speed={}, base_gravity={}",
        tuning.speed, tuning.jump_force, tuning.dash_speed, tuning.base_gravity
    );

    commands.spawn((
        // Identity & controller
        (
            Player,
            PlayerController::default(),
            PhysicsState::new(tuning.base_gravity),
            CollisionSnapshot::default(),
            JumpAssistState::default(),
            PlayerAnimator::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.base_gravity),
            LinearDamping(0.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
