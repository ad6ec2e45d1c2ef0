//! Movement domain: controller tick and physics body synchronisation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CollisionSnapshot, InputSnapshot, JumpAssistState, JumpAssistTuning, MovementTuning,
    PhysicsState, Player, PlayerController,
};

/// Copy the avian body into the controller's view of it.
pub(crate) fn pull_physics_state(
    mut query: Query<
        (
            &Transform,
            &LinearVelocity,
            &GravityScale,
            &LinearDamping,
            &mut PhysicsState,
        ),
        With<Player>,
    >,
) {
    for (transform, velocity, gravity_scale, damping, mut body) in &mut query {
        body.position = transform.translation.truncate();
        body.velocity = velocity.0;
        body.gravity_scale = gravity_scale.0;
        body.drag = damping.0;
    }
}

pub(crate) fn run_player_controller(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&mut PlayerController, &CollisionSnapshot, &mut PhysicsState),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut controller, collision, mut body) in &mut query {
        controller.tick(&input, collision, &mut body, &tuning, dt);
    }
}

/// Write the controller's velocity, gravity and drag commands back to avian.
pub(crate) fn push_physics_state(
    mut query: Query<
        (
            &PhysicsState,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut LinearDamping,
        ),
        With<Player>,
    >,
) {
    for (body, mut velocity, mut gravity_scale, mut damping) in &mut query {
        velocity.0 = body.velocity;
        gravity_scale.0 = body.gravity_scale;
        damping.0 = body.drag;
    }
}

/// Heavier gravity when falling, and when the jump button is let go while
/// still rising, for a snappier and variable-height jump.
pub(crate) fn apply_jump_assist(
    time: Res<Time>,
    gravity: Res<Gravity>,
    input: Res<InputSnapshot>,
    tuning: Res<JumpAssistTuning>,
    mut query: Query<(&JumpAssistState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (assist, mut velocity) in &mut query {
        if !assist.enabled {
            continue;
        }
        velocity.y += jump_assist_delta(velocity.y, input.jump_held, gravity.0.y, &tuning) * dt;
    }
}

/// Extra vertical acceleration from the jump assist. `gravity_y` is negative.
pub(crate) fn jump_assist_delta(
    vertical_velocity: f32,
    jump_held: bool,
    gravity_y: f32,
    tuning: &JumpAssistTuning,
) -> f32 {
    if vertical_velocity < 0.0 {
        gravity_y * (tuning.fall_multiplier - 1.0)
    } else if vertical_velocity > 0.0 && !jump_held {
        gravity_y * (tuning.low_jump_multiplier - 1.0)
    } else {
        0.0
    }
}
