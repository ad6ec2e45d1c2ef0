//! Movement domain: velocity primitives for walking, jumping, sliding and dashing.
//!
//! These only write the velocity and flag changes they are responsible for;
//! choosing when to call them is the state machine's job.

use bevy::prelude::*;

use crate::movement::{
    AnimTrigger, CollisionSnapshot, DashCooldown, FacingController, MovementBridge,
    MovementFlags, MovementTuning, PhysicsState, Side, TimedAction, TimedActionScheduler,
};

pub fn walk(
    direction: Vec2,
    flags: &MovementFlags,
    body: &mut PhysicsState,
    tuning: &MovementTuning,
    dt: f32,
) {
    if !flags.can_move || flags.wall_grab {
        return;
    }

    let target = Vec2::new(direction.x * tuning.speed, body.velocity.y);
    if flags.wall_jumped {
        // Ease out of a wall jump arc instead of snapping to the walk speed
        let t = (tuning.wall_jump_lerp * dt).clamp(0.0, 1.0);
        body.velocity = body.velocity.lerp(target, t);
    } else {
        body.velocity = target;
    }
}

pub fn jump(direction: Vec2, body: &mut PhysicsState, tuning: &MovementTuning) {
    body.velocity.y = 0.0;
    body.velocity += direction * tuning.jump_force;
}

/// Lock movement for `seconds`, replacing any lock still pending.
pub fn disable_movement(
    flags: &mut MovementFlags,
    scheduler: &mut TimedActionScheduler,
    seconds: f32,
) {
    flags.can_move = false;
    scheduler.start(TimedAction::MovementDisable, seconds);
}

pub fn wall_jump(
    collision: &CollisionSnapshot,
    flags: &mut MovementFlags,
    facing: &mut FacingController,
    scheduler: &mut TimedActionScheduler,
    body: &mut PhysicsState,
    tuning: &MovementTuning,
    bridge: &mut impl MovementBridge,
) {
    let facing_wall = match facing.side() {
        Side::Right => collision.on_right_wall,
        Side::Left => !collision.on_right_wall,
    };
    if facing_wall {
        facing.turn_around(bridge);
    }

    disable_movement(flags, scheduler, tuning.wall_jump_disable_time);

    let away = if collision.on_right_wall {
        Vec2::NEG_X
    } else {
        Vec2::X
    };
    jump((Vec2::Y + away) / tuning.wall_jump_scale, body, tuning);

    flags.wall_jumped = true;
    debug!("Wall jump: away={}, velocity={:?}", away.x, body.velocity);
}

pub fn wall_slide(
    collision: &CollisionSnapshot,
    flags: &MovementFlags,
    facing: &mut FacingController,
    body: &mut PhysicsState,
    tuning: &MovementTuning,
    bridge: &mut impl MovementBridge,
) {
    if collision.wall_side != facing.side() {
        facing.show(facing.side().opposite(), bridge);
    }

    if !flags.can_move {
        return;
    }

    let pushing_wall = (body.velocity.x > 0.0 && collision.on_right_wall)
        || (body.velocity.x < 0.0 && collision.on_left_wall);
    let push = if pushing_wall { 0.0 } else { body.velocity.x };

    body.velocity = Vec2::new(push, -tuning.slide_speed);
}

/// Dash toward `direction`. Callers guarantee the direction is non-zero and the
/// cooldown is clear.
pub fn dash(
    direction: Vec2,
    flags: &mut MovementFlags,
    cooldown: &mut DashCooldown,
    scheduler: &mut TimedActionScheduler,
    body: &mut PhysicsState,
    tuning: &MovementTuning,
    bridge: &mut impl MovementBridge,
) {
    bridge.shake_camera();
    bridge.emit_dash_effect(body.position);

    cooldown.has_dashed = true;
    bridge.set_trigger(AnimTrigger::Dash);

    body.velocity = Vec2::ZERO;
    body.velocity += direction.normalize_or_zero() * tuning.dash_speed;

    start_dash_sequence(flags, scheduler, body, tuning, bridge);
    debug!("Dash: direction={:?}, velocity={:?}", direction, body.velocity);
}

fn start_dash_sequence(
    flags: &mut MovementFlags,
    scheduler: &mut TimedActionScheduler,
    body: &mut PhysicsState,
    tuning: &MovementTuning,
    bridge: &mut impl MovementBridge,
) {
    bridge.show_ghost_trail();

    scheduler.start(TimedAction::GroundDash, tuning.ground_dash_time);

    body.drag = tuning.dash_drag;
    scheduler.start(TimedAction::DragRamp, tuning.drag_ramp_time);

    body.gravity_scale = 0.0;
    bridge.set_enabled(false);

    flags.wall_jumped = true;
    flags.is_dashing = true;

    scheduler.start(TimedAction::Dash, tuning.dash_time);
}

/// Drag along the dash ramp; eases out so most of the drag is shed early.
pub fn ramp_drag(start: f32, fraction: f32) -> f32 {
    let t = fraction.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t) * (1.0 - t);
    start * (1.0 - eased)
}
