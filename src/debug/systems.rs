//! Debug domain: hotkeys and the controller overlay.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::fmt::Write;
use std::path::Path;

use crate::content::{MOVEMENT_CONFIG_PATH, insert_movement_config, read_movement_config};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugOverlay, spawn_debug_overlay};
use crate::movement::{
    CollisionSnapshot, JumpAssistState, MovementTuning, PLAYER_SPAWN, PhysicsState, Player,
    PlayerController, TimedAction,
};
use crate::sprites::PlayerAnimator;

const SEQUENCES: [(TimedAction, &str); 4] = [
    (TimedAction::Dash, "dash"),
    (TimedAction::GroundDash, "ground dash"),
    (TimedAction::DragRamp, "drag ramp"),
    (TimedAction::MovementDisable, "move lock"),
];

/// Toggle the overlay with F1 or backtick key
pub(crate) fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    if !(keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote)) {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        spawn_debug_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// F2 reloads the tuning file, F3 puts the player back at the spawn point.
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    tuning: Res<MovementTuning>,
    mut players: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut PlayerController,
            &mut PhysicsState,
            &mut PlayerAnimator,
            &mut JumpAssistState,
        ),
        With<Player>,
    >,
) {
    if keyboard.just_pressed(KeyCode::F2) {
        let config = read_movement_config(Path::new(MOVEMENT_CONFIG_PATH));
        insert_movement_config(&mut commands, config);
        debug_state.set_message("Tuning reloaded", 2.0);
        info!("[DEBUG] Reloaded {}", MOVEMENT_CONFIG_PATH);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        for (mut transform, mut velocity, mut controller, mut body, mut animator, mut assist) in
            &mut players
        {
            transform.translation = PLAYER_SPAWN.extend(transform.translation.z);
            velocity.0 = Vec2::ZERO;
            // A fresh controller assumes an unflipped sprite
            *controller = PlayerController::default();
            *body = PhysicsState::new(tuning.base_gravity);
            *animator = PlayerAnimator::default();
            *assist = JumpAssistState::default();
        }
        debug_state.set_message("Player reset", 2.0);
        info!("[DEBUG] Player reset to {:?}", PLAYER_SPAWN);
    }
}

/// Update status message timer
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, remaining)) = &mut debug_state.status_message {
        *remaining -= time.delta_secs();
        if *remaining <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Update the overlay with the current controller state
pub(crate) fn update_debug_overlay(
    debug_state: Res<DebugState>,
    players: Query<(&PlayerController, &PhysicsState, &CollisionSnapshot), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };
    let Ok((controller, body, collision)) = players.single() else {
        return;
    };

    let flags = controller.flags();
    let mut info = format!(
        "State: {}\nFacing: {:?} (sprite {:?})\nVelocity: ({:.2}, {:.2})\nGravity: {:.2}  Drag: {:.2}\n",
        controller.state().label(),
        controller.facing().side(),
        controller.facing().sprite_side(),
        body.velocity.x,
        body.velocity.y,
        body.gravity_scale,
        body.drag,
    );
    let _ = writeln!(
        info,
        "can_move={} grab={} slide={} wall_jumped={} dashing={} has_dashed={}",
        flags.can_move,
        flags.wall_grab,
        flags.wall_slide,
        flags.wall_jumped,
        flags.is_dashing,
        controller.cooldown().has_dashed,
    );
    let _ = writeln!(
        info,
        "ground={} wall={} (left={} right={}) side={:?}",
        collision.on_ground,
        collision.on_wall,
        collision.on_left_wall,
        collision.on_right_wall,
        collision.wall_side,
    );

    let scheduler = controller.scheduler();
    let pending: Vec<String> = SEQUENCES
        .iter()
        .filter_map(|(action, name)| {
            let count = scheduler.pending_count(*action);
            (count > 0).then(|| format!("{} x{}", name, count))
        })
        .collect();
    if pending.is_empty() {
        info.push_str("Sequences: none");
    } else {
        let _ = write!(info, "Sequences: {}", pending.join(", "));
    }

    if let Some((message, _)) = &debug_state.status_message {
        let _ = write!(info, "\n> {}", message);
    }

    **text = info;
}
