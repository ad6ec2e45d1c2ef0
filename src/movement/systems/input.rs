//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputSnapshot, InputTuning};

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    tuning: Res<InputTuning>,
    mut input: ResMut<InputSnapshot>,
) {
    let dt = time.delta_secs();

    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (climbing and dash direction)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.x_raw = x;
    input.y_raw = y;
    input.x_axis = smooth_axis(input.x_axis, x, dt, &tuning);
    input.y_axis = smooth_axis(input.y_axis, y, dt, &tuning);

    input.jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    input.dash_pressed = keyboard.just_pressed(KeyCode::ShiftLeft)
        || keyboard.just_pressed(KeyCode::KeyJ)
        || mouse.just_pressed(MouseButton::Left);
    input.grab_held = keyboard.pressed(KeyCode::KeyL)
        || keyboard.pressed(KeyCode::ControlLeft)
        || mouse.pressed(MouseButton::Right);
}

/// Move a smoothed axis toward the raw value: `sensitivity` units per second
/// while held, `gravity` units per second back to rest. With `snap`, reversing
/// direction restarts from zero.
pub(crate) fn smooth_axis(current: f32, raw: f32, dt: f32, tuning: &InputTuning) -> f32 {
    if raw == 0.0 {
        return move_towards(current, 0.0, tuning.gravity * dt);
    }

    let start = if tuning.snap && current * raw < 0.0 {
        0.0
    } else {
        current
    };
    move_towards(start, raw, tuning.sensitivity * dt).clamp(-1.0, 1.0)
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
