//! Movement domain: tuning, input and contact snapshots.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::Side;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub speed: f32,
    pub jump_force: f32,
    pub slide_speed: f32,
    /// Blend rate toward the walk velocity while `wall_jumped` is set.
    pub wall_jump_lerp: f32,
    pub dash_speed: f32,
    /// Gravity scale restored at the start of every tick.
    pub base_gravity: f32,
    /// Smoothed horizontal input below this magnitude counts as no input.
    pub input_deadzone: f32,
    /// Horizontal input above this magnitude pins horizontal velocity while climbing.
    pub climb_deadzone: f32,
    /// Climbing up is slower than climbing down.
    pub climb_up_multiplier: f32,
    /// Vertical velocity at or below which a rising state becomes falling.
    pub fall_threshold: f32,
    /// Divisor for the up-and-away wall jump direction.
    pub wall_jump_scale: f32,
    pub wall_jump_disable_time: f32,
    pub dash_time: f32,
    /// Delay after a dash start at which a grounded player gets the dash back.
    pub ground_dash_time: f32,
    pub dash_drag: f32,
    pub drag_ramp_time: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            jump_force: 50.0,
            slide_speed: 5.0,
            wall_jump_lerp: 10.0,
            dash_speed: 20.0,
            base_gravity: 3.0,
            input_deadzone: 0.01,
            climb_deadzone: 0.2,
            climb_up_multiplier: 0.5,
            fall_threshold: 0.1,
            wall_jump_scale: 1.5,
            wall_jump_disable_time: 0.1,
            dash_time: 0.3,
            ground_dash_time: 0.15,
            dash_drag: 14.0,
            drag_ramp_time: 0.8,
        }
    }
}

impl MovementTuning {
    /// Apex height of a standing jump under the given world gravity.
    /// Uses h = v² / (2g).
    pub fn jump_height(&self, world_gravity: f32) -> f32 {
        let g = world_gravity * self.base_gravity;
        if g <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * g)
    }
}

/// Extra gravity shaping the jump arc: heavier when falling, and heavier when the
/// jump button is released while still rising.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JumpAssistTuning {
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
}

impl Default for JumpAssistTuning {
    fn default() -> Self {
        Self {
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
        }
    }
}

/// Rates for the smoothed input axes, in units per second.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputTuning {
    /// How fast the axis moves toward a held direction.
    pub sensitivity: f32,
    /// How fast the axis returns to zero when released.
    pub gravity: f32,
    /// Jump straight to zero when the held direction reverses.
    pub snap: bool,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
        }
    }
}

/// Player input for one tick. Axes are smoothed, raw axes are -1, 0 or 1.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub x_axis: f32,
    pub y_axis: f32,
    pub x_raw: f32,
    pub y_raw: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
    pub grab_held: bool,
}

impl InputSnapshot {
    pub fn axis(&self) -> Vec2 {
        Vec2::new(self.x_axis, self.y_axis)
    }

    pub fn raw(&self) -> Vec2 {
        Vec2::new(self.x_raw, self.y_raw)
    }

    pub fn has_raw_direction(&self) -> bool {
        self.x_raw != 0.0 || self.y_raw != 0.0
    }
}

/// Contact classification for one tick, produced by the collision probe.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionSnapshot {
    pub on_ground: bool,
    pub on_wall: bool,
    pub on_left_wall: bool,
    pub on_right_wall: bool,
    /// Points away from the touched wall: `Left` against a right wall, `Right` otherwise.
    pub wall_side: Side,
}

impl CollisionSnapshot {
    pub fn from_contacts(on_ground: bool, on_left_wall: bool, on_right_wall: bool) -> Self {
        Self {
            on_ground,
            on_wall: on_left_wall || on_right_wall,
            on_left_wall,
            on_right_wall,
            wall_side: if on_right_wall { Side::Left } else { Side::Right },
        }
    }
}
