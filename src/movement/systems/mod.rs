//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod cues;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_contacts;
pub(crate) use cues::dispatch_movement_cues;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_jump_assist, pull_physics_state, push_physics_state, run_player_controller,
};
