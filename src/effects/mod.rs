//! Effects domain: camera shake, dash afterimages and dash ripples.
//!
//! Everything here reacts to messages written by the movement controller; none
//! of it feeds back into movement.

mod ripple;
mod shake;
mod trail;


pub use ripple::Ripple;
pub use shake::{CameraShake, CameraShakeTuning};
pub use trail::{Ghost, GhostTrail};

use bevy::prelude::*;

use crate::effects::ripple::{spawn_dash_ripples, update_ripples};
use crate::effects::shake::{start_camera_shake, update_camera_shake};
use crate::effects::trail::{fade_ghosts, spawn_ghosts, start_ghost_trail};
use crate::movement::MovementSet;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraShakeTuning>()
            .insert_resource(CameraShake::new(CameraShakeTuning::default().seed))
            .add_systems(
                Update,
                (
                    (start_camera_shake, update_camera_shake).chain(),
                    (start_ghost_trail, spawn_ghosts, fade_ghosts).chain(),
                    (spawn_dash_ripples, update_ripples).chain(),
                )
                    .after(MovementSet),
            );
    }
}
