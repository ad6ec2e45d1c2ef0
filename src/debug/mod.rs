//! Debug tooling for tuning the controller (dev-tools feature).
//!
//! - F1 / backtick: toggle the controller overlay
//! - F2: reload `assets/data/movement.ron`
//! - F3: reset the player to the spawn point

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::systems::{
    handle_debug_hotkeys, toggle_debug_overlay, update_debug_overlay, update_status_message,
};
use crate::movement::MovementSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    toggle_debug_overlay,
                    handle_debug_hotkeys,
                    update_status_message,
                )
                    .chain()
                    .before(MovementSet),
            )
            .add_systems(
                Update,
                update_debug_overlay
                    .after(MovementSet)
                    .run_if(|state: Res<DebugState>| state.overlay_visible),
            );
    }
}
