//! Sprites module: player animation driven by the movement controller.

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

use crate::core::GameState;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (animation_state_machine, apply_animation_to_sprite)
                .chain()
                .after(crate::movement::MovementSet)
                .run_if(in_state(GameState::Run)),
        );
    }
}
