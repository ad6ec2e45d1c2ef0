//! Content domain: data-driven tuning loaded from `assets/data`.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::MovementConfig;
pub use loader::{ContentLoadError, load_movement_config, parse_movement_config};
pub use validation::{ValidationError, validate_movement_config};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;
use crate::effects::CameraShake;

pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load tuning, fall back to defaults on any error, then start the run.
fn load_content(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let config = read_movement_config(Path::new(MOVEMENT_CONFIG_PATH));
    insert_movement_config(&mut commands, config);
    next_state.set(GameState::Run);
}

/// Read and validate a tuning file. Any load or validation error is logged and
/// the defaults are returned instead.
pub(crate) fn read_movement_config(path: &Path) -> MovementConfig {
    let config = match load_movement_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, using default tuning", e);
            return MovementConfig::default();
        }
    };

    let errors = validate_movement_config(&config);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Invalid tuning: {}", error);
        }
        warn!("{} invalid tuning value(s), using defaults", errors.len());
        return MovementConfig::default();
    }

    info!("Loaded movement tuning from {}", path.display());
    config
}

/// Replace every tuning resource, reseeding the camera shake.
pub(crate) fn insert_movement_config(commands: &mut Commands, config: MovementConfig) {
    info!(
        "Movement tuning: jump height={:.2}, dash distance={:.2}",
        config.movement.jump_height(config.world_gravity),
        config.movement.dash_speed * config.movement.dash_time
    );

    commands.insert_resource(Gravity(Vec2::NEG_Y * config.world_gravity));
    commands.insert_resource(CameraShake::new(config.camera_shake.seed));
    commands.insert_resource(config.movement);
    commands.insert_resource(config.jump_assist);
    commands.insert_resource(config.input);
    commands.insert_resource(config.camera_shake);
}
