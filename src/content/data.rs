//! Data definitions for the movement tuning file.

use serde::Deserialize;

use crate::effects::CameraShakeTuning;
use crate::movement::{InputTuning, JumpAssistTuning, MovementTuning};

/// Contents of `assets/data/movement.ron`. Every section is optional; missing
/// sections and fields keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub jump_assist: JumpAssistTuning,
    pub input: InputTuning,
    pub camera_shake: CameraShakeTuning,
    /// World gravity magnitude, scaled per body by its gravity scale.
    pub world_gravity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            movement: MovementTuning::default(),
            jump_assist: JumpAssistTuning::default(),
            input: InputTuning::default(),
            camera_shake: CameraShakeTuning::default(),
            world_gravity: 9.81,
        }
    }
}
