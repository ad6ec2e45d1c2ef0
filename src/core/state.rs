//! Core domain: app state for the boot and play flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Loading tuning files
    #[default]
    Boot,
    Run,
}
