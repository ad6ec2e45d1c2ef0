//! Core domain: app state and camera.

mod state;

pub use state::GameState;

use bevy::prelude::*;

/// World units are metres; this many pixels per unit on screen.
pub const PIXELS_PER_UNIT: f32 = 32.0;

/// Marker for the gameplay camera
#[derive(Component, Debug)]
pub struct MainCamera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}
