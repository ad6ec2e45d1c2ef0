//! Movement domain: a fixed room for exercising the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    spawn_block(
        &mut commands,
        (Ground, ground_layers),
        ground_color,
        Vec2::new(36.0, 1.0),
        Vec2::new(0.0, -6.5),
    );

    // Outer walls
    for x in [-18.0, 18.0] {
        spawn_block(
            &mut commands,
            (Wall, wall_layers),
            wall_color,
            Vec2::new(1.0, 16.0),
            Vec2::new(x, 1.0),
        );
    }

    // Platforms at increasing heights
    for (size, position) in [
        (Vec2::new(5.0, 0.5), Vec2::new(-10.0, -2.5)),
        (Vec2::new(5.0, 0.5), Vec2::new(10.0, 0.5)),
        (Vec2::new(4.0, 0.5), Vec2::new(0.0, 3.5)),
    ] {
        spawn_block(
            &mut commands,
            (Ground, ground_layers),
            platform_color,
            size,
            position,
        );
    }

    // Pillar for wall jumps and climbing
    spawn_block(
        &mut commands,
        (Wall, wall_layers),
        wall_color,
        Vec2::new(1.0, 7.0),
        Vec2::new(-4.0, -2.5),
    );
}

fn spawn_block(
    commands: &mut Commands,
    kind: impl Bundle,
    color: Color,
    size: Vec2,
    position: Vec2,
) {
    commands.spawn((
        kind,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Friction::new(0.0),
    ));
}
