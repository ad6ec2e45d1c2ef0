//! Debug domain: tests for the reset hotkey.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::state::DebugState;
use super::systems::handle_debug_hotkeys;
use crate::movement::{
    CollisionSnapshot, InputSnapshot, JumpAssistState, MovementTuning, PLAYER_SPAWN, PhysicsState,
    Player, PlayerController, PlayerState, Side,
};
use crate::sprites::PlayerAnimator;

fn app_with_key(key: KeyCode) -> App {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(key);

    let mut app = App::new();
    app.insert_resource(keyboard)
        .init_resource::<DebugState>()
        .init_resource::<MovementTuning>()
        .add_systems(Update, handle_debug_hotkeys);
    app
}

#[test]
fn test_reset_restores_unflipped_sprite_and_assist() {
    let mut app = app_with_key(KeyCode::F3);

    let mut animator = PlayerAnimator::default();
    animator.flip(Side::Left);
    let player = app
        .world_mut()
        .spawn((
            Player,
            Transform::from_xyz(4.0, 7.0, 1.0),
            LinearVelocity(Vec2::new(3.0, -2.0)),
            PlayerController::default(),
            PhysicsState::new(0.0),
            animator,
            JumpAssistState { enabled: false },
        ))
        .id();

    app.update();

    let world = app.world();
    let animator = world.get::<PlayerAnimator>(player).expect("animator");
    assert!(!animator.flip_x);
    let controller = world.get::<PlayerController>(player).expect("controller");
    assert_eq!(controller.state(), PlayerState::Idle);
    assert_eq!(controller.facing().sprite_side(), Side::Right);
    assert!(world.get::<JumpAssistState>(player).expect("assist").enabled);

    let transform = world.get::<Transform>(player).expect("transform");
    assert_eq!(transform.translation, PLAYER_SPAWN.extend(1.0));
    assert_eq!(
        world.get::<LinearVelocity>(player).expect("velocity").0,
        Vec2::ZERO
    );
    let body = world.get::<PhysicsState>(player).expect("body");
    assert_eq!(body.gravity_scale, MovementTuning::default().base_gravity);
}

#[test]
fn test_reset_keeps_sprite_and_controller_facing_in_sync() {
    let mut app = app_with_key(KeyCode::F3);
    let tuning = MovementTuning::default();

    // Walk left so both the controller and the sprite face left
    let mut controller = PlayerController::default();
    let mut body = PhysicsState::new(tuning.base_gravity);
    let walk_left = InputSnapshot {
        x_axis: -1.0,
        x_raw: -1.0,
        ..default()
    };
    let grounded = CollisionSnapshot::from_contacts(true, false, false);
    controller.tick(&walk_left, &grounded, &mut body, &tuning, 1.0 / 64.0);
    assert_eq!(controller.facing().sprite_side(), Side::Left);
    let mut animator = PlayerAnimator::default();
    animator.flip(Side::Left);

    let player = app
        .world_mut()
        .spawn((
            Player,
            Transform::default(),
            LinearVelocity::ZERO,
            controller,
            body,
            animator,
            JumpAssistState::default(),
        ))
        .id();

    app.update();

    let world = app.world();
    let controller = world.get::<PlayerController>(player).expect("controller");
    let animator = world.get::<PlayerAnimator>(player).expect("animator");
    let controller_flipped = controller.facing().sprite_side() == Side::Left;
    assert_eq!(animator.flip_x, controller_flipped);
}
