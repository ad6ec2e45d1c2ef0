//! Sprites domain: tests for pose selection and animator playback.

use super::{AnimationState, PlayerAnimator};
use crate::movement::{AnimTrigger, CollisionSnapshot, MovementFlags, PlayerState, Side};

const DEADZONE: f32 = 0.01;

fn grounded() -> CollisionSnapshot {
    CollisionSnapshot::from_contacts(true, false, false)
}

// -----------------------------------------------------------------------------
// Pose selection tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_pose_takes_precedence() {
    let flags = MovementFlags {
        is_dashing: true,
        wall_grab: true,
        ..Default::default()
    };
    let pose = AnimationState::from_movement(
        PlayerState::Climbing,
        &flags,
        &grounded(),
        0.0,
        0.0,
        DEADZONE,
    );
    assert_eq!(pose, AnimationState::Dash);
}

#[test]
fn test_wall_poses() {
    let wall = CollisionSnapshot::from_contacts(false, false, true);

    let grab = MovementFlags {
        wall_grab: true,
        ..Default::default()
    };
    assert_eq!(
        AnimationState::from_movement(PlayerState::Climbing, &grab, &wall, 0.0, 0.0, DEADZONE),
        AnimationState::Climb
    );

    let slide = MovementFlags {
        wall_slide: true,
        ..Default::default()
    };
    assert_eq!(
        AnimationState::from_movement(PlayerState::OnWall, &slide, &wall, 0.0, -5.0, DEADZONE),
        AnimationState::WallSlide
    );
}

#[test]
fn test_airborne_poses_follow_vertical_velocity() {
    let air = CollisionSnapshot::default();
    let flags = MovementFlags::default();

    assert_eq!(
        AnimationState::from_movement(PlayerState::Jumping, &flags, &air, 0.0, 4.0, DEADZONE),
        AnimationState::Jump
    );
    assert_eq!(
        AnimationState::from_movement(PlayerState::Falling, &flags, &air, 0.0, -4.0, DEADZONE),
        AnimationState::Fall
    );
}

#[test]
fn test_ground_poses() {
    let flags = MovementFlags::default();
    let ground = grounded();
    assert_eq!(
        AnimationState::from_movement(PlayerState::Moving, &flags, &ground, 0.8, 0.0, DEADZONE),
        AnimationState::Run
    );
    assert_eq!(
        AnimationState::from_movement(PlayerState::Moving, &flags, &ground, 0.0, 0.0, DEADZONE),
        AnimationState::Idle
    );
    assert_eq!(
        AnimationState::from_movement(PlayerState::Idle, &flags, &ground, 0.8, 0.0, DEADZONE),
        AnimationState::Idle
    );
}

#[test]
fn test_run_pose_uses_tuned_deadzone() {
    let flags = MovementFlags::default();
    let ground = grounded();

    // Below a wide deadzone the controller is not Moving, so neither is the pose
    assert_eq!(
        AnimationState::from_movement(PlayerState::Moving, &flags, &ground, 0.2, 0.0, 0.3),
        AnimationState::Idle
    );
    assert_eq!(
        AnimationState::from_movement(PlayerState::Moving, &flags, &ground, 0.4, 0.0, 0.3),
        AnimationState::Run
    );
}

// -----------------------------------------------------------------------------
// Animator tests
// -----------------------------------------------------------------------------

#[test]
fn test_trigger_holds_then_releases() {
    let mut animator = PlayerAnimator::default();
    animator.set_trigger(AnimTrigger::Dash);
    assert_eq!(animator.triggered_state(), Some(AnimationState::Dash));

    animator.advance(0.2);
    assert_eq!(animator.triggered_state(), None);
}

#[test]
fn test_flip_mirrors_left() {
    let mut animator = PlayerAnimator::default();
    animator.flip(Side::Left);
    assert!(animator.flip_x);
    animator.flip(Side::Right);
    assert!(!animator.flip_x);
}

#[test]
fn test_state_change_resets_playback() {
    let mut animator = PlayerAnimator::default();
    animator.advance(0.2);
    assert_eq!(animator.current_frame, 1);

    animator.set_state(AnimationState::Run);
    assert_eq!(animator.current_frame, 0);
    assert_eq!(animator.total_frames, 6);

    // Setting the same state keeps playback going
    animator.advance(0.1);
    animator.set_state(AnimationState::Run);
    assert_eq!(animator.current_frame, 1);
}
