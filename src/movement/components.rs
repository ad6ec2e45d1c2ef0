//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// The eight locomotion states. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Moving,
    Climbing,
    OnWall,
    Jumping,
    Falling,
    Dashing,
    WallJumping,
}

impl PlayerState {
    pub fn label(self) -> &'static str {
        match self {
            PlayerState::Idle => "IDLE",
            PlayerState::Moving => "MOVING",
            PlayerState::Climbing => "CLIMBING",
            PlayerState::OnWall => "ON_WALL",
            PlayerState::Jumping => "JUMPING",
            PlayerState::Falling => "FALLING",
            PlayerState::Dashing => "DASHING",
            PlayerState::WallJumping => "WALL_JUMPING",
        }
    }
}

/// Horizontal side, used for facing and for the wall direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Side for a signed value; `None` for zero.
    pub fn from_sign(value: f32) -> Option<Side> {
        if value > 0.0 {
            Some(Side::Right)
        } else if value < 0.0 {
            Some(Side::Left)
        } else {
            None
        }
    }
}

/// Movement booleans shared between the state machine and scheduled sequences.
///
/// `wall_grab` and `wall_slide` are never both set: sliding is only engaged while
/// not grabbing, and grabbing clears the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementFlags {
    pub can_move: bool,
    pub wall_grab: bool,
    pub wall_jumped: bool,
    pub wall_slide: bool,
    pub is_dashing: bool,
}

impl Default for MovementFlags {
    fn default() -> Self {
        Self {
            can_move: true,
            wall_grab: false,
            wall_jumped: false,
            wall_slide: false,
            is_dashing: false,
        }
    }
}

impl MovementFlags {
    /// Facing is frozen while on a wall or while movement is disabled.
    pub fn movement_locked(&self) -> bool {
        self.wall_grab || self.wall_slide || !self.can_move
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashCooldown {
    pub has_dashed: bool,
}

impl DashCooldown {
    pub fn is_ready(&self) -> bool {
        !self.has_dashed
    }
}

/// Velocity, gravity and drag of the player body.
///
/// Mirrored from the avian2d components before the controller runs and written
/// back afterwards, so the controller never touches the physics world directly.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsState {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub drag: f32,
    /// World position, read-only for the controller.
    pub position: Vec2,
}

impl PhysicsState {
    pub fn new(gravity_scale: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale,
            drag: 0.0,
            position: Vec2::ZERO,
        }
    }
}
