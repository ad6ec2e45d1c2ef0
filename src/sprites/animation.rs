//! Player animation state and playback.
//!
//! The controller reaches this module through its animation bridge: triggers,
//! horizontal movement parameters and flips land on [`PlayerAnimator`], and the
//! systems below turn them into a pose on the player's sprite.

use bevy::prelude::*;

use crate::movement::{
    AnimTrigger, CollisionSnapshot, MovementFlags, MovementTuning, PhysicsState, Player,
    PlayerController, PlayerState, Side,
};

/// How long a jump or dash trigger holds its pose before movement takes over.
const TRIGGER_HOLD: f32 = 0.15;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallSlide,
    Climb,
    Dash,
}

impl AnimationState {
    /// Pick a pose from the movement flags and contacts. `deadzone` should be
    /// the controller's input deadzone so Run never outlasts Moving.
    pub fn from_movement(
        state: PlayerState,
        flags: &MovementFlags,
        collision: &CollisionSnapshot,
        horizontal: f32,
        vertical_velocity: f32,
        deadzone: f32,
    ) -> Self {
        if flags.is_dashing {
            AnimationState::Dash
        } else if flags.wall_grab {
            AnimationState::Climb
        } else if flags.wall_slide && collision.on_wall {
            AnimationState::WallSlide
        } else if !collision.on_ground {
            if vertical_velocity > 0.0 {
                AnimationState::Jump
            } else {
                AnimationState::Fall
            }
        } else if state == PlayerState::Moving && horizontal.abs() > deadzone {
            AnimationState::Run
        } else {
            AnimationState::Idle
        }
    }

    pub fn color(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Run => Color::srgb(0.95, 0.95, 0.8),
            AnimationState::Jump => Color::srgb(0.95, 0.85, 0.55),
            AnimationState::Fall => Color::srgb(0.7, 0.8, 0.95),
            AnimationState::WallSlide => Color::srgb(0.95, 0.6, 0.4),
            AnimationState::Climb => Color::srgb(0.55, 0.9, 0.55),
            AnimationState::Dash => Color::srgb(0.4, 0.95, 0.95),
        }
    }
}

/// Animation parameters and playback for the player sprite.
#[derive(Component, Debug)]
pub struct PlayerAnimator {
    /// Current animation state.
    pub state: AnimationState,
    /// Horizontal input last reported by the controller.
    pub horizontal: f32,
    /// Vertical input last reported by the controller.
    pub vertical: f32,
    pub vertical_velocity: f32,
    /// Most recent one-shot trigger and how long its pose still holds.
    pub trigger: Option<AnimTrigger>,
    pub trigger_timer: f32,
    /// Whether the sprite is mirrored to face left.
    pub flip_x: bool,
    /// Current frame index (0-based).
    pub current_frame: u32,
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl Default for PlayerAnimator {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            horizontal: 0.0,
            vertical: 0.0,
            vertical_velocity: 0.0,
            trigger: None,
            trigger_timer: 0.0,
            flip_x: false,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
        }
    }
}

impl PlayerAnimator {
    pub fn set_trigger(&mut self, trigger: AnimTrigger) {
        debug!("Animation trigger: {}", trigger.name());
        self.trigger = Some(trigger);
        self.trigger_timer = TRIGGER_HOLD;
    }

    pub fn set_horizontal_movement(&mut self, x: f32, y: f32, vertical_velocity: f32) {
        self.horizontal = x;
        self.vertical = y;
        self.vertical_velocity = vertical_velocity;
    }

    pub fn flip(&mut self, side: Side) {
        self.flip_x = side == Side::Left;
    }

    /// Set the animation state, resetting playback if it changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;

        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Climb => 4,
            AnimationState::Jump | AnimationState::Fall => 2,
            AnimationState::WallSlide => 2,
            AnimationState::Dash => 3,
        };
        self.frame_duration = match state {
            AnimationState::Run | AnimationState::Dash => 0.08,
            _ => 0.15,
        };
    }

    /// Pose forced by a recent trigger, if it is still holding.
    pub fn triggered_state(&self) -> Option<AnimationState> {
        if self.trigger_timer <= 0.0 {
            return None;
        }
        self.trigger.map(|trigger| match trigger {
            AnimTrigger::Jump => AnimationState::Jump,
            AnimTrigger::Dash => AnimationState::Dash,
        })
    }

    pub fn advance(&mut self, dt: f32) {
        self.trigger_timer = (self.trigger_timer - dt).max(0.0);

        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.total_frames.max(1);
        }
    }
}

/// Pick the player's pose from the controller each frame.
pub fn animation_state_machine(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &PlayerController,
            &CollisionSnapshot,
            &PhysicsState,
            &mut PlayerAnimator,
        ),
        With<Player>,
    >,
) {
    for (controller, collision, body, mut animator) in &mut query {
        animator.advance(time.delta_secs());

        let next = animator.triggered_state().unwrap_or_else(|| {
            AnimationState::from_movement(
                controller.state(),
                controller.flags(),
                collision,
                animator.horizontal,
                body.velocity.y,
                tuning.input_deadzone,
            )
        });

        if next != animator.state {
            debug!("Animation: {:?} -> {:?}", animator.state, next);
            animator.set_state(next);
        }
    }
}

/// Mirror and tint the sprite to match the animator.
pub fn apply_animation_to_sprite(mut query: Query<(&PlayerAnimator, &mut Sprite), With<Player>>) {
    for (animator, mut sprite) in &mut query {
        sprite.flip_x = animator.flip_x;

        // Alternate frames are drawn slightly darker so playback is visible
        let shade = if animator.current_frame % 2 == 0 {
            1.0
        } else {
            0.85
        };
        let base = animator.state.color().to_srgba();
        sprite.color = Color::srgb(base.red * shade, base.green * shade, base.blue * shade);
    }
}
