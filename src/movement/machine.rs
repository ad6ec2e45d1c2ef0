//! Movement domain: the per-tick player state machine.
//!
//! Every tick runs in a fixed order: gravity back to baseline, the current
//! state's task, its transitions (first match wins), facing from residual
//! input, then any timed sequences that came due.

use bevy::prelude::*;

use crate::movement::motion::{self, ramp_drag};
use crate::movement::{
    AnimTrigger, CollisionSnapshot, CueBuffer, DashCooldown, FacingController, InputSnapshot,
    MovementBridge, MovementFlags, MovementTuning, PhysicsState, PlayerState, SequenceEvent, Side,
    TimedAction, TimedActionScheduler,
};

#[derive(Debug)]
pub struct PlayerStateMachine<B: MovementBridge = CueBuffer> {
    state: PlayerState,
    flags: MovementFlags,
    cooldown: DashCooldown,
    facing: FacingController,
    /// Set once the landing reset has run for the current grounded period.
    ground_touch: bool,
    /// Last value sent to the jump assist, so it is only told about changes.
    jump_assist: Option<bool>,
    scheduler: TimedActionScheduler,
    bridge: B,
}

impl<B: MovementBridge> PlayerStateMachine<B> {
    pub fn new(bridge: B) -> Self {
        Self {
            state: PlayerState::Idle,
            flags: MovementFlags::default(),
            cooldown: DashCooldown::default(),
            facing: FacingController::new(Side::Right),
            ground_touch: false,
            jump_assist: None,
            scheduler: TimedActionScheduler::new(),
            bridge,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn flags(&self) -> &MovementFlags {
        &self.flags
    }

    pub fn cooldown(&self) -> &DashCooldown {
        &self.cooldown
    }

    pub fn facing(&self) -> &FacingController {
        &self.facing
    }

    pub fn scheduler(&self) -> &TimedActionScheduler {
        &self.scheduler
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    /// Advance one simulation step. Must run before the physics step consumes
    /// `body.velocity`.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        collision: &CollisionSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
        dt: f32,
    ) -> PlayerState {
        // A running dash holds gravity at zero until its sequence completes
        body.gravity_scale = if self.flags.is_dashing {
            0.0
        } else {
            tuning.base_gravity
        };

        let previous = self.state;
        let next = match previous {
            PlayerState::Idle => self.idle(input, collision, body, tuning),
            PlayerState::Moving => self.moving(input, collision, body, tuning, dt),
            PlayerState::Climbing => self.climbing(input, collision, body, tuning),
            PlayerState::OnWall => self.on_wall(input, collision, body, tuning),
            PlayerState::Jumping => self.rising(PlayerState::Jumping, input, body, tuning),
            PlayerState::Falling => self.falling(input, collision, body, tuning),
            PlayerState::Dashing => self.dashing(collision),
            PlayerState::WallJumping => self.rising(PlayerState::WallJumping, input, body, tuning),
        };

        if next != previous {
            debug!("Player state: {} -> {}", previous.label(), next.label());
        }
        self.state = next;

        self.facing.update_from_input(
            input.x_axis,
            tuning.input_deadzone,
            &self.flags,
            &mut self.bridge,
        );

        for event in self.scheduler.advance(dt) {
            self.apply_sequence_event(event, collision, body, tuning);
        }

        self.state
    }

    // -------------------------------------------------------------------------
    // States
    // -------------------------------------------------------------------------

    fn idle(
        &mut self,
        input: &InputSnapshot,
        collision: &CollisionSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
    ) -> PlayerState {
        if !collision.on_wall || collision.on_ground {
            self.flags.wall_slide = false;
        }

        if collision.on_ground && !self.ground_touch {
            self.touch_ground();
            self.ground_touch = true;
        }

        self.refresh_grounded(collision);

        if has_horizontal_input(input, tuning) {
            return PlayerState::Moving;
        }
        if input.jump_pressed && collision.on_ground {
            self.ground_jump(body, tuning);
            return PlayerState::Jumping;
        }
        if collision.on_wall {
            return PlayerState::OnWall;
        }
        PlayerState::Idle
    }

    fn moving(
        &mut self,
        input: &InputSnapshot,
        collision: &CollisionSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
        dt: f32,
    ) -> PlayerState {
        self.refresh_grounded(collision);

        motion::walk(input.axis(), &self.flags, body, tuning, dt);
        self.bridge
            .set_horizontal_movement(input.x_axis, input.y_axis, body.velocity.y);

        if input.x_axis.abs() < tuning.input_deadzone {
            return PlayerState::Idle;
        }
        if self.try_dash(input, body, tuning) {
            return PlayerState::Dashing;
        }
        if input.jump_pressed && collision.on_ground {
            self.ground_jump(body, tuning);
            return PlayerState::Jumping;
        }
        PlayerState::Moving
    }

    fn climbing(
        &mut self,
        input: &InputSnapshot,
        collision: &CollisionSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
    ) -> PlayerState {
        body.gravity_scale = 0.0;

        if input.x_axis.abs() > tuning.climb_deadzone {
            body.velocity.x = 0.0;
        }

        let modifier = if input.y_axis > 0.0 {
            tuning.climb_up_multiplier
        } else {
            1.0
        };
        body.velocity.y = input.y_axis * tuning.speed * modifier;

        if !collision.on_wall || !input.grab_held {
            self.flags.wall_grab = false;
            self.flags.wall_slide = false;
            body.gravity_scale = tuning.base_gravity;

            return if collision.on_wall {
                PlayerState::OnWall
            } else {
                PlayerState::Idle
            };
        }
        PlayerState::Climbing
    }

    fn on_wall(
        &mut self,
        input: &InputSnapshot,
        collision: &CollisionSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
    ) -> PlayerState {
        if collision.on_wall
            && !collision.on_ground
            && pushing_into_wall(input, collision)
            && !self.flags.wall_grab
        {
            self.flags.wall_slide = true;
            motion::wall_slide(
                collision,
                &self.flags,
                &mut self.facing,
                body,
                tuning,
                &mut self.bridge,
            );
        }

        if has_horizontal_input(input, tuning) {
            return PlayerState::Moving;
        }
        if collision.on_wall && input.grab_held && self.flags.can_move {
            if self.facing.side() != collision.wall_side {
                let away = self.facing.side().opposite();
                self.facing.show(away, &mut self.bridge);
            }
            self.flags.wall_grab = true;
            self.flags.wall_slide = false;
            return PlayerState::Climbing;
        }
        if input.jump_pressed && collision.on_ground {
            self.ground_jump(body, tuning);
            return PlayerState::Jumping;
        }
        if input.jump_pressed && collision.on_wall && !collision.on_ground {
            self.bridge.set_trigger(AnimTrigger::Jump);
            motion::wall_jump(
                collision,
                &mut self.flags,
                &mut self.facing,
                &mut self.scheduler,
                body,
                tuning,
                &mut self.bridge,
            );
            return PlayerState::WallJumping;
        }
        PlayerState::OnWall
    }

    /// Shared by Jumping and WallJumping: both leave the ground and fall once
    /// the upward velocity is spent.
    fn rising(
        &mut self,
        current: PlayerState,
        input: &InputSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
    ) -> PlayerState {
        self.ground_touch = false;

        if self.try_dash(input, body, tuning) {
            return PlayerState::Dashing;
        }
        if body.velocity.y <= tuning.fall_threshold {
            return PlayerState::Falling;
        }
        current
    }

    fn falling(
        &mut self,
        input: &InputSnapshot,
        collision: &CollisionSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
    ) -> PlayerState {
        if collision.on_ground && !self.ground_touch {
            return PlayerState::Idle;
        }
        if collision.on_wall {
            return PlayerState::OnWall;
        }
        if has_horizontal_input(input, tuning) {
            return PlayerState::Moving;
        }
        if self.try_dash(input, body, tuning) {
            return PlayerState::Dashing;
        }
        PlayerState::Falling
    }

    fn dashing(&mut self, collision: &CollisionSnapshot) -> PlayerState {
        if !collision.on_ground {
            PlayerState::Jumping
        } else {
            PlayerState::Moving
        }
    }

    // -------------------------------------------------------------------------
    // Shared actions
    // -------------------------------------------------------------------------

    /// Landing reset, run once per grounded period.
    fn touch_ground(&mut self) {
        self.cooldown.has_dashed = false;
        self.flags.is_dashing = false;
        self.facing.resync_from_sprite();
    }

    fn refresh_grounded(&mut self, collision: &CollisionSnapshot) {
        if collision.on_ground && !self.flags.is_dashing {
            self.flags.wall_jumped = false;
            self.set_jump_assist(true);
        }
    }

    fn ground_jump(&mut self, body: &mut PhysicsState, tuning: &MovementTuning) {
        self.bridge.set_trigger(AnimTrigger::Jump);
        motion::jump(Vec2::Y, body, tuning);
    }

    fn try_dash(
        &mut self,
        input: &InputSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
    ) -> bool {
        if !input.dash_pressed || !self.cooldown.is_ready() || !input.has_raw_direction() {
            return false;
        }

        motion::dash(
            input.raw(),
            &mut self.flags,
            &mut self.cooldown,
            &mut self.scheduler,
            body,
            tuning,
            &mut self.bridge,
        );
        // The sequence switched the assist off through the bridge
        self.jump_assist = Some(false);
        true
    }

    fn set_jump_assist(&mut self, enabled: bool) {
        if self.jump_assist != Some(enabled) {
            self.jump_assist = Some(enabled);
            self.bridge.set_enabled(enabled);
        }
    }

    fn apply_sequence_event(
        &mut self,
        event: SequenceEvent,
        collision: &CollisionSnapshot,
        body: &mut PhysicsState,
        tuning: &MovementTuning,
    ) {
        match event {
            SequenceEvent::Progress {
                action: TimedAction::DragRamp,
                fraction,
            } => {
                body.drag = ramp_drag(tuning.dash_drag, fraction);
            }
            SequenceEvent::Progress { .. } => {}
            SequenceEvent::Completed {
                action: TimedAction::Dash,
            } => {
                // A newer dash still owns gravity and the dash flags
                if self.scheduler.is_pending(TimedAction::Dash) {
                    return;
                }
                body.gravity_scale = tuning.base_gravity;
                self.set_jump_assist(true);
                self.flags.wall_jumped = false;
                self.flags.is_dashing = false;
                self.cooldown.has_dashed = false;
            }
            SequenceEvent::Completed {
                action: TimedAction::GroundDash,
            } => {
                if collision.on_ground {
                    self.cooldown.has_dashed = false;
                }
            }
            SequenceEvent::Completed {
                action: TimedAction::DragRamp,
            } => {
                if !self.scheduler.is_pending(TimedAction::DragRamp) {
                    body.drag = 0.0;
                }
            }
            SequenceEvent::Completed {
                action: TimedAction::MovementDisable,
            } => {
                self.flags.can_move = true;
            }
        }
    }
}

fn has_horizontal_input(input: &InputSnapshot, tuning: &MovementTuning) -> bool {
    input.x_axis.abs() > tuning.input_deadzone
}

fn pushing_into_wall(input: &InputSnapshot, collision: &CollisionSnapshot) -> bool {
    (input.x_axis > 0.0 && collision.on_right_wall) || (input.x_axis < 0.0 && collision.on_left_wall)
}
