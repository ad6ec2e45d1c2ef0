//! Effects domain: camera shake.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::core::MainCamera;
use crate::movement::CameraShakeEvent;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraShakeTuning {
    pub duration: f32,
    /// Peak offset in world units.
    pub strength: f32,
    /// Direction changes per second.
    pub vibrato: f32,
    /// Maximum deviation in degrees from bouncing straight back.
    pub randomness: f32,
    pub seed: u64,
}

impl Default for CameraShakeTuning {
    fn default() -> Self {
        Self {
            duration: 0.2,
            strength: 0.5,
            vibrato: 14.0,
            randomness: 90.0,
            seed: 0x5eed,
        }
    }
}

/// A shake is a short chain of straight segments between random offsets that
/// shrink toward zero as the shake runs out.
#[derive(Resource, Debug)]
pub struct CameraShake {
    rng: ChaCha8Rng,
    remaining_steps: u32,
    step_duration: f32,
    step_elapsed: f32,
    elapsed: f32,
    duration: f32,
    strength: f32,
    randomness: f32,
    angle: f32,
    from: Vec2,
    to: Vec2,
    offset: Vec2,
}

impl CameraShake {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            remaining_steps: 0,
            step_duration: 0.0,
            step_elapsed: 0.0,
            elapsed: 0.0,
            duration: 0.0,
            strength: 0.0,
            randomness: 0.0,
            angle: 0.0,
            from: Vec2::ZERO,
            to: Vec2::ZERO,
            offset: Vec2::ZERO,
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining_steps > 0
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Start a fresh shake. A shake still running is dropped back to rest first.
    pub fn start(&mut self, tuning: &CameraShakeTuning) {
        let steps = (tuning.vibrato * tuning.duration).round().max(1.0) as u32;

        self.remaining_steps = steps;
        self.step_duration = tuning.duration / steps as f32;
        self.step_elapsed = 0.0;
        self.elapsed = 0.0;
        self.duration = tuning.duration;
        self.strength = tuning.strength;
        self.randomness = tuning.randomness;
        self.angle = self.rng.random_range(0.0..360.0);
        self.offset = Vec2::ZERO;
        self.from = Vec2::ZERO;
        self.to = self.next_target();
    }

    /// Advance by `dt` seconds and return the camera offset for this frame.
    pub fn update(&mut self, dt: f32) -> Vec2 {
        if !self.is_active() {
            self.offset = Vec2::ZERO;
            return self.offset;
        }

        self.elapsed += dt;
        self.step_elapsed += dt;

        while self.is_active() && self.step_elapsed >= self.step_duration {
            self.step_elapsed -= self.step_duration;
            self.remaining_steps -= 1;
            self.from = self.to;
            self.to = if self.remaining_steps <= 1 {
                Vec2::ZERO
            } else {
                self.next_target()
            };
        }

        self.offset = if self.is_active() {
            let t = (self.step_elapsed / self.step_duration).clamp(0.0, 1.0);
            self.from.lerp(self.to, t)
        } else {
            Vec2::ZERO
        };
        self.offset
    }

    fn next_target(&mut self) -> Vec2 {
        let deviation = if self.randomness > 0.0 {
            self.rng.random_range(-self.randomness..=self.randomness)
        } else {
            0.0
        };
        self.angle = (self.angle + 180.0 + deviation).rem_euclid(360.0);

        let fade = (1.0 - self.elapsed / self.duration.max(f32::EPSILON)).clamp(0.0, 1.0);
        Vec2::from_angle(self.angle.to_radians()) * self.strength * fade
    }
}

pub(crate) fn start_camera_shake(
    mut events: MessageReader<CameraShakeEvent>,
    tuning: Res<CameraShakeTuning>,
    mut shake: ResMut<CameraShake>,
) {
    // Several requests in one frame still produce one shake
    if events.read().count() > 0 {
        shake.start(&tuning);
    }
}

pub(crate) fn update_camera_shake(
    time: Res<Time>,
    mut shake: ResMut<CameraShake>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let offset = shake.update(time.delta_secs());
    for mut transform in &mut camera {
        transform.translation.x = offset.x;
        transform.translation.y = offset.y;
    }
}
