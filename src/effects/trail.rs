//! Effects domain: fading afterimages behind a dashing player.

use bevy::color::Alpha;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::GhostTrailEvent;

const GHOST_COUNT: u32 = 4;
const GHOST_INTERVAL: f32 = 0.05;
const GHOST_FADE: f32 = 0.3;
const GHOST_ALPHA: f32 = 0.6;
const GHOST_TINT: Color = Color::srgb(0.4, 0.95, 0.95);

/// Drops afterimages of its entity at a fixed interval.
#[derive(Component, Debug)]
pub struct GhostTrail {
    pub remaining: u32,
    pub spawn_timer: Timer,
}

impl Default for GhostTrail {
    fn default() -> Self {
        Self {
            remaining: GHOST_COUNT,
            spawn_timer: Timer::from_seconds(GHOST_INTERVAL, TimerMode::Repeating),
        }
    }
}

#[derive(Component, Debug)]
pub struct Ghost {
    pub fade: Timer,
}

pub(crate) fn start_ghost_trail(mut commands: Commands, mut events: MessageReader<GhostTrailEvent>) {
    for event in events.read() {
        if let Ok(mut entity) = commands.get_entity(event.entity) {
            entity.insert(GhostTrail::default());
        }
    }
}

pub(crate) fn spawn_ghosts(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &Transform, &Sprite, &mut GhostTrail)>,
) {
    for (entity, transform, sprite, mut trail) in &mut query {
        trail.spawn_timer.tick(time.delta());
        if !trail.spawn_timer.just_finished() {
            continue;
        }

        commands.spawn((
            Ghost {
                fade: Timer::from_seconds(GHOST_FADE, TimerMode::Once),
            },
            Sprite {
                color: GHOST_TINT.with_alpha(GHOST_ALPHA),
                custom_size: sprite.custom_size,
                flip_x: sprite.flip_x,
                ..default()
            },
            // Behind the player
            Transform::from_translation(transform.translation.with_z(transform.translation.z - 0.1)),
        ));

        trail.remaining = trail.remaining.saturating_sub(1);
        if trail.remaining == 0 {
            commands.entity(entity).remove::<GhostTrail>();
        }
    }
}

pub(crate) fn fade_ghosts(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Ghost, &mut Sprite)>,
) {
    for (entity, mut ghost, mut sprite) in &mut query {
        ghost.fade.tick(time.delta());
        if ghost.fade.remaining_secs() == 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        sprite
            .color
            .set_alpha(GHOST_ALPHA * (1.0 - ghost.fade.fraction()));
    }
}
