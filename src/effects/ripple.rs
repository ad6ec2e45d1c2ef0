//! Effects domain: expanding ring drawn in screen space where a dash starts.

use bevy::color::Alpha;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::MainCamera;
use crate::movement::DashEffectEvent;

const RIPPLE_DURATION: f32 = 0.35;
const RIPPLE_START_RADIUS: f32 = 8.0;
const RIPPLE_END_RADIUS: f32 = 64.0;
const RIPPLE_COLOR: Color = Color::srgb(0.7, 0.95, 1.0);

#[derive(Component, Debug)]
pub struct Ripple {
    /// Viewport position in logical pixels.
    pub center: Vec2,
    pub age: Timer,
}

impl Ripple {
    pub fn radius(&self) -> f32 {
        RIPPLE_START_RADIUS + (RIPPLE_END_RADIUS - RIPPLE_START_RADIUS) * self.age.fraction()
    }
}

pub(crate) fn spawn_dash_ripples(
    mut commands: Commands,
    mut events: MessageReader<DashEffectEvent>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Ok((camera, camera_transform)) = camera.single() else {
        events.clear();
        return;
    };

    for event in events.read() {
        let center = match camera.world_to_viewport(camera_transform, event.position.extend(0.0)) {
            Ok(center) => center,
            Err(err) => {
                debug!("Dash ripple off screen at {:?}: {:?}", event.position, err);
                continue;
            }
        };

        commands.spawn((
            Ripple {
                center,
                age: Timer::from_seconds(RIPPLE_DURATION, TimerMode::Once),
            },
            ripple_node(center, RIPPLE_START_RADIUS),
            BorderColor::all(RIPPLE_COLOR),
            ZIndex(100),
        ));
    }
}

pub(crate) fn update_ripples(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Ripple, &mut Node, &mut BorderColor)>,
) {
    for (entity, mut ripple, mut node, mut border) in &mut query {
        ripple.age.tick(time.delta());
        if ripple.age.remaining_secs() == 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        *node = ripple_node(ripple.center, ripple.radius());
        *border = BorderColor::all(RIPPLE_COLOR.with_alpha(1.0 - ripple.age.fraction()));
    }
}

fn ripple_node(center: Vec2, radius: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(center.x - radius),
        top: Val::Px(center.y - radius),
        width: Val::Px(radius * 2.0),
        height: Val::Px(radius * 2.0),
        border: UiRect::all(Val::Px(2.0)),
        ..default()
    }
}
