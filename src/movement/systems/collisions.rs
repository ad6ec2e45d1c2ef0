//! Movement domain: ground and wall contact classification.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CollisionSnapshot, GameLayer, PLAYER_SIZE, Player};

/// How far past the collider edge the probes reach, in world units.
const PROBE_DISTANCE: f32 = 0.1;

pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut CollisionSnapshot), With<Player>>,
) {
    // Filter to only hit the relevant layer (not the player itself, sensors, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let wall_filter = SpatialQueryFilter::from_mask([GameLayer::Wall, GameLayer::Ground]);

    for (transform, collider, mut snapshot) in &mut query {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => PLAYER_SIZE * 0.5,
        };
        let origin = transform.translation.truncate();

        // Cast a short ray downward from the player's feet
        let feet = origin - Vec2::new(0.0, half_extents.y);
        let on_ground = spatial_query
            .cast_ray(feet, Dir2::NEG_Y, PROBE_DISTANCE, true, &ground_filter)
            .is_some();

        let side_reach = half_extents.x + PROBE_DISTANCE;
        let on_left_wall = spatial_query
            .cast_ray(origin, Dir2::NEG_X, side_reach, true, &wall_filter)
            .is_some();
        let on_right_wall = spatial_query
            .cast_ray(origin, Dir2::X, side_reach, true, &wall_filter)
            .is_some();

        let next = CollisionSnapshot::from_contacts(on_ground, on_left_wall, on_right_wall);

        if next.on_ground != snapshot.on_ground {
            debug!("Ground contact: on_ground={}", next.on_ground);
        }
        if next.on_wall != snapshot.on_wall {
            debug!(
                "Wall contact: left={}, right={}",
                next.on_left_wall, next.on_right_wall
            );
        }

        *snapshot = next;
    }
}
