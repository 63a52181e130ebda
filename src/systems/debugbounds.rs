//! Bounding shape diagnostics.
//!
//! Stand-in for a debug overlay: while [`DebugMode`](crate::resources::debugmode::DebugMode)
//! is present, the world-space bounds of the player, torches and star are
//! logged every step at `debug` level.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::player::Player;
use crate::components::star::Star;
use crate::components::torch::{Torch, TorchFlame};

pub fn log_debug_bounds(
    players: Query<(Entity, &GlobalTransform2D, &BoxCollider, &CircleCollider), With<Player>>,
    torches: Query<(Entity, &GlobalTransform2D, &Torch, Option<&TorchFlame>)>,
    stars: Query<(Entity, &GlobalTransform2D, &CircleCollider), With<Star>>,
) {
    for (entity, global, box_collider, circle) in players.iter() {
        debug!(
            "player {:?} at {:?} rot {:.3} box {:?} circle {:?}",
            entity,
            global.position,
            global.rotation,
            box_collider.bounding_box(global.position),
            circle.bounding_circle(global.position)
        );
    }
    for (entity, global, torch, flame) in torches.iter() {
        debug!(
            "torch {:?} box {:?} flame {:?}",
            entity,
            torch.bounding_box(global.position),
            flame.map(|f| f.position)
        );
    }
    for (entity, global, circle) in stars.iter() {
        debug!("star {:?} circle {:?}", entity, circle.bounding_circle(global.position));
    }
}
