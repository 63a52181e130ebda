//! Reaching the star.
use bevy_ecs::prelude::*;

use crate::components::circlecollider::CircleCollider;
use crate::components::player::Player;
use crate::components::star::Star;
use crate::components::transform2d::Transform2D;
use crate::events::level::LevelFinishedEvent;
use crate::systems::transform2d::position_in_world;

/// Trigger [`LevelFinishedEvent`] when a controllable player touches a star.
pub fn goal_system(
    players: Query<(Entity, &Player, &CircleCollider)>,
    stars: Query<(Entity, &CircleCollider), With<Star>>,
    transforms: Query<&Transform2D>,
    mut commands: Commands,
) {
    for (player, player_state, player_collider) in players.iter() {
        if !player_state.controllable {
            continue;
        }
        let Some(player_pos) = position_in_world(&transforms, player) else {
            continue;
        };
        let player_circle = player_collider.bounding_circle(player_pos);
        for (star, star_collider) in stars.iter() {
            let Some(star_pos) = position_in_world(&transforms, star) else {
                continue;
            };
            if player_circle.collides_circle(&star_collider.bounding_circle(star_pos)) {
                commands.trigger(LevelFinishedEvent { player, star });
                return;
            }
        }
    }
}
