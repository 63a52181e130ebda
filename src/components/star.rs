use bevy_ecs::prelude::Component;

/// The level goal. Touching it with the player's circle finishes the level.
///
/// Uses a [`CircleCollider`](crate::components::circlecollider::CircleCollider)
/// for its extent.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Star;
