//! The player-controlled character.

use bevy_ecs::prelude::{Component, Entity};

/// Marks the mover that the player steers.
///
/// Movement also needs [`Transform2D`], [`BoxCollider`] (logical size),
/// [`CircleCollider`] (collision radius) and
/// [`InputControlled`](crate::components::inputcontrolled::InputControlled).
///
/// [`Transform2D`]: crate::components::transform2d::Transform2D
/// [`BoxCollider`]: crate::components::boxcollider::BoxCollider
/// [`CircleCollider`]: crate::components::circlecollider::CircleCollider
#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    /// Whether input currently moves the player.
    pub controllable: bool,
    /// Torch currently attached to the player, if any.
    pub held_torch: Option<Entity>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            controllable: true,
            held_torch: None,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_holding_torch(&self) -> bool {
        self.held_torch.is_some()
    }
}
