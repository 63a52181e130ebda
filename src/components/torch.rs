//! Torch that the player can pick up and drop.
//!
//! While held, the torch's [`Transform2D`] has the player as its parent, so it
//! follows the player's position and aim. The flame position is derived from
//! that transform and cached in [`TorchFlame`], keyed by the transform's
//! change id.
//!
//! [`Transform2D`]: crate::components::transform2d::Transform2D

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::boundingbox::BoundingBox;

/// Size of the torch's base, in world units.
pub const TORCH_BASE_SIZE: Vec2 = Vec2::new(0.15, 0.6);
/// Size of the torch's fire, in world units.
pub const TORCH_FIRE_SIZE: Vec2 = Vec2::new(TORCH_BASE_SIZE.x * 1.5, TORCH_BASE_SIZE.y * 1.2);
/// Local offset of a held torch, in the player's space.
pub const TORCH_HOLD_OFFSET: Vec2 = Vec2::new(0.45, 0.0);

/// Torch geometry. The entity position is the center of the base.
#[derive(Component, Debug, Clone, Copy)]
pub struct Torch {
    pub base_size: Vec2,
    pub fire_size: Vec2,
}

impl Default for Torch {
    fn default() -> Self {
        Self {
            base_size: TORCH_BASE_SIZE,
            fire_size: TORCH_FIRE_SIZE,
        }
    }
}

impl Torch {
    /// Box covering the base and the fire above it, for a torch at `position`.
    pub fn bounding_box(&self, position: Vec2) -> BoundingBox {
        let half_base = self.base_size * 0.5;
        BoundingBox::new(
            position - half_base,
            position + half_base + Vec2::new(0.0, self.fire_size.y),
        )
    }

    /// Center of the fire relative to the center of the base, in the torch's local space.
    pub fn fire_offset(&self) -> Vec2 {
        Vec2::new(0.0, self.base_size.y * 0.5 + self.fire_size.y * 0.5)
    }
}

/// Cached world-space center of a torch's fire.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TorchFlame {
    /// Fire center in world space, valid as of `seen_change_id`.
    pub position: Vec2,
    /// Transform change id the position was derived from. `None` until first derived.
    pub seen_change_id: Option<u64>,
    /// How many times the position has been re-derived.
    pub refresh_count: u32,
}
