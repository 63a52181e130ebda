use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::boundingbox::BoundingBox;

/// Axis-aligned collider sized by an entity's logical footprint.
///
/// The box is centered on the entity position plus `offset`. Movers use it
/// only to shortlist floor regions; the [`CircleCollider`] is authoritative
/// for fine containment.
///
/// [`CircleCollider`]: crate::components::circlecollider::CircleCollider
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space box for an entity at `position`.
    /// Handles negative size by normalizing to proper min/max.
    pub fn bounding_box(&self, position: Vec2) -> BoundingBox {
        BoundingBox::from_center_size(position + self.offset, self.size)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        self.bounding_box(position)
            .collides_box(&other.bounding_box(other_position))
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        self.bounding_box(position).is_point_inside(point)
    }
}
