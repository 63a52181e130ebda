use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::boundingcircle::BoundingCircle;

/// Circular collider used for fine-grained containment and pickups.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct CircleCollider {
    pub radius: f32,
    pub offset: Vec2,
}

impl CircleCollider {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            offset: Vec2::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space circle for an entity at `position`.
    pub fn bounding_circle(&self, position: Vec2) -> BoundingCircle {
        BoundingCircle::new(position + self.offset, self.radius)
    }
}
