//! Computed world-space transform for entities in a hierarchy.
//!
//! [`Transform2D`](super::transform2d::Transform2D) stores values relative to
//! its parent. The [`propagate_transforms`](crate::systems::transform2d::propagate_transforms)
//! system composes the ancestor chain once per step and stores the result here,
//! so readers that only need world values do not have to walk the hierarchy.

use bevy_ecs::prelude::*;
use glam::{Mat3, Vec2};

use crate::systems::transform2d::{
    TransformLookup, position_in_world, rotation_in_world, world_matrix,
};

/// Computed world-space transform for hierarchical entities.
///
/// For root entities it mirrors the local values. For child entities it holds
/// the composition of the full ancestor chain.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct GlobalTransform2D {
    /// Full world matrix.
    pub matrix: Mat3,
    /// World-space position.
    pub position: Vec2,
    /// World-space rotation in radians (clockwise).
    pub rotation: f32,
    /// World-space scale.
    pub scale: Vec2,
}

impl Default for GlobalTransform2D {
    fn default() -> Self {
        Self {
            matrix: Mat3::IDENTITY,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl GlobalTransform2D {
    /// Snapshot the world transform of `entity`, or `None` if it has no transform.
    pub fn compute<L: TransformLookup + ?Sized>(lookup: &L, entity: Entity) -> Option<Self> {
        let matrix = world_matrix(lookup, entity)?;
        Some(Self {
            matrix,
            position: position_in_world(lookup, entity)?,
            rotation: rotation_in_world(lookup, entity)?,
            scale: Vec2::new(
                matrix.x_axis.truncate().length(),
                matrix.y_axis.truncate().length(),
            ),
        })
    }
}
