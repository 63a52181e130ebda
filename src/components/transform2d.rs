//! Local 2D transform for entities that may be attached to a parent.
//!
//! A [`Transform2D`] stores position, rotation (radians) and scale relative to
//! its parent's space, or to world space when it has no parent. The parent is
//! a plain [`Entity`] handle: the transform never owns it, and because entity
//! handles are generation-checked a despawned parent simply fails to resolve
//! instead of being dereferenced.
//!
//! World-space queries need the whole ancestor chain and therefore live in
//! [`crate::systems::transform2d`].
//!
//! Positive rotation turns clockwise in the y-up world, which is the same
//! convention the player's aim uses (`atan2(dx, dy)`).

use bevy_ecs::prelude::{Component, Entity};
use glam::{Mat3, Vec2};

/// Hierarchical 2D transform with a lazily cached local matrix and a change id.
///
/// Every mutation marks the local matrix dirty and bumps the local change
/// counter. The counter is also bumped lazily when an ancestor is observed to
/// have changed, see [`crate::systems::transform2d::change_id`].
#[derive(Component, Clone, Debug)]
pub struct Transform2D {
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    parent: Option<Entity>,
    local_matrix: Mat3,
    dirty: bool,
    change_id: u64,
    cached_parent_change_id: u64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            parent: None,
            local_matrix: Mat3::IDENTITY,
            dirty: false,
            change_id: 0,
            cached_parent_change_id: 0,
        }
    }
}

impl Transform2D {
    /// Identity transform: origin, no rotation, unit scale, no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity transform placed at `position`.
    pub fn from_position(position: Vec2) -> Self {
        let mut transform = Self::new();
        transform.set_position(position);
        transform
    }

    /// Builder: attach to `parent` on creation.
    pub fn with_parent(mut self, parent: Entity) -> Self {
        self.set_parent(Some(parent));
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Local rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn parent(&self) -> Option<Entity> {
        self.parent
    }

    /// Raw local change counter, without pulling ancestor changes.
    pub fn local_change_id(&self) -> u64 {
        self.change_id
    }

    /// Whether the cached local matrix needs recomputing.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.mark_changed();
    }

    /// Set local rotation in radians.
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.mark_changed();
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.mark_changed();
    }

    /// Translate the local position by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
        self.mark_changed();
    }

    /// Add `delta` radians to the local rotation.
    pub fn rotate(&mut self, delta: f32) {
        self.rotation += delta;
        self.mark_changed();
    }

    /// Multiply the local scale component-wise by `factor`.
    pub fn scale_by(&mut self, factor: Vec2) {
        self.scale *= factor;
        self.mark_changed();
    }

    /// Replace the parent handle. `None` detaches.
    ///
    /// Cycles are not checked here. The caller must never make a transform
    /// its own ancestor.
    pub fn set_parent(&mut self, parent: Option<Entity>) {
        self.parent = parent;
        self.cached_parent_change_id = 0;
        self.change_id += 1;
    }

    /// Local matrix (`Translation * Rotation * Scale`), recomputed if dirty.
    pub fn local_matrix(&mut self) -> Mat3 {
        if self.dirty {
            self.local_matrix = self.compose();
            self.dirty = false;
        }
        self.local_matrix
    }

    /// Local matrix without touching the cache.
    ///
    /// Returns the cached value when clean and a fresh composition otherwise.
    /// Used by read-only hierarchy walks.
    pub fn computed_local_matrix(&self) -> Mat3 {
        if self.dirty {
            self.compose()
        } else {
            self.local_matrix
        }
    }

    /// Whether `parent_change_id` is newer than the last one this transform saw.
    pub(crate) fn parent_change_pending(&self, parent_change_id: u64) -> bool {
        parent_change_id > self.cached_parent_change_id
    }

    /// Record an observed parent change id. Returns true if the local counter was bumped.
    pub(crate) fn observe_parent_change_id(&mut self, parent_change_id: u64) -> bool {
        if parent_change_id > self.cached_parent_change_id {
            self.cached_parent_change_id = parent_change_id;
            self.change_id += 1;
            true
        } else {
            false
        }
    }

    fn mark_changed(&mut self) {
        self.dirty = true;
        self.change_id += 1;
    }

    fn compose(&self) -> Mat3 {
        Mat3::from_translation(self.position)
            * rotation_matrix(self.rotation)
            * Mat3::from_scale(self.scale)
    }
}

/// Clockwise rotation by `radians`.
pub fn rotation_matrix(radians: f32) -> Mat3 {
    Mat3::from_angle(-radians)
}
