//! Axis-aligned bounding box in world space.
//!
//! A [`BoundingBox`] is an immutable snapshot: owners rebuild it whenever their
//! geometry or position changes. All intervals are closed, so boxes that only
//! share an edge still collide.

use glam::Vec2;

use crate::components::boundingcircle::BoundingCircle;

/// Rectangle given by its `min` (bottom-left) and `max` (top-right) corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Create a box from already ordered corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y,
            "BoundingBox min {min:?} must not exceed max {max:?}"
        );
        Self { min, max }
    }

    /// Create a box from two opposite corners in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a box of `size` centered on `center`. Negative sizes are normalized.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// A copy grown by `amount` on every side.
    pub fn expanded(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }

    /// Overlap test against another box. Touching edges count.
    pub fn collides_box(&self, other: &BoundingBox) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }

    /// Overlap test against a circle.
    ///
    /// The circle center is clamped into the box to find the closest point,
    /// then compared by squared distance against the squared radius.
    pub fn collides_circle(&self, circle: &BoundingCircle) -> bool {
        let closest = circle.center.clamp(self.min, self.max);
        circle.center.distance_squared(closest) <= circle.radius * circle.radius
    }

    /// Closed-interval point containment.
    pub fn is_point_inside(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}
