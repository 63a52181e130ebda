//! Bounding circle in world space.

use glam::Vec2;

use crate::components::boundingbox::BoundingBox;

/// Circle given by its center and a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingCircle {
    pub center: Vec2,
    pub radius: f32,
}

impl BoundingCircle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "BoundingCircle radius must be >= 0, got {radius}");
        Self { center, radius }
    }

    /// Smallest axis-aligned box enclosing the circle.
    pub fn enclosing_box(&self) -> BoundingBox {
        BoundingBox {
            min: self.center - Vec2::splat(self.radius),
            max: self.center + Vec2::splat(self.radius),
        }
    }

    pub fn collides_circle(&self, other: &BoundingCircle) -> bool {
        let radius_sum = self.radius + other.radius;
        self.center.distance_squared(other.center) <= radius_sum * radius_sum
    }

    pub fn collides_box(&self, bounding_box: &BoundingBox) -> bool {
        bounding_box.collides_circle(self)
    }

    /// True if the circle's extent (center +/- radius on both axes) lies within the box.
    pub fn is_fully_inside_box(&self, bounding_box: &BoundingBox) -> bool {
        self.center.x - self.radius >= bounding_box.min.x
            && self.center.x + self.radius <= bounding_box.max.x
            && self.center.y - self.radius >= bounding_box.min.y
            && self.center.y + self.radius <= bounding_box.max.y
    }

    pub fn is_point_inside(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circles_touching_collide() {
        let a = BoundingCircle::new(Vec2::ZERO, 1.0);
        let b = BoundingCircle::new(Vec2::new(2.0, 0.0), 1.0);
        let c = BoundingCircle::new(Vec2::new(2.1, 0.0), 1.0);
        assert!(a.collides_circle(&b));
        assert!(!a.collides_circle(&c));
    }

    #[test]
    fn fully_inside_box() {
        let b = BoundingBox::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        assert!(BoundingCircle::new(Vec2::new(1.0, 1.0), 1.0).is_fully_inside_box(&b));
        assert!(!BoundingCircle::new(Vec2::new(1.1, 1.0), 1.0).is_fully_inside_box(&b));
        assert!(!BoundingCircle::new(Vec2::new(5.0, 5.0), 0.5).is_fully_inside_box(&b));
    }

    #[test]
    fn fully_inside_implies_center_inside_and_collision() {
        let b = BoundingBox::new(Vec2::new(-3.0, 1.0), Vec2::new(3.0, 4.0));
        let c = BoundingCircle::new(Vec2::new(0.5, 2.5), 1.2);
        assert!(c.is_fully_inside_box(&b));
        assert!(b.is_point_inside(c.center));
        assert!(b.collides_circle(&c));
        assert!(c.collides_box(&b));
    }

    #[test]
    fn point_inside_circle() {
        let c = BoundingCircle::new(Vec2::new(1.0, 1.0), 0.5);
        assert!(c.is_point_inside(Vec2::new(1.5, 1.0)));
        assert!(c.is_point_inside(Vec2::new(1.2, 1.2)));
        assert!(!c.is_point_inside(Vec2::new(1.4, 1.4)));
    }

    #[test]
    fn enclosing_box_spans_diameter() {
        let c = BoundingCircle::new(Vec2::new(1.0, -1.0), 0.5);
        let b = c.enclosing_box();
        assert_eq!(b.min, Vec2::new(0.5, -1.5));
        assert_eq!(b.max, Vec2::new(1.5, -0.5));
    }
}
