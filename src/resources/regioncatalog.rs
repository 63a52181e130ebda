//! Ordered catalog of floor and wall regions.
//!
//! Regions are axis-aligned rectangles built once when a level is set up.
//! Floors are walkable, walls block. The catalog is read-only while the game
//! runs, so every system can share it through `Res<RegionCatalog>`.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::boundingbox::BoundingBox;

/// Thickness of a wall's border; a wall's bounding box grows by it on every side.
pub const WALL_BORDER_THICKNESS: f32 = 0.1;

/// Whether a region can be walked on or blocks movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Floor,
    Wall,
}

/// One floor piece or wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    kind: RegionKind,
    bounding_box: BoundingBox,
}

impl Region {
    /// Floor piece spanning `bottom_left` to `top_right`.
    ///
    /// # Panics
    ///
    /// If the region has zero or negative size on either axis.
    pub fn floor(bottom_left: Vec2, top_right: Vec2) -> Self {
        assert_positive_size(bottom_left, top_right);
        Self {
            kind: RegionKind::Floor,
            bounding_box: BoundingBox::new(bottom_left, top_right),
        }
    }

    /// Wall spanning `bottom_left` to `top_right`, including its border.
    ///
    /// # Panics
    ///
    /// If the region has zero or negative size on either axis.
    pub fn wall(bottom_left: Vec2, top_right: Vec2) -> Self {
        assert_positive_size(bottom_left, top_right);
        Self {
            kind: RegionKind::Wall,
            bounding_box: BoundingBox::new(bottom_left, top_right).expanded(WALL_BORDER_THICKNESS),
        }
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn is_walkable(&self) -> bool {
        self.kind == RegionKind::Floor
    }

    /// World-space footprint of the region.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }
}

fn assert_positive_size(bottom_left: Vec2, top_right: Vec2) {
    let size = top_right - bottom_left;
    assert!(
        size.x > 0.0 && size.y > 0.0,
        "region {bottom_left:?}..{top_right:?} must have positive size"
    );
}

/// Ordered list of regions.
#[derive(Resource, Debug, Clone, Default)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Bounding box of region `index`, if it exists.
    pub fn bounding_box(&self, index: usize) -> Option<BoundingBox> {
        self.regions.get(index).map(Region::bounding_box)
    }

    /// Walkable regions in catalog order.
    pub fn floors(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(|r| r.kind == RegionKind::Floor)
    }

    /// Blocking regions in catalog order.
    pub fn walls(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(|r| r.kind == RegionKind::Wall)
    }
}

impl FromIterator<Region> for RegionCatalog {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}
