//! Level layout description.
//!
//! A [`LevelLayout`] lists the floor and wall rectangles by their corners plus
//! the spawn points of the player, torches and the star. Layouts come either
//! from the built-in [`LevelLayout::gleam_house`] or from a JSON file:
//!
//! ```json
//! {
//!   "floors": [ { "bottom_left": [0, 0], "top_right": [10, 8] } ],
//!   "walls":  [ { "bottom_left": [4, 2], "top_right": [5, 8] } ],
//!   "player_start": [1.5, 1.5],
//!   "torches": [[7.0, 6.0]],
//!   "star": [8.5, 6.5]
//! }
//! ```
//!
//! Layouts are validated before any [`Region`] is built, so a bad file is
//! reported as an error instead of tripping the region constructors' asserts.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::regioncatalog::{Region, RegionCatalog};

/// Radius of the star's collision circle when the layout does not give one.
pub const DEFAULT_STAR_RADIUS: f32 = 0.35;

fn default_star_radius() -> f32 {
    DEFAULT_STAR_RADIUS
}

/// Corner pair of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionCorners {
    pub bottom_left: Vec2,
    pub top_right: Vec2,
}

impl RegionCorners {
    pub fn new(bottom_left: Vec2, top_right: Vec2) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    fn has_positive_size(&self) -> bool {
        let size = self.top_right - self.bottom_left;
        size.x > 0.0 && size.y > 0.0
    }
}

/// Everything needed to set up a level.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub floors: Vec<RegionCorners>,
    #[serde(default)]
    pub walls: Vec<RegionCorners>,
    pub player_start: Vec2,
    #[serde(default)]
    pub torches: Vec<Vec2>,
    pub star: Vec2,
    #[serde(default = "default_star_radius")]
    pub star_radius: f32,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::gleam_house()
    }
}

impl LevelLayout {
    /// The built-in house: a hall, a corridor and a back room with the star.
    pub fn gleam_house() -> Self {
        let corners = |x0: f32, y0: f32, x1: f32, y1: f32| {
            RegionCorners::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
        };
        Self {
            floors: vec![
                corners(0.0, 0.0, 10.0, 8.0),
                corners(10.0, 3.0, 16.0, 5.0),
                corners(16.0, 0.0, 24.0, 8.0),
            ],
            walls: vec![corners(4.0, 2.0, 5.0, 8.0), corners(19.0, 0.0, 20.0, 5.0)],
            player_start: Vec2::new(1.5, 1.0),
            torches: vec![Vec2::new(7.0, 6.0)],
            star: Vec2::new(22.5, 6.5),
            star_radius: DEFAULT_STAR_RADIUS,
        }
    }

    /// Parse a layout from JSON text and validate it.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let layout: LevelLayout =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse level JSON: {}", e))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse and validate a layout file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level file {:?}: {}", path, e))?;
        let layout = Self::from_json(&text)?;
        info!(
            "Loaded level {:?}: {} floors, {} walls, {} torches",
            path,
            layout.floors.len(),
            layout.walls.len(),
            layout.torches.len()
        );
        Ok(layout)
    }

    /// Check the invariants the region constructors assert on.
    pub fn validate(&self) -> Result<(), String> {
        if self.floors.is_empty() {
            return Err("Level has no floor regions".to_string());
        }
        for (i, floor) in self.floors.iter().enumerate() {
            if !floor.has_positive_size() {
                return Err(format!("Floor {} has non-positive size: {:?}", i, floor));
            }
        }
        for (i, wall) in self.walls.iter().enumerate() {
            if !wall.has_positive_size() {
                return Err(format!("Wall {} has non-positive size: {:?}", i, wall));
            }
        }
        if !(self.star_radius >= 0.0) {
            return Err(format!("Star radius must be >= 0, got {}", self.star_radius));
        }
        Ok(())
    }

    /// Validate and build the region catalog: floors first, then walls.
    pub fn build_catalog(&self) -> Result<RegionCatalog, String> {
        self.validate()?;
        let floors = self
            .floors
            .iter()
            .map(|c| Region::floor(c.bottom_left, c.top_right));
        let walls = self
            .walls
            .iter()
            .map(|c| Region::wall(c.bottom_left, c.top_right));
        Ok(floors.chain(walls).collect())
    }
}
