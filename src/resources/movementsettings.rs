//! Tunables for the movement resolver.

use bevy_ecs::prelude::Resource;

/// Default number of samples per axis in the fine containment check.
pub const DEFAULT_SAMPLE_RESOLUTION: usize = 8;

/// Settings read by [`crate::systems::movement::can_move_by`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementSettings {
    /// Samples per axis over the mover circle's enclosing square (N in an N x N grid).
    pub sample_resolution: usize,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            sample_resolution: DEFAULT_SAMPLE_RESOLUTION,
        }
    }
}

impl MovementSettings {
    /// Settings with `sample_resolution` samples per axis, at least one.
    pub fn with_sample_resolution(sample_resolution: usize) -> Self {
        Self {
            sample_resolution: sample_resolution.max(1),
        }
    }
}
