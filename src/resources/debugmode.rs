//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that bounding shapes should be
//! reported every step. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, systems may print extra diagnostics.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
