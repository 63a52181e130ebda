//! Input-controlled movement components.
//!
//! [`InputControlled`] describes how far an entity tries to move per step for
//! each held direction. The [`Player`](crate::components::player::Player)
//! movement system reads it together with the shared
//! [`InputState`](crate::resources::input::InputState) and asks the movement
//! resolver before applying each displacement.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Per-step displacement requested when each directional input is held.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Displacement when moving up.
    pub up_step: Vec2,
    /// Displacement when moving down.
    pub down_step: Vec2,
    /// Displacement when moving left.
    pub left_step: Vec2,
    /// Displacement when moving right.
    pub right_step: Vec2,
}

impl InputControlled {
    /// Create an InputControlled component with explicit steps.
    pub fn new(up: Vec2, down: Vec2, left: Vec2, right: Vec2) -> Self {
        Self {
            up_step: up,
            down_step: down,
            left_step: left,
            right_step: right,
        }
    }

    /// Same `speed` in the four axis directions (y up).
    pub fn with_speed(speed: f32) -> Self {
        Self::new(
            Vec2::new(0.0, speed),
            Vec2::new(0.0, -speed),
            Vec2::new(-speed, 0.0),
            Vec2::new(speed, 0.0),
        )
    }
}
