//! Progress of the end-of-level sequence.

use bevy_ecs::prelude::Resource;

/// Seconds the finishing overlay takes to fade in fully.
pub const FINISH_FADE_SECONDS: f32 = 6.0;

/// Inserted when the level is finished; advanced every step afterwards.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FinishSequence {
    /// Seconds since the star was reached.
    pub elapsed: f32,
}

impl FinishSequence {
    /// Overlay opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        (self.elapsed / FINISH_FADE_SECONDS).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.opacity() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_ramps_and_clamps() {
        assert_eq!(FinishSequence { elapsed: 0.0 }.opacity(), 0.0);
        assert!((FinishSequence { elapsed: 3.0 }.opacity() - 0.5).abs() < 1e-6);
        assert_eq!(FinishSequence { elapsed: 9.0 }.opacity(), 1.0);
        assert!(FinishSequence { elapsed: 6.0 }.is_complete());
        assert!(!FinishSequence { elapsed: 5.9 }.is_complete());
    }
}
