//! Per-step input resource.
//!
//! Captures the subset of input the game cares about and exposes it to
//! systems via the [`InputState`] resource. The resource is the boundary to
//! whatever layer reads real hardware; the headless runner fills it from a
//! scripted sequence of held keys (see [`crate::resources::inputscript`]).
//! Defaults use WASD for movement and space to grab or drop the torch.
use bevy_ecs::prelude::*;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Boolean key state with an associated key name.
pub struct BoolState {
    /// Whether the key is currently active/pressed this step.
    pub active: bool,
    /// Whether the key was just pressed this step.
    pub just_pressed: bool,
    /// Whether the key was just released this step.
    pub just_released: bool,

    /// Name of the key bound to this action.
    pub key_binding: &'static str,
}

impl BoolState {
    fn bound_to(key_binding: &'static str) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Feed the raw pressed state for this step and derive the edges.
    pub fn update(&mut self, pressed: bool) {
        self.just_pressed = pressed && !self.active;
        self.just_released = !pressed && self.active;
        self.active = pressed;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: "",
        }
    }
}

/// Resource capturing the per-step input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    /// Grab or drop the torch.
    pub action_1: BoolState,
    pub action_back: BoolState,
    /// Pointer position in world space, when the input layer has one.
    pub pointer_world: Option<Vec2>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to("W"),
            maindirection_left: BoolState::bound_to("A"),
            maindirection_down: BoolState::bound_to("S"),
            maindirection_right: BoolState::bound_to("D"),
            action_1: BoolState::bound_to("SPACE"),
            action_back: BoolState::bound_to("ESCAPE"),
            pointer_world: None,
        }
    }
}

impl InputState {
    /// All key states, in a fixed order.
    pub fn keys_mut(&mut self) -> [&mut BoolState; 6] {
        [
            &mut self.maindirection_up,
            &mut self.maindirection_left,
            &mut self.maindirection_down,
            &mut self.maindirection_right,
            &mut self.action_1,
            &mut self.action_back,
        ]
    }

    /// Update every key from a predicate over key names.
    pub fn update_with(&mut self, mut is_pressed: impl FnMut(&str) -> bool) {
        for key in self.keys_mut() {
            let pressed = is_pressed(key.key_binding);
            key.update(pressed);
        }
    }
}
