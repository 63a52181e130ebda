//! Input systems.
//!
//! - [`update_input_state`] plays back the [`InputScript`] resource, when
//!   present, and writes the held keys into [`InputState`]. Without a script
//!   the resource is left for an outer input layer to fill.
//! - [`quit_on_back`] requests [`GameStates::Quitting`] when the back key is
//!   pressed.
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::inputscript::InputScript;

/// Advance the input script by one step and update key states and edges.
pub fn update_input_state(mut input: ResMut<InputState>, script: Option<ResMut<InputScript>>) {
    let Some(mut script) = script else {
        return;
    };
    let held = script.current_keys().to_vec();
    input.update_with(|key| held.iter().any(|k| k == key));
    script.advance();
}

pub fn quit_on_back(input: Res<InputState>, mut next_state: ResMut<NextGameState>) {
    if input.action_back.just_pressed {
        info!("Back pressed, quitting");
        next_state.request(GameStates::Quitting);
    }
}
