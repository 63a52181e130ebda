//! End of level.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::player::Player;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::worldsignals::WorldSignals;

/// The player reached the star.
#[derive(Event, Debug, Clone, Copy)]
pub struct LevelFinishedEvent {
    pub player: Entity,
    pub star: Entity,
}

/// Take control away from the player and move on to the finishing sequence.
pub fn observe_level_finished(
    trigger: On<LevelFinishedEvent>,
    mut players: Query<&mut Player>,
    mut signals: ResMut<WorldSignals>,
    mut next_state: ResMut<NextGameState>,
) {
    let LevelFinishedEvent { player, star } = *trigger.event();
    match players.get_mut(player) {
        Ok(mut player_state) => player_state.controllable = false,
        Err(_) => warn!("LevelFinishedEvent for {:?} which is not a player", player),
    }
    signals.set_flag("level_finished");
    next_state.request(GameStates::Finished);
    info!("Player {:?} reached star {:?}", player, star);
}
