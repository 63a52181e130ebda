//! Finishing sequence: fade the overlay in, then quit.
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::finishsequence::FinishSequence;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// Advance [`FinishSequence`], publish its opacity as the `finish_opacity`
/// scalar and request [`GameStates::Quitting`] once it is fully opaque.
pub fn finish_sequence_system(
    sequence: Option<ResMut<FinishSequence>>,
    time: Res<WorldTime>,
    mut signals: ResMut<WorldSignals>,
    mut next_state: ResMut<NextGameState>,
) {
    let Some(mut sequence) = sequence else {
        warn!("finish_sequence_system running without a FinishSequence");
        return;
    };
    sequence.elapsed += time.delta;
    signals.set_scalar("finish_opacity", sequence.opacity());
    if sequence.is_complete() {
        info!("Finishing sequence complete after {:.2}s", sequence.elapsed);
        next_state.request(GameStates::Quitting);
    }
}
