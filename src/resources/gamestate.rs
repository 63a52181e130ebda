//! Level state machine.
//!
//! The game walks `None -> Setup -> Playing -> Finished -> Quitting`, with a
//! shortcut to `Quitting` from any state on the back key. Systems never write
//! [`GameState`] directly. They call [`NextGameState::request`], and at the end
//! of the step `check_pending_state` fires the change event whose observer
//! swaps the state in and runs the matching enter hook.

use bevy_ecs::prelude::Resource;

/// States of a single run through the house.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    /// Before `start`. Nothing is spawned yet.
    #[default]
    None,
    /// Building the region catalog and spawning the player, torches and star.
    Setup,
    /// The player has control.
    Playing,
    /// The star was reached; the finishing sequence is running.
    Finished,
    Quitting,
}

/// State the world is in right now.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn get(&self) -> &GameStates {
        &self.current
    }

    pub fn is(&self, state: &GameStates) -> bool {
        &self.current == state
    }

    /// Overwrite the current state. Only the transition observer calls this;
    /// it is what keeps enter hooks in step with the state.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Transition requested during the current step, if any.
///
/// A later request in the same step replaces an earlier one.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct NextGameState {
    pending: Option<GameStates>,
}

impl NextGameState {
    pub fn request(&mut self, state: GameStates) {
        self.pending = Some(state);
    }

    pub fn pending(&self) -> Option<&GameStates> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Remove and return the pending request.
    pub fn take(&mut self) -> Option<GameStates> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_world_starts_in_none_with_nothing_pending() {
        assert!(GameState::default().is(&GameStates::None));
        assert!(!NextGameState::default().is_pending());
    }

    #[test]
    fn latest_request_wins_and_take_clears_it() {
        let mut next = NextGameState::default();
        next.request(GameStates::Finished);
        next.request(GameStates::Quitting);
        assert_eq!(next.pending(), Some(&GameStates::Quitting));
        assert_eq!(next.take(), Some(GameStates::Quitting));
        assert!(!next.is_pending());
        assert_eq!(next.take(), None);
    }
}
