//! Level setup, state hooks and the per-step schedule.
//!
//! The world is driven by [`GameStates`]: `Setup` spawns the level described
//! by the [`LevelLayout`] resource, `Playing` runs movement and interaction,
//! `Finished` fades the end overlay in and `Quitting` raises the `quit_game`
//! flag the runner watches.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::common_conditions::resource_exists;
use log::{error, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::inputcontrolled::InputControlled;
use crate::components::player::Player;
use crate::components::star::Star;
use crate::components::torch::{Torch, TorchFlame};
use crate::components::transform2d::Transform2D;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::level::observe_level_finished;
use crate::events::torch::{observe_drop_torch, observe_grab_torch};
use crate::resources::debugmode::DebugMode;
use crate::resources::finishsequence::FinishSequence;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::levellayout::LevelLayout;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::debugbounds::log_debug_bounds;
use crate::systems::finish::finish_sequence_system;
use crate::systems::gamestate::{check_pending_state, state_is_finished, state_is_playing};
use crate::systems::goal::goal_system;
use crate::systems::input::{quit_on_back, update_input_state};
use crate::systems::movement::{player_aim_system, player_movement_system};
use crate::systems::torch::{torch_flame_system, torch_interaction_system};
use crate::systems::transform2d::{propagate_transforms, refresh_local_matrices};

/// Spawn the level from [`LevelLayout`] and [`GameConfig`], then request `Playing`.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    layout: Option<Res<LevelLayout>>,
    mut signals: ResMut<WorldSignals>,
    mut next_state: ResMut<NextGameState>,
) {
    let layout = layout.as_deref().cloned().unwrap_or_default();
    let catalog = match layout.build_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Cannot set up level: {}", e);
            next_state.request(GameStates::Quitting);
            return;
        }
    };
    info!(
        "Setting up level: {} regions, {} torches",
        catalog.len(),
        layout.torches.len()
    );
    commands.insert_resource(catalog);
    commands.insert_resource(config.movement_settings());

    let player = commands
        .spawn((
            Player::new(),
            Transform2D::from_position(layout.player_start),
            InputControlled::with_speed(config.player_speed),
            BoxCollider::new(config.player_size, config.player_size),
            CircleCollider::new(config.collision_radius),
        ))
        .id();
    signals.set_entity("player", player);

    for &position in &layout.torches {
        commands.spawn((
            Torch::default(),
            TorchFlame::default(),
            Transform2D::from_position(position),
        ));
    }

    let star = commands
        .spawn((
            Star,
            Transform2D::from_position(layout.star),
            CircleCollider::new(layout.star_radius),
        ))
        .id();
    signals.set_entity("star", star);

    next_state.request(GameStates::Playing);
}

pub fn enter_play(signals: Res<WorldSignals>) {
    info!("Level started, player {:?}", signals.get_entity("player"));
}

/// Start the finishing sequence.
pub fn enter_finished(mut commands: Commands, mut signals: ResMut<WorldSignals>) {
    commands.insert_resource(FinishSequence::default());
    signals.set_scalar("finish_opacity", 0.0);
}

pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    info!("Quitting");
    signals.set_flag("quit_game");
}

/// Build a world with every resource, observer and state hook registered.
///
/// The world starts in [`GameStates::None`]; call [`start`] to enter `Setup`.
pub fn create_world(config: GameConfig, layout: LevelLayout) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::default());
    world.insert_resource(NextGameState::default());
    world.insert_resource(config);
    world.insert_resource(layout);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(observe_grab_torch));
    world.spawn(Observer::new(observe_drop_torch));
    world.spawn(Observer::new(observe_level_finished));

    let mut systems_store = SystemsStore::new();
    systems_store.register(&mut world, "setup", setup);
    systems_store.register(&mut world, "enter_play", enter_play);
    systems_store.register(&mut world, "enter_finished", enter_finished);
    systems_store.register(&mut world, "quit_game", quit_game);
    world.insert_resource(systems_store);

    world.flush();
    world
}

/// Request `Setup` and apply it immediately, along with any state the
/// setup hook asks for in turn.
pub fn start(world: &mut World) {
    world.resource_mut::<NextGameState>().request(GameStates::Setup);
    apply_pending_states(world);
}

/// Apply pending state transitions until none is left.
///
/// Hooks may request a further transition (setup asks for `Playing`); each
/// one is applied in order, up to one per state.
pub fn apply_pending_states(world: &mut World) {
    const MAX_CHAINED_TRANSITIONS: usize = 5;
    for _ in 0..MAX_CHAINED_TRANSITIONS {
        if !world.resource::<NextGameState>().is_pending() {
            return;
        }
        world.trigger(GameStateChangedEvent {});
        world.flush();
    }
}

/// The per-step schedule.
///
/// Gameplay runs in a strict order: input, movement, aim, torch, goal, matrix
/// refresh, flame, then the finishing sequence and state changes.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            quit_on_back,
            (
                player_movement_system,
                player_aim_system,
                torch_interaction_system,
                goal_system,
            )
                .chain()
                .run_if(state_is_playing),
            refresh_local_matrices,
            torch_flame_system,
            propagate_transforms,
            finish_sequence_system.run_if(state_is_finished),
            log_debug_bounds.run_if(resource_exists::<DebugMode>),
            check_pending_state,
        )
            .chain(),
    );
    update
}
