//! Integration tests for torch handling, reaching the star and a full scripted run.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test gameplay_integration
//! ```

use bevy_ecs::prelude::*;
use glam::Vec2;

use gleamhouse::components::player::Player;
use gleamhouse::components::torch::{TORCH_HOLD_OFFSET, Torch, TorchFlame};
use gleamhouse::components::transform2d::Transform2D;
use gleamhouse::events::torch::{DropTorchEvent, GrabTorchEvent};
use gleamhouse::game::{build_update_schedule, create_world, start};
use gleamhouse::resources::finishsequence::FinishSequence;
use gleamhouse::resources::gameconfig::GameConfig;
use gleamhouse::resources::gamestate::{GameState, GameStates};
use gleamhouse::resources::inputscript::InputScript;
use gleamhouse::resources::levellayout::{LevelLayout, RegionCorners};
use gleamhouse::resources::worldsignals::WorldSignals;
use gleamhouse::systems::time::update_world_time;
use gleamhouse::systems::transform2d::position_in_world;

const EPSILON: f32 = 1e-4;

fn open_room(player_start: Vec2, torch: Vec2, star: Vec2) -> LevelLayout {
    LevelLayout {
        floors: vec![RegionCorners::new(Vec2::ZERO, Vec2::new(10.0, 10.0))],
        walls: Vec::new(),
        player_start,
        torches: vec![torch],
        star,
        star_radius: 0.35,
    }
}

fn started_world(layout: LevelLayout) -> World {
    let mut world = create_world(GameConfig::new(), layout);
    start(&mut world);
    world
}

fn player_of(world: &World) -> Entity {
    *world.resource::<WorldSignals>().get_entity("player").unwrap()
}

fn torch_of(world: &mut World) -> Entity {
    let mut query = world.query_filtered::<Entity, With<Torch>>();
    query.single(world).unwrap()
}

fn play(world: &mut World, schedule: &mut Schedule, script: &str, dt: f32) {
    let script = InputScript::parse(script).unwrap();
    let steps = script.total_steps().max(1);
    world.insert_resource(script);
    for _ in 0..steps {
        update_world_time(world, dt);
        schedule.run(world);
    }
}

// =============================================================================
// Torch
// =============================================================================

#[test]
fn grab_follow_and_drop_torch() {
    let mut world = started_world(open_room(
        Vec2::new(2.0, 2.0),
        Vec2::new(2.3, 2.0),
        Vec2::new(9.0, 9.0),
    ));
    let mut schedule = build_update_schedule();
    let player = player_of(&world);
    let torch = torch_of(&mut world);

    play(&mut world, &mut schedule, "SPACE:1", 0.0);

    assert_eq!(world.get::<Player>(player).unwrap().held_torch, Some(torch));
    assert!(world.resource::<WorldSignals>().has_flag("torch_held"));
    let t = world.get::<Transform2D>(torch).unwrap();
    assert_eq!(t.parent(), Some(player));
    assert_eq!(t.position(), TORCH_HOLD_OFFSET);
    let held_at = position_in_world(&world, torch).unwrap();
    assert!(held_at.abs_diff_eq(Vec2::new(2.45, 2.0), EPSILON), "{held_at:?}");

    // The torch follows the player.
    world
        .get_mut::<Transform2D>(player)
        .unwrap()
        .set_position(Vec2::new(4.0, 4.0));
    play(&mut world, &mut schedule, "-:1", 0.0);
    let follows = position_in_world(&world, torch).unwrap();
    assert!(follows.abs_diff_eq(Vec2::new(4.45, 4.0), EPSILON), "{follows:?}");

    // Dropping leaves it where it was.
    play(&mut world, &mut schedule, "SPACE:1", 0.0);
    assert!(world.get::<Player>(player).unwrap().held_torch.is_none());
    assert!(!world.resource::<WorldSignals>().has_flag("torch_held"));
    let t = world.get::<Transform2D>(torch).unwrap();
    assert!(t.parent().is_none());
    assert!(t.position().abs_diff_eq(Vec2::new(4.45, 4.0), EPSILON));

    world
        .get_mut::<Transform2D>(player)
        .unwrap()
        .set_position(Vec2::new(6.0, 6.0));
    let stays = position_in_world(&world, torch).unwrap();
    assert!(stays.abs_diff_eq(Vec2::new(4.45, 4.0), EPSILON));
}

#[test]
fn torch_out_of_reach_is_not_grabbed() {
    let mut world = started_world(open_room(
        Vec2::new(2.0, 2.0),
        Vec2::new(6.0, 6.0),
        Vec2::new(9.0, 9.0),
    ));
    let mut schedule = build_update_schedule();
    let player = player_of(&world);
    let torch = torch_of(&mut world);

    play(&mut world, &mut schedule, "SPACE:1", 0.0);
    assert!(world.get::<Player>(player).unwrap().held_torch.is_none());

    // Triggering the event directly is checked the same way.
    world.trigger(GrabTorchEvent { player, torch });
    world.flush();
    assert!(world.get::<Transform2D>(torch).unwrap().parent().is_none());
}

#[test]
fn drop_with_empty_hands_is_ignored() {
    let mut world = started_world(open_room(
        Vec2::new(2.0, 2.0),
        Vec2::new(6.0, 6.0),
        Vec2::new(9.0, 9.0),
    ));
    let player = player_of(&world);
    world.trigger(DropTorchEvent { player });
    world.flush();
    assert!(world.get::<Player>(player).unwrap().held_torch.is_none());
}

#[test]
fn flame_position_refreshes_only_on_change() {
    let mut world = started_world(open_room(
        Vec2::new(2.0, 2.0),
        Vec2::new(6.0, 6.0),
        Vec2::new(9.0, 9.0),
    ));
    let mut schedule = build_update_schedule();
    let torch = torch_of(&mut world);
    let fire_offset = world.get::<Torch>(torch).unwrap().fire_offset();

    play(&mut world, &mut schedule, "-:3", 0.0);
    let flame = *world.get::<TorchFlame>(torch).unwrap();
    assert_eq!(flame.refresh_count, 1);
    assert!(flame.position.abs_diff_eq(Vec2::new(6.0, 6.0) + fire_offset, EPSILON));

    world
        .get_mut::<Transform2D>(torch)
        .unwrap()
        .move_by(Vec2::new(1.0, 0.0));
    play(&mut world, &mut schedule, "-:2", 0.0);
    let flame = *world.get::<TorchFlame>(torch).unwrap();
    assert_eq!(flame.refresh_count, 2);
    assert!(flame.position.abs_diff_eq(Vec2::new(7.0, 6.0) + fire_offset, EPSILON));
}

#[test]
fn held_flame_refreshes_when_player_moves() {
    let mut world = started_world(open_room(
        Vec2::new(2.0, 2.0),
        Vec2::new(2.3, 2.0),
        Vec2::new(9.0, 9.0),
    ));
    let mut schedule = build_update_schedule();
    let torch = torch_of(&mut world);

    play(&mut world, &mut schedule, "SPACE:1", 0.0);
    let before = world.get::<TorchFlame>(torch).unwrap().refresh_count;

    play(&mut world, &mut schedule, "D:1", 0.0);
    let flame = *world.get::<TorchFlame>(torch).unwrap();
    assert_eq!(flame.refresh_count, before + 1);
    let expected = Vec2::new(2.05, 2.0) + TORCH_HOLD_OFFSET + Torch::default().fire_offset();
    assert!(flame.position.abs_diff_eq(expected, EPSILON), "{:?}", flame.position);
}

// =============================================================================
// Star and finishing sequence
// =============================================================================

#[test]
fn reaching_the_star_finishes_and_then_quits() {
    let mut world = started_world(open_room(
        Vec2::new(2.0, 2.0),
        Vec2::new(8.0, 2.0),
        Vec2::new(3.0, 2.0),
    ));
    let mut schedule = build_update_schedule();
    let player = player_of(&world);

    play(&mut world, &mut schedule, "D:10", 0.0);

    assert_eq!(world.resource::<GameState>().get(), &GameStates::Finished);
    assert!(!world.get::<Player>(player).unwrap().controllable);
    assert!(world.resource::<WorldSignals>().has_flag("level_finished"));
    assert!(world.contains_resource::<FinishSequence>());
    // Control stopped as soon as the circles touched.
    let x = world.get::<Transform2D>(player).unwrap().position().x;
    assert!(x < 2.4, "player kept moving to {x}");

    play(&mut world, &mut schedule, "-:3", 1.0);
    let opacity = world
        .resource::<WorldSignals>()
        .get_scalar("finish_opacity")
        .unwrap();
    assert!((opacity - 0.5).abs() < EPSILON, "opacity {opacity}");
    assert!(!world.resource::<WorldSignals>().has_flag("quit_game"));

    play(&mut world, &mut schedule, "-:3", 1.0);
    assert!(world.resource::<WorldSignals>().has_flag("quit_game"));
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Quitting);
}

#[test]
fn back_key_quits() {
    let mut world = started_world(LevelLayout::gleam_house());
    let mut schedule = build_update_schedule();
    play(&mut world, &mut schedule, "ESCAPE:1", 0.0);
    assert!(world.resource::<WorldSignals>().has_flag("quit_game"));
}

// =============================================================================
// Full run through the built-in house
// =============================================================================

#[test]
fn scripted_run_through_gleam_house_reaches_the_star() {
    let config = GameConfig::new();
    let dt = config.step_seconds();
    let max_frames = config.max_frames;
    let mut world = create_world(config, LevelLayout::gleam_house());
    world.insert_resource(InputScript::parse("D:110,W:90,SPACE:1,S:30,D:240,W:40,D:90").unwrap());
    start(&mut world);
    let mut schedule = build_update_schedule();

    let mut frames = 0;
    while frames < max_frames && !world.resource::<WorldSignals>().has_flag("quit_game") {
        update_world_time(&mut world, dt);
        schedule.run(&mut world);
        frames += 1;
    }

    let signals = world.resource::<WorldSignals>();
    assert!(signals.has_flag("torch_held"), "torch was not picked up");
    assert!(signals.has_flag("level_finished"), "star not reached in {frames} frames");
    assert!(signals.has_flag("quit_game"));
    assert!(frames < max_frames);

    // The player went around the back-room wall, above its top edge.
    let player = player_of(&world);
    let pos = world.get::<Transform2D>(player).unwrap().position();
    assert!(pos.y > 5.5, "{pos:?}");
}
