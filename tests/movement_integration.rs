//! Integration tests for the movement resolver and the player movement systems.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test movement_integration
//! ```

use bevy_ecs::prelude::*;
use glam::Vec2;

use gleamhouse::components::boxcollider::BoxCollider;
use gleamhouse::components::circlecollider::CircleCollider;
use gleamhouse::components::inputcontrolled::InputControlled;
use gleamhouse::components::player::Player;
use gleamhouse::components::transform2d::Transform2D;
use gleamhouse::resources::input::InputState;
use gleamhouse::resources::levellayout::LevelLayout;
use gleamhouse::resources::movementsettings::MovementSettings;
use gleamhouse::resources::regioncatalog::{Region, RegionCatalog};
use gleamhouse::systems::movement::{
    MAX_OVERLAPPING_REGIONS, can_move_by, player_aim_system, player_movement_system,
};

fn mover() -> (BoxCollider, CircleCollider) {
    (BoxCollider::new(1.0, 1.0), CircleCollider::new(0.5))
}

fn catalog_of(regions: impl IntoIterator<Item = Region>) -> RegionCatalog {
    regions.into_iter().collect()
}

fn floor(x0: f32, y0: f32, x1: f32, y1: f32) -> Region {
    Region::floor(Vec2::new(x0, y0), Vec2::new(x1, y1))
}

fn wall(x0: f32, y0: f32, x1: f32, y1: f32) -> Region {
    Region::wall(Vec2::new(x0, y0), Vec2::new(x1, y1))
}

fn check(catalog: &RegionCatalog, position: Vec2, delta: Vec2) -> bool {
    let (b, c) = mover();
    can_move_by(position, delta, &b, &c, catalog, &MovementSettings::default())
}

// =============================================================================
// can_move_by
// =============================================================================

#[test]
fn single_region_accepts_inside_and_rejects_past_edge() {
    let catalog = catalog_of([floor(0.0, 0.0, 2.0, 2.0)]);
    let start = Vec2::new(1.0, 1.0);
    assert!(check(&catalog, start, Vec2::new(0.3, 0.0)));
    assert!(!check(&catalog, start, Vec2::new(0.6, 0.0)));
    assert!(!check(&catalog, start, Vec2::new(-0.6, 0.0)));
    assert!(!check(&catalog, start, Vec2::new(0.0, 0.6)));
}

#[test]
fn empty_catalog_rejects_any_move() {
    let catalog = RegionCatalog::new();
    for delta in [Vec2::ZERO, Vec2::X, Vec2::new(-0.1, 0.2)] {
        assert!(!check(&catalog, Vec2::new(1.0, 1.0), delta));
    }
}

#[test]
fn moving_far_outside_every_region_is_rejected() {
    let catalog = catalog_of([floor(0.0, 0.0, 2.0, 2.0)]);
    assert!(!check(&catalog, Vec2::new(1.0, 1.0), Vec2::new(50.0, 0.0)));
}

#[test]
fn adjacent_floors_union_into_one_walkable_area() {
    let catalog = catalog_of([floor(0.0, 0.0, 2.0, 2.0), floor(2.0, 0.0, 4.0, 2.0)]);
    // Circle straddles the shared edge at x = 2.
    assert!(check(&catalog, Vec2::new(1.5, 1.0), Vec2::new(0.5, 0.0)));

    let lone = catalog_of([floor(0.0, 0.0, 2.0, 2.0)]);
    assert!(!check(&lone, Vec2::new(1.5, 1.0), Vec2::new(0.5, 0.0)));
}

#[test]
fn narrow_corridor_only_fits_when_centered() {
    let catalog = catalog_of([
        floor(0.0, 0.0, 4.0, 4.0),
        floor(4.0, 1.5, 8.0, 2.5),
    ]);
    assert!(check(&catalog, Vec2::new(4.5, 2.0), Vec2::new(0.5, 0.0)));
    assert!(!check(&catalog, Vec2::new(4.5, 2.0), Vec2::new(0.5, 0.3)));
}

#[test]
fn wall_blocks_an_otherwise_walkable_move() {
    let catalog = catalog_of([floor(0.0, 0.0, 10.0, 10.0), wall(5.0, 0.0, 6.0, 10.0)]);
    assert!(check(&catalog, Vec2::new(3.0, 5.0), Vec2::new(0.5, 0.0)));
    // Circle edge would reach 4.5 + 0.5 = 5.0, inside the wall's border.
    assert!(!check(&catalog, Vec2::new(4.0, 5.0), Vec2::new(0.5, 0.0)));
}

#[test]
fn walls_do_not_count_as_floor() {
    let catalog = catalog_of([wall(0.0, 0.0, 10.0, 10.0)]);
    assert!(!check(&catalog, Vec2::new(5.0, 5.0), Vec2::ZERO));
}

#[test]
fn finer_sampling_stays_conservative() {
    let catalog = catalog_of([floor(0.0, 0.0, 2.0, 2.0)]);
    let (b, c) = mover();
    for resolution in [1, 4, 8, 16, 32] {
        let settings = MovementSettings::with_sample_resolution(resolution);
        assert!(
            can_move_by(Vec2::new(1.0, 1.0), Vec2::ZERO, &b, &c, &catalog, &settings),
            "resolution {resolution}"
        );
        assert!(
            !can_move_by(Vec2::new(1.0, 1.0), Vec2::new(1.2, 0.0), &b, &c, &catalog, &settings),
            "resolution {resolution}"
        );
    }
}

#[test]
fn too_many_overlapping_floors_is_best_effort() {
    // Every floor covers the mover; truncating the shortlist still finds coverage.
    let regions = (0..MAX_OVERLAPPING_REGIONS + 4).map(|_| floor(0.0, 0.0, 4.0, 4.0));
    let catalog = catalog_of(regions);
    assert!(check(&catalog, Vec2::new(2.0, 2.0), Vec2::new(0.1, 0.0)));
}

#[test]
fn gleam_house_start_is_walkable() {
    let catalog = LevelLayout::gleam_house().build_catalog().unwrap();
    let layout = LevelLayout::gleam_house();
    let b = BoxCollider::new(1.0, 1.0);
    let c = CircleCollider::new(0.4);
    let settings = MovementSettings::default();
    assert!(can_move_by(layout.player_start, Vec2::ZERO, &b, &c, &catalog, &settings));
    assert!(can_move_by(
        layout.player_start,
        Vec2::new(0.05, 0.0),
        &b,
        &c,
        &catalog,
        &settings
    ));
}

// =============================================================================
// Systems
// =============================================================================

fn world_with_player(position: Vec2) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    world.insert_resource(catalog_of([floor(0.0, 0.0, 4.0, 4.0)]));
    world.insert_resource(MovementSettings::default());
    let player = world
        .spawn((
            Player::new(),
            Transform2D::from_position(position),
            InputControlled::with_speed(0.25),
            BoxCollider::new(1.0, 1.0),
            CircleCollider::new(0.5),
        ))
        .id();
    (world, player)
}

fn run_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((player_movement_system, player_aim_system).chain());
    schedule.run(world);
}

fn position(world: &World, entity: Entity) -> Vec2 {
    world.get::<Transform2D>(entity).unwrap().position()
}

#[test]
fn held_direction_moves_player() {
    let (mut world, player) = world_with_player(Vec2::new(2.0, 2.0));
    world.resource_mut::<InputState>().maindirection_right.active = true;
    run_movement(&mut world);
    assert_eq!(position(&world, player), Vec2::new(2.25, 2.0));
}

#[test]
fn blocked_axis_still_lets_the_other_slide() {
    // x is at the right edge; only the up component can be taken.
    let (mut world, player) = world_with_player(Vec2::new(3.5, 2.0));
    {
        let mut input = world.resource_mut::<InputState>();
        input.maindirection_right.active = true;
        input.maindirection_up.active = true;
    }
    run_movement(&mut world);
    assert_eq!(position(&world, player), Vec2::new(3.5, 2.25));
}

#[test]
fn uncontrollable_player_does_not_move() {
    let (mut world, player) = world_with_player(Vec2::new(2.0, 2.0));
    world.get_mut::<Player>(player).unwrap().controllable = false;
    world.resource_mut::<InputState>().maindirection_left.active = true;
    run_movement(&mut world);
    assert_eq!(position(&world, player), Vec2::new(2.0, 2.0));
}

#[test]
fn without_settings_resource_defaults_are_used() {
    let (mut world, player) = world_with_player(Vec2::new(2.0, 2.0));
    world.remove_resource::<MovementSettings>();
    world.resource_mut::<InputState>().maindirection_down.active = true;
    run_movement(&mut world);
    assert_eq!(position(&world, player), Vec2::new(2.0, 1.75));
}

#[test]
fn aim_faces_the_pointer() {
    let (mut world, player) = world_with_player(Vec2::new(2.0, 2.0));
    world.resource_mut::<InputState>().pointer_world = Some(Vec2::new(3.0, 2.0));
    run_movement(&mut world);
    let rotation = world.get::<Transform2D>(player).unwrap().rotation();
    assert!((rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-5);

    world.resource_mut::<InputState>().pointer_world = Some(Vec2::new(2.0, 5.0));
    run_movement(&mut world);
    let rotation = world.get::<Transform2D>(player).unwrap().rotation();
    assert!(rotation.abs() < 1e-5);
}
