//! Movement resolution against the region catalog.
//!
//! A move is accepted only if the mover's collision circle at the candidate
//! position is fully covered by the union of walkable floor regions and does
//! not touch any wall. Coverage is approximated by sampling the circle on a
//! regular grid, so the answer is conservative up to one sample cell.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::error;

use crate::components::boundingbox::BoundingBox;
use crate::components::boundingcircle::BoundingCircle;
use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::inputcontrolled::InputControlled;
use crate::components::player::Player;
use crate::components::transform2d::Transform2D;
use crate::resources::input::InputState;
use crate::resources::movementsettings::MovementSettings;
use crate::resources::regioncatalog::RegionCatalog;

/// Most floor regions a single candidate box is expected to overlap.
pub const MAX_OVERLAPPING_REGIONS: usize = 16;

/// Decide whether a mover at `position` may translate by `delta`.
///
/// The coarse phase shortlists floors whose box overlaps the mover's box at
/// the candidate position. The fine phase samples the candidate circle on a
/// `sample_resolution` x `sample_resolution` grid of cell centers, and every
/// sample inside the circle must lie in a shortlisted floor. Finally the
/// circle must not collide any wall.
///
/// An empty catalog rejects every move.
pub fn can_move_by(
    position: Vec2,
    delta: Vec2,
    box_collider: &BoxCollider,
    circle_collider: &CircleCollider,
    catalog: &RegionCatalog,
    settings: &MovementSettings,
) -> bool {
    let candidate = position + delta;
    let candidate_box = box_collider.bounding_box(candidate);

    let mut overlapping: ArrayVec<BoundingBox, MAX_OVERLAPPING_REGIONS> = ArrayVec::new();
    for floor in catalog.floors() {
        let floor_box = floor.bounding_box();
        if !floor_box.collides_box(&candidate_box) {
            continue;
        }
        if overlapping.try_push(floor_box).is_err() {
            error!(
                "More than {} floor regions overlap the mover at {:?}; ignoring the rest",
                MAX_OVERLAPPING_REGIONS, candidate
            );
            break;
        }
    }
    if overlapping.is_empty() {
        return false;
    }

    let circle = circle_collider.bounding_circle(candidate);
    if !is_circle_covered(&circle, &overlapping, settings.sample_resolution) {
        return false;
    }

    !catalog
        .walls()
        .any(|wall| wall.bounding_box().collides_circle(&circle))
}

/// True if every grid sample of `circle` that falls inside it is inside one of `boxes`.
///
/// Samples sit at the centers of a `resolution` x `resolution` grid laid over
/// the circle's enclosing square.
pub fn is_circle_covered(circle: &BoundingCircle, boxes: &[BoundingBox], resolution: usize) -> bool {
    let resolution = resolution.max(1);
    let enclosing = circle.enclosing_box();
    let cell = enclosing.size() / resolution as f32;

    for row in 0..resolution {
        for col in 0..resolution {
            let sample = enclosing.min + cell * Vec2::new(col as f32 + 0.5, row as f32 + 0.5);
            if !circle.is_point_inside(sample) {
                continue;
            }
            if !boxes.iter().any(|b| b.is_point_inside(sample)) {
                return false;
            }
        }
    }
    true
}

/// Move the player one step per held direction, keeping only accepted moves.
///
/// Directions are tried one at a time (up, left, down, right) so that sliding
/// along a wall still works when the diagonal is blocked.
pub fn player_movement_system(
    mut query: Query<(
        &Player,
        &InputControlled,
        &BoxCollider,
        &CircleCollider,
        &mut Transform2D,
    )>,
    input: Res<InputState>,
    catalog: Res<RegionCatalog>,
    settings: Option<Res<MovementSettings>>,
) {
    let default_settings = MovementSettings::default();
    let settings = settings.as_deref().unwrap_or(&default_settings);

    for (player, controlled, box_collider, circle_collider, mut transform) in query.iter_mut() {
        if !player.controllable {
            continue;
        }
        let steps = [
            (input.maindirection_up.active, controlled.up_step),
            (input.maindirection_left.active, controlled.left_step),
            (input.maindirection_down.active, controlled.down_step),
            (input.maindirection_right.active, controlled.right_step),
        ];
        for (held, delta) in steps {
            if !held {
                continue;
            }
            if can_move_by(
                transform.position(),
                delta,
                box_collider,
                circle_collider,
                &catalog,
                settings,
            ) {
                transform.move_by(delta);
            }
        }
    }
}

/// Turn the player to face the pointer, when there is one.
pub fn player_aim_system(mut query: Query<(&Player, &mut Transform2D)>, input: Res<InputState>) {
    let Some(pointer) = input.pointer_world else {
        return;
    };
    for (player, mut transform) in query.iter_mut() {
        if !player.controllable {
            continue;
        }
        let to_pointer = pointer - transform.position();
        if to_pointer == Vec2::ZERO {
            continue;
        }
        let heading = to_pointer.x.atan2(to_pointer.y);
        if transform.rotation() != heading {
            transform.set_rotation(heading);
        }
    }
}
