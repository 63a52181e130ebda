//! Grabbing and dropping the torch.
//!
//! A held torch is parented to the player's transform so it follows the
//! player's position and aim without any per-step copying. Dropping bakes the
//! torch's world placement back into its local transform before the parent is
//! cleared, so the torch stays exactly where it was.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::circlecollider::CircleCollider;
use crate::components::player::Player;
use crate::components::torch::{TORCH_HOLD_OFFSET, Torch};
use crate::components::transform2d::Transform2D;
use crate::resources::worldsignals::WorldSignals;
use crate::systems::transform2d::{TransformLookup, detach_keep_world, position_in_world};

/// The player tries to pick up `torch`.
#[derive(Event, Debug, Clone, Copy)]
pub struct GrabTorchEvent {
    pub player: Entity,
    pub torch: Entity,
}

/// The player lets go of whatever torch they are holding.
#[derive(Event, Debug, Clone, Copy)]
pub struct DropTorchEvent {
    pub player: Entity,
}

/// Whether `player`'s collision circle touches `torch`'s base or flame.
pub fn torch_in_reach<L: TransformLookup + ?Sized>(
    transforms: &L,
    player: Entity,
    collider: &CircleCollider,
    torch_entity: Entity,
    torch: &Torch,
) -> bool {
    let (Some(player_pos), Some(torch_pos)) = (
        position_in_world(transforms, player),
        position_in_world(transforms, torch_entity),
    ) else {
        return false;
    };
    torch
        .bounding_box(torch_pos)
        .collides_circle(&collider.bounding_circle(player_pos))
}

/// Attach the torch to the player if it is in reach and the player's hands are free.
pub fn observe_grab_torch(
    trigger: On<GrabTorchEvent>,
    mut players: Query<(&mut Player, &CircleCollider)>,
    torches: Query<&Torch>,
    mut transforms: Query<&mut Transform2D>,
    mut signals: ResMut<WorldSignals>,
) {
    let GrabTorchEvent { player, torch } = *trigger.event();
    let Ok((mut player_state, collider)) = players.get_mut(player) else {
        warn!("GrabTorchEvent for {:?} which is not a player", player);
        return;
    };
    if player_state.is_holding_torch() {
        debug!("Player {:?} already holds a torch", player);
        return;
    }
    let Ok(torch_state) = torches.get(torch) else {
        warn!("GrabTorchEvent for {:?} which is not a torch", torch);
        return;
    };
    if !torch_in_reach(&transforms, player, collider, torch, torch_state) {
        debug!("Torch {:?} is out of reach", torch);
        return;
    }
    let Ok(mut torch_transform) = transforms.get_mut(torch) else {
        return;
    };

    torch_transform.set_parent(Some(player));
    torch_transform.set_position(TORCH_HOLD_OFFSET);
    torch_transform.set_rotation(0.0);
    player_state.held_torch = Some(torch);
    signals.set_flag("torch_held");
    info!("Player {:?} picked up torch {:?}", player, torch);
}

/// Detach the held torch, leaving it at its current world placement.
pub fn observe_drop_torch(
    trigger: On<DropTorchEvent>,
    mut players: Query<&mut Player>,
    mut transforms: Query<&mut Transform2D>,
    mut signals: ResMut<WorldSignals>,
) {
    let player = trigger.event().player;
    let Ok(mut player_state) = players.get_mut(player) else {
        warn!("DropTorchEvent for {:?} which is not a player", player);
        return;
    };
    let Some(torch) = player_state.held_torch.take() else {
        debug!("Player {:?} holds no torch", player);
        return;
    };
    if !detach_keep_world(&mut transforms, torch) {
        warn!("Held torch {:?} no longer has a transform", torch);
    }
    signals.clear_flag("torch_held");
    info!("Player {:?} dropped torch {:?}", player, torch);
}
