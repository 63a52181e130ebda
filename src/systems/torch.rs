//! Torch interaction and flame tracking.
use bevy_ecs::prelude::*;

use crate::components::circlecollider::CircleCollider;
use crate::components::player::Player;
use crate::components::torch::{Torch, TorchFlame};
use crate::components::transform2d::Transform2D;
use crate::events::torch::{DropTorchEvent, GrabTorchEvent, torch_in_reach};
use crate::resources::input::InputState;
use crate::systems::transform2d::{change_id, world_matrix};

/// On the `action_1` press edge, drop the held torch or grab the first one in reach.
pub fn torch_interaction_system(
    players: Query<(Entity, &Player, &CircleCollider)>,
    torches: Query<(Entity, &Torch)>,
    transforms: Query<&Transform2D>,
    input: Res<InputState>,
    mut commands: Commands,
) {
    if !input.action_1.just_pressed {
        return;
    }
    for (player, player_state, collider) in players.iter() {
        if !player_state.controllable {
            continue;
        }
        if player_state.is_holding_torch() {
            commands.trigger(DropTorchEvent { player });
            continue;
        }
        let in_reach = torches
            .iter()
            .find(|(torch, state)| torch_in_reach(&transforms, player, collider, *torch, state));
        if let Some((torch, _)) = in_reach {
            commands.trigger(GrabTorchEvent { player, torch });
        }
    }
}

/// Recompute each flame's world position when its torch or an ancestor moved.
///
/// The torch's change id is compared against the one seen at the last
/// refresh, so a torch that sits still costs one id lookup per step.
pub fn torch_flame_system(
    mut flames: Query<(Entity, &Torch, &mut TorchFlame)>,
    mut transforms: Query<&mut Transform2D>,
) {
    for (entity, torch, mut flame) in flames.iter_mut() {
        let Some(current) = change_id(&mut transforms, entity) else {
            continue;
        };
        if flame.seen_change_id == Some(current) {
            continue;
        }
        let Some(matrix) = world_matrix(&transforms, entity) else {
            continue;
        };
        flame.position = matrix.transform_point2(torch.fire_offset());
        flame.seen_change_id = Some(current);
        flame.refresh_count += 1;
    }
}
