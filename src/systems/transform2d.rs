//! World-space queries over the [`Transform2D`] hierarchy.
//!
//! A transform only knows its parent, never its children, so every world-space
//! value is derived by walking the live ancestor chain. The walk goes through
//! a [`TransformLookup`], implemented for [`World`] and for transform queries,
//! so the same code serves systems, observers and tests.
//!
//! Parents are entity handles. A handle whose entity was despawned fails to
//! resolve and the child is treated as a root. The first write access that
//! notices it ([`change_id`] or [`refresh_local_matrices`]) clears the handle,
//! which bumps the child's change id and logs a single warning.
//!
//! # Schedule position
//!
//! [`refresh_local_matrices`] and [`propagate_transforms`] should run **after**
//! all systems that mutate transforms (movement, aim, torch attachment) so the
//! world values read by the presentation layer are up to date.

use bevy_ecs::prelude::*;
use bevy_ecs::query::QueryFilter;
use glam::{Mat3, Vec2};
use log::{debug, error, warn};

use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::transform2d::Transform2D;

/// Ancestor chains longer than this are treated as cycles.
pub const MAX_HIERARCHY_DEPTH: usize = 64;

/// Read access to transforms by entity.
pub trait TransformLookup {
    fn transform(&self, entity: Entity) -> Option<&Transform2D>;
}

/// Write access to transforms by entity.
pub trait TransformLookupMut: TransformLookup {
    fn transform_mut(&mut self, entity: Entity) -> Option<Mut<'_, Transform2D>>;
}

impl TransformLookup for World {
    fn transform(&self, entity: Entity) -> Option<&Transform2D> {
        self.get::<Transform2D>(entity)
    }
}

impl TransformLookupMut for World {
    fn transform_mut(&mut self, entity: Entity) -> Option<Mut<'_, Transform2D>> {
        self.get_mut::<Transform2D>(entity)
    }
}

impl<F: QueryFilter> TransformLookup for Query<'_, '_, &Transform2D, F> {
    fn transform(&self, entity: Entity) -> Option<&Transform2D> {
        self.get(entity).ok()
    }
}

impl<F: QueryFilter> TransformLookup for Query<'_, '_, &mut Transform2D, F> {
    fn transform(&self, entity: Entity) -> Option<&Transform2D> {
        self.get(entity).ok()
    }
}

impl<F: QueryFilter> TransformLookupMut for Query<'_, '_, &mut Transform2D, F> {
    fn transform_mut(&mut self, entity: Entity) -> Option<Mut<'_, Transform2D>> {
        self.get_mut(entity).ok()
    }
}

/// Parent of `transform` if it still resolves.
fn live_parent<L: TransformLookup + ?Sized>(
    lookup: &L,
    child: Entity,
    transform: &Transform2D,
) -> Option<Entity> {
    let parent = transform.parent()?;
    if lookup.transform(parent).is_some() {
        Some(parent)
    } else {
        debug!("Parent {:?} of {:?} is gone; reading it as a root", parent, child);
        None
    }
}

/// Parent handle of `transform` that no longer resolves.
fn stale_parent<L: TransformLookup + ?Sized>(lookup: &L, transform: &Transform2D) -> Option<Entity> {
    transform
        .parent()
        .filter(|parent| lookup.transform(*parent).is_none())
}

fn clear_stale_parent(transform: &mut Transform2D, child: Entity, parent: Entity) {
    warn!(
        "Transform of {:?} points at missing parent {:?}; detaching it as a root",
        child, parent
    );
    transform.set_parent(None);
}

fn report_cycle(entity: Entity) {
    error!(
        "Transform hierarchy above {:?} is deeper than {} levels; assuming a parent cycle",
        entity, MAX_HIERARCHY_DEPTH
    );
    debug_assert!(false, "cyclic Transform2D parent chain at {entity:?}");
}

/// World matrix of `entity`: its local matrix composed with every ancestor's.
///
/// Returns `None` if `entity` has no [`Transform2D`].
pub fn world_matrix<L: TransformLookup + ?Sized>(lookup: &L, entity: Entity) -> Option<Mat3> {
    let transform = lookup.transform(entity)?;
    let mut matrix = transform.computed_local_matrix();
    let mut current = entity;
    let mut next = live_parent(lookup, current, transform);
    let mut depth = 0;
    while let Some(parent) = next {
        depth += 1;
        if depth > MAX_HIERARCHY_DEPTH {
            report_cycle(entity);
            break;
        }
        let Some(parent_transform) = lookup.transform(parent) else {
            break;
        };
        matrix = parent_transform.computed_local_matrix() * matrix;
        current = parent;
        next = live_parent(lookup, current, parent_transform);
    }
    Some(matrix)
}

/// World position of `entity` (translation column of its world matrix).
pub fn position_in_world<L: TransformLookup + ?Sized>(lookup: &L, entity: Entity) -> Option<Vec2> {
    let transform = lookup.transform(entity)?;
    if live_parent(lookup, entity, transform).is_none() {
        return Some(transform.position());
    }
    world_matrix(lookup, entity).map(|m| m.z_axis.truncate())
}

/// World rotation of `entity` in radians: the sum of local rotations up the chain.
pub fn rotation_in_world<L: TransformLookup + ?Sized>(lookup: &L, entity: Entity) -> Option<f32> {
    let transform = lookup.transform(entity)?;
    let mut rotation = transform.rotation();
    let mut next = live_parent(lookup, entity, transform);
    let mut depth = 0;
    while let Some(parent) = next {
        depth += 1;
        if depth > MAX_HIERARCHY_DEPTH {
            report_cycle(entity);
            break;
        }
        let Some(parent_transform) = lookup.transform(parent) else {
            break;
        };
        rotation += parent_transform.rotation();
        next = live_parent(lookup, parent, parent_transform);
    }
    Some(rotation)
}

/// World scale of `entity`: lengths of the world matrix's transformed basis axes.
pub fn scale_in_world<L: TransformLookup + ?Sized>(lookup: &L, entity: Entity) -> Option<Vec2> {
    let m = world_matrix(lookup, entity)?;
    Some(Vec2::new(
        m.x_axis.truncate().length(),
        m.y_axis.truncate().length(),
    ))
}

/// Change id of `entity`, pulling in changes of its ancestors.
///
/// Ancestors are resolved first. Whenever a parent's id is newer than the one
/// this transform last saw, the local counter is bumped, so two reads return
/// a strictly larger id if the node or any ancestor changed in between. A
/// despawned parent counts as a change too: the dangling handle is cleared,
/// which bumps the counter once.
pub fn change_id<L: TransformLookupMut + ?Sized>(lookup: &mut L, entity: Entity) -> Option<u64> {
    change_id_at_depth(lookup, entity, 0)
}

fn change_id_at_depth<L: TransformLookupMut + ?Sized>(
    lookup: &mut L,
    entity: Entity,
    depth: usize,
) -> Option<u64> {
    let transform = lookup.transform(entity)?;
    if let Some(missing) = stale_parent(&*lookup, transform) {
        clear_stale_parent(&mut *lookup.transform_mut(entity)?, entity, missing);
    }
    let parent = lookup.transform(entity)?.parent();
    let parent_id = match parent {
        Some(_) if depth >= MAX_HIERARCHY_DEPTH => {
            report_cycle(entity);
            None
        }
        Some(parent) => change_id_at_depth(lookup, parent, depth + 1),
        None => None,
    };

    if let Some(parent_id) = parent_id {
        let pending = lookup
            .transform(entity)
            .is_some_and(|t| t.parent_change_pending(parent_id));
        if pending {
            lookup
                .transform_mut(entity)?
                .observe_parent_change_id(parent_id);
        }
    }
    lookup.transform(entity).map(Transform2D::local_change_id)
}

/// Clear the parent of `entity` while keeping its current world placement.
///
/// The world position, rotation and scale are baked into the local transform
/// before the parent handle is dropped. Returns false if `entity` has no
/// transform.
pub fn detach_keep_world<L: TransformLookupMut + ?Sized>(lookup: &mut L, entity: Entity) -> bool {
    let (Some(position), Some(rotation), Some(scale)) = (
        position_in_world(&*lookup, entity),
        rotation_in_world(&*lookup, entity),
        scale_in_world(&*lookup, entity),
    ) else {
        return false;
    };
    let Some(mut transform) = lookup.transform_mut(entity) else {
        return false;
    };
    transform.set_parent(None);
    transform.set_position(position);
    transform.set_rotation(rotation);
    transform.set_scale(scale);
    true
}

/// Cache every dirty local matrix once all mutation for the step is done.
///
/// Parent handles left dangling by a despawn are cleared here as well, so
/// the rest of the step reads those entities as plain roots.
pub fn refresh_local_matrices(mut query: Query<(Entity, &mut Transform2D)>) {
    let stale: Vec<(Entity, Entity)> = query
        .iter()
        .filter_map(|(entity, transform)| {
            let parent = transform.parent()?;
            query.get(parent).is_err().then_some((entity, parent))
        })
        .collect();
    for (entity, parent) in stale {
        if let Ok((_, mut transform)) = query.get_mut(entity) {
            clear_stale_parent(&mut transform, entity, parent);
        }
    }

    for (_, mut transform) in query.iter_mut() {
        if transform.is_dirty() {
            transform.local_matrix();
        }
    }
}

/// Compute [`GlobalTransform2D`] for every entity with a [`Transform2D`].
///
/// Entities that already have a `GlobalTransform2D` are updated in place.
/// Entities missing the component get it inserted via deferred [`Commands`]
/// (visible after the next sync point).
pub fn propagate_transforms(
    transforms: Query<&Transform2D>,
    entities: Query<Entity, With<Transform2D>>,
    mut globals: Query<&mut GlobalTransform2D>,
    mut commands: Commands,
) {
    for entity in entities.iter() {
        let Some(global) = GlobalTransform2D::compute(&transforms, entity) else {
            continue;
        };
        if let Ok(mut gt) = globals.get_mut(entity) {
            *gt = global;
        } else {
            commands.entity(entity).insert(global);
        }
    }
}
