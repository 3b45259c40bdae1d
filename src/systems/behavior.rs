//! Behavior pass.
//!
//! [`behavior_system`] steps every entity with a
//! [`Behavior`](crate::behaviors::Behavior) exactly once per frame, in entity
//! order. Before the first behavior runs, solid bodies are snapshotted into a
//! [`CollisionWorld`]; geometry is therefore read-only for the whole pass.
//! Side effects are buffered in an [`EffectQueue`] and applied when all
//! behaviors are done.

use bevy_ecs::prelude::*;

use crate::behaviors::gateway::EffectQueue;
use crate::behaviors::{Behavior, BehaviorDeps};
use crate::components::boxcollider::{BoxCollider, bounds_of};
use crate::components::mapposition::MapPosition;
use crate::resources::collision::{CollisionMap, CollisionWorld};
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;

/// Exclusive system that updates all behaviors.
///
/// Uses the [`Viewport`] resource (default if absent) for on-screen checks,
/// and [`CollisionMap`] plus all [`Solid`](crate::components::solid::Solid)
/// bodies as collision geometry. Entities without [`MapPosition`] are
/// skipped.
pub fn behavior_system(world: &mut World) {
    let mut actors: Vec<Entity> = world
        .query_filtered::<Entity, With<Behavior>>()
        .iter(world)
        .collect();
    actors.sort();
    if actors.is_empty() {
        return;
    }

    let viewport = world.get_resource::<Viewport>().copied().unwrap_or_default();
    let frame = world
        .get_resource::<WorldTime>()
        .map(|time| time.frame_count)
        .unwrap_or(0);
    let solids = CollisionWorld::collect_solids(world);

    let mut effects = EffectQueue::default();
    world.init_resource::<CollisionMap>();
    world.resource_scope(|world, map: Mut<CollisionMap>| {
        let collision = CollisionWorld::new(&map, solids);

        for actor in actors {
            let Ok(mut entity) = world.get_entity_mut(actor) else {
                continue;
            };
            let Some(mut behavior) = entity.get::<Behavior>().copied() else {
                continue;
            };
            let Some(position) = entity.get::<MapPosition>().copied() else {
                continue;
            };

            let is_on_screen =
                viewport.is_visible(&bounds_of(position, entity.get::<BoxCollider>()));
            let mut deps = BehaviorDeps {
                collision: &collision,
                effects: &mut effects,
                frame,
            };
            behavior.update(&mut deps, is_on_screen, &mut entity);

            if let Some(mut stored) = entity.get_mut::<Behavior>() {
                stored.set_if_neq(behavior);
            }
        }
    });

    effects.apply(world);
}
