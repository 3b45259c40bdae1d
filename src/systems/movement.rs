//! Collision-aware movement resolver.
//!
//! Behaviors request displacements through [`move_vertically`] and
//! [`move_horizontally`]. The entity is moved unit by unit until the full
//! distance is covered or the next unit would overlap solid geometry.
//!
//! A blocked move still keeps whatever part of the distance could be
//! covered: the entity ends up touching the obstruction and
//! [`MovementResult::Obstructed`] is reported.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::{BoxCollider, bounds_of};
use crate::components::mapposition::MapPosition;
use crate::resources::collision::{Axis, CollisionChecker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementResult {
    /// The whole requested displacement was applied.
    Completed,
    /// Movement stopped early (possibly after zero units).
    Obstructed,
}

pub fn move_vertically<C>(checker: &C, entity: &mut EntityWorldMut<'_>, delta: i32) -> MovementResult
where
    C: CollisionChecker + ?Sized,
{
    move_along(checker, entity, Axis::Vertical, delta)
}

pub fn move_horizontally<C>(checker: &C, entity: &mut EntityWorldMut<'_>, delta: i32) -> MovementResult
where
    C: CollisionChecker + ?Sized,
{
    move_along(checker, entity, Axis::Horizontal, delta)
}

/// Move `entity` by `delta` units along `axis`.
///
/// An entity without [`MapPosition`] cannot move and reports `Obstructed`
/// for any non-zero delta.
pub fn move_along<C>(
    checker: &C,
    entity: &mut EntityWorldMut<'_>,
    axis: Axis,
    delta: i32,
) -> MovementResult
where
    C: CollisionChecker + ?Sized,
{
    if delta == 0 {
        return MovementResult::Completed;
    }

    let Some(position) = entity.get::<MapPosition>().copied() else {
        return MovementResult::Obstructed;
    };
    let bbox = bounds_of(position, entity.get::<BoxCollider>());
    let achieved = checker.advance(entity.id(), bbox, axis, delta);

    if achieved != 0 {
        if let Some(mut position) = entity.get_mut::<MapPosition>() {
            match axis {
                Axis::Horizontal => position.x += achieved,
                Axis::Vertical => position.y += achieved,
            }
        }
    }

    if achieved == delta {
        MovementResult::Completed
    } else {
        MovementResult::Obstructed
    }
}
