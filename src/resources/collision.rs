//! World collision model used by the movement resolver.
//!
//! Two sources of obstruction exist: the static tile grid stored in the
//! [`CollisionMap`] resource, and entities tagged [`Solid`] with a
//! [`BoxCollider`]. Behaviors never query these directly; they receive a
//! [`CollisionChecker`] and go through
//! [`move_vertically`](crate::systems::movement::move_vertically).
//!
//! The ECS-backed checker, [`CollisionWorld`], is a snapshot taken before the
//! behavior pass. Geometry is read-only for the rest of that pass.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::{Aabb, BoxCollider};
use crate::components::mapposition::MapPosition;
use crate::components::solid::Solid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Query interface of the collision model.
///
/// Implementations only answer the single-unit question; the provided
/// [`advance`](CollisionChecker::advance) walks a longer displacement one
/// unit at a time. Answers must be deterministic for the same geometry.
pub trait CollisionChecker {
    /// Would `bbox`, translated by `(dx, dy)`, overlap anything solid other
    /// than `mover` itself?
    fn is_blocked(&self, mover: Entity, bbox: &Aabb, dx: i32, dy: i32) -> bool;

    /// Walk `amount` units along `axis` and return the signed displacement
    /// that was actually possible before hitting an obstruction.
    fn advance(&self, mover: Entity, bbox: Aabb, axis: Axis, amount: i32) -> i32 {
        let step = amount.signum();
        let (dx, dy) = match axis {
            Axis::Horizontal => (step, 0),
            Axis::Vertical => (0, step),
        };

        let mut achieved = 0;
        let mut current = bbox;
        while achieved != amount {
            if self.is_blocked(mover, &current, dx, dy) {
                break;
            }
            current = current.translated(dx, dy);
            achieved += step;
        }
        achieved
    }
}

/// Static tile collision grid, in world units (one cell per unit).
///
/// A map created with [`CollisionMap::new`] treats everything outside its
/// bounds as solid. The default map is empty and unbounded.
#[derive(Resource, Debug, Clone, Default)]
pub struct CollisionMap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
    solid_outside: bool,
}

impl CollisionMap {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
            solid_outside: true,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    pub fn set_solid(&mut self, x: i32, y: i32, solid: bool) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = solid;
        }
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(index) => self.cells[index],
            None => self.solid_outside,
        }
    }

    /// Does any solid cell overlap `bbox`?
    pub fn overlaps_solid(&self, bbox: &Aabb) -> bool {
        (bbox.top()..bbox.bottom())
            .any(|y| (bbox.left()..bbox.right()).any(|x| self.is_solid(x, y)))
    }
}

impl CollisionChecker for CollisionMap {
    fn is_blocked(&self, _mover: Entity, bbox: &Aabb, dx: i32, dy: i32) -> bool {
        self.overlaps_solid(&bbox.translated(dx, dy))
    }
}

/// Frame-local view of all collision geometry: the tile map plus the bounds
/// of every solid body at the time of the snapshot.
pub struct CollisionWorld<'a> {
    map: &'a CollisionMap,
    solids: Vec<(Entity, Aabb)>,
}

impl<'a> CollisionWorld<'a> {
    pub fn new(map: &'a CollisionMap, solids: Vec<(Entity, Aabb)>) -> Self {
        Self { map, solids }
    }

    /// Gather the bounds of all [`Solid`] bodies currently in `world`.
    pub fn collect_solids(world: &mut World) -> Vec<(Entity, Aabb)> {
        let mut query = world.query_filtered::<(Entity, &MapPosition, &BoxCollider), With<Solid>>();
        query
            .iter(world)
            .map(|(entity, position, collider)| (entity, collider.aabb(*position)))
            .collect()
    }

    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }
}

impl CollisionChecker for CollisionWorld<'_> {
    fn is_blocked(&self, mover: Entity, bbox: &Aabb, dx: i32, dy: i32) -> bool {
        let moved = bbox.translated(dx, dy);
        if self.map.overlaps_solid(&moved) {
            return true;
        }
        self.solids
            .iter()
            .any(|(entity, solid)| *entity != mover && moved.intersects(solid))
    }
}
