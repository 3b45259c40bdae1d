//! Integer world-space position.
//!
//! One world unit is one tile of the level grid. Y grows downwards, so a
//! positive vertical displacement moves an entity towards the floor.

use std::ops::Add;

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapPosition {
    pub x: i32,
    pub y: i32,
}

impl MapPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position displaced by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for MapPosition {
    type Output = MapPosition;

    fn add(self, rhs: MapPosition) -> MapPosition {
        self.offset(rhs.x, rhs.y)
    }
}
