//! Visible part of the world.
//!
//! Behaviors receive an `is_on_screen` flag derived from this rectangle so
//! that off-screen actors can hold their timers until the player sees them.
//! Update this resource to scroll the view.

use bevy_ecs::prelude::Resource;

use crate::components::boxcollider::Aabb;

/// World-unit rectangle currently shown on screen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        // 32x20 units: the in-game view next to the HUD at 320x200.
        Self {
            x: 0,
            y: 0,
            width: 32,
            height: 20,
        }
    }
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_visible(&self, bbox: &Aabb) -> bool {
        self.bounds().intersects(bbox)
    }

    pub fn scroll_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
