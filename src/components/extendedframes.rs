//! Additional sprite layers drawn on top of an entity's base sprite.
//!
//! Actors that stretch (pistons, hammers, extending platforms) keep their base
//! sprite and draw one extra frame per unit of extension. The list is owned by
//! the actor's behavior and rebuilt whenever the extension changes.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

/// One extra layer: the sprite-sheet frame to draw and where to draw it.
///
/// Offsets are in world units, relative to the cell directly above the
/// entity position, so `(0, 0)` sits on top of the base sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdditionalFrame {
    pub frame: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtendedFrameList {
    pub frames: SmallVec<[AdditionalFrame; 8]>,
}

impl ExtendedFrameList {
    /// Replace the list with `step` copies of `frame`, stacked upwards:
    /// entry `i` sits at offset `(0, -i)`.
    pub fn rebuild(&mut self, step: i32, frame: i32) {
        self.frames.clear();
        for i in 0..step.max(0) {
            self.frames.push(AdditionalFrame {
                frame,
                offset_x: 0,
                offset_y: -i,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
