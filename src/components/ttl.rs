//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts simulation frames. When the remaining count
//! reaches zero, the entity is despawned by
//! [`ttl_system`](crate::systems::ttl::ttl_system). There is no callback; it
//! is a "fire and forget" mechanism used by one-shot visual effects.

use bevy_ecs::prelude::Component;

/// Time-to-live component that automatically despawns entities after a
/// number of frames.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ttl {
    /// Frames left before despawn.
    pub remaining_frames: u32,
}

impl Ttl {
    /// Create a new Ttl that expires after `frames` simulation frames.
    pub fn new(frames: u32) -> Self {
        Ttl {
            remaining_frames: frames,
        }
    }
}
