//! TTL (time-to-live) system.
//!
//! Each frame, [`ttl_system`] decrements every [`Ttl`] counter and despawns
//! the entities whose counter reached zero.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(mut query: Query<(Entity, &mut Ttl)>, mut commands: Commands) {
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining_frames = ttl.remaining_frames.saturating_sub(1);
        if ttl.remaining_frames == 0 {
            commands.entity(entity).try_despawn();
        }
    }
}
