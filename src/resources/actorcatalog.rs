//! Archetypes that can be spawned at runtime by gameplay code.
//!
//! Behaviors ask for effects by [`ActorId`]; the catalog decides what such an
//! entity looks like and how long it lives. Only visual-only, self-destructing
//! effects are described here.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorId {
    SmokeCloudFx,
}

/// Appearance and lifetime of a one-shot effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotSpec {
    pub tex_key: String,
    pub frame_width: i32,
    pub frame_height: i32,
    pub first_frame: i32,
    pub last_frame: i32,
    /// Extra ticks each animation frame is held.
    pub delay_frames: u32,
}

impl OneShotSpec {
    /// Frames the effect stays alive: one full pass of its animation.
    pub fn lifetime_frames(&self) -> u32 {
        let count = (self.last_frame - self.first_frame + 1).max(1) as u32;
        count * (self.delay_frames + 1)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ActorCatalog {
    pub one_shots: FxHashMap<ActorId, OneShotSpec>,
}

impl Default for ActorCatalog {
    fn default() -> Self {
        let mut one_shots = FxHashMap::default();
        one_shots.insert(
            ActorId::SmokeCloudFx,
            OneShotSpec {
                tex_key: "smoke_cloud".into(),
                frame_width: 24,
                frame_height: 24,
                first_frame: 0,
                last_frame: 4,
                delay_frames: 0,
            },
        );
        Self { one_shots }
    }
}

impl ActorCatalog {
    pub fn get(&self, id: ActorId) -> Option<&OneShotSpec> {
        self.one_shots.get(&id)
    }
}
