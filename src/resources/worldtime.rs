use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// Gameplay advances in whole frames; `frame_count` is the authoritative
/// counter. `elapsed` and `delta` are kept in seconds for presentation code
/// and follow from the configured tick rate.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
