use bevy_ecs::prelude::Component;

/// Marker for entities whose [`BoxCollider`](crate::components::boxcollider::BoxCollider)
/// blocks other moving bodies.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Solid;
