use bevy_ecs::prelude::Component;

/// Draw order for sprites: higher values are drawn later (on top).
/// Entities without a `ZIndex` draw at 0.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
