//! Damage marker component.
//!
//! Entities carrying [`PlayerDamaging`] hurt the player on overlap. Hazards
//! attach and remove it themselves while they are dangerous.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerDamaging {
    /// Health points taken from the player per hit.
    pub amount: i32,
}

impl PlayerDamaging {
    pub fn new(amount: i32) -> Self {
        Self { amount }
    }
}
