//! Per-entity behaviors.
//!
//! A behavior is a small state machine attached to one entity through the
//! [`Behavior`] component. The
//! [`behavior_system`](crate::systems::behavior::behavior_system) calls
//! [`Behavior::update`] once per simulation frame for every entity that has
//! one. Each behavior may move its entity through the movement resolver, add
//! or remove components on it, and request sounds and spawns through the
//! [`gateway`].
//!
//! Behaviors never look up engine services on their own: everything they
//! need from the outside arrives in [`BehaviorDeps`]. Tests can drive them
//! with a fake [`CollisionChecker`] and a recording [`SideEffects`].
//!
//! Submodules:
//! - [`gateway`] – the side-effect interface and its buffered implementation
//! - [`smashhammer`] – ceiling hammer that slams down and retracts

pub mod gateway;
pub mod smashhammer;

use bevy_ecs::prelude::*;

use crate::behaviors::gateway::SideEffects;
use crate::behaviors::smashhammer::SmashHammer;
use crate::resources::collision::CollisionChecker;

/// Capabilities handed to a behavior for one update.
pub struct BehaviorDeps<'a> {
    pub collision: &'a dyn CollisionChecker,
    pub effects: &'a mut dyn SideEffects,
    /// Number of the simulation frame being computed.
    pub frame: u64,
}

/// Closed set of entity behaviors.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    SmashHammer(SmashHammer),
}

impl Behavior {
    /// Advance the behavior by one frame.
    ///
    /// `entity` must carry a [`MapPosition`](crate::components::mapposition::MapPosition).
    pub fn update(
        &mut self,
        deps: &mut BehaviorDeps<'_>,
        is_on_screen: bool,
        entity: &mut EntityWorldMut<'_>,
    ) {
        match self {
            Behavior::SmashHammer(hammer) => hammer.update(deps, is_on_screen, entity),
        }
    }
}

impl From<SmashHammer> for Behavior {
    fn from(hammer: SmashHammer) -> Self {
        Behavior::SmashHammer(hammer)
    }
}
