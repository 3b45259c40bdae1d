//! Smash hammer hazard.
//!
//! A hammer hangs from the ceiling, waits, then slams down one unit per
//! frame until it hits the floor (or anything solid), and finally pulls its
//! shaft back up to the rest position. While it is extended the entity hurts
//! the player. Each unit of extension adds one shaft segment to the
//! entity's [`ExtendedFrameList`].
//!
//! ```text
//! Waiting --19 frames--> PushingDown --obstructed--> PullingUp --step 0--> Waiting
//! ```
//!
//! The warm-up timer does not start while the hammer is off-screen, so a
//! hammer scrolled into view always begins its cycle from rest.

use bevy_ecs::prelude::*;
use log::debug;

use crate::behaviors::BehaviorDeps;
use crate::components::damaging::PlayerDamaging;
use crate::components::extendedframes::ExtendedFrameList;
use crate::components::mapposition::MapPosition;
use crate::events::audio::SoundId;
use crate::resources::actorcatalog::ActorId;
use crate::systems::movement::{MovementResult, move_vertically};

/// Frames spent waiting before every smash.
pub const WARMUP_FRAMES: u32 = 19;
/// Where the impact smoke appears, relative to the hammer position.
pub const SMOKE_OFFSET: MapPosition = MapPosition { x: 0, y: 4 };
/// Sprite-sheet frame used for shaft segments.
pub const SHAFT_FRAME: i32 = 1;
/// Damage dealt while extended.
pub const DAMAGE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HammerState {
    Waiting { frames_elapsed: u32 },
    PushingDown,
    PullingUp,
}

impl HammerState {
    fn waiting() -> Self {
        HammerState::Waiting { frames_elapsed: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmashHammer {
    state: HammerState,
    extension_step: i32,
}

impl Default for SmashHammer {
    fn default() -> Self {
        Self::new()
    }
}

impl SmashHammer {
    pub fn new() -> Self {
        Self {
            state: HammerState::waiting(),
            extension_step: 0,
        }
    }

    pub fn state(&self) -> HammerState {
        self.state
    }

    /// Units the hammer head currently sits below its rest position.
    pub fn extension_step(&self) -> i32 {
        self.extension_step
    }

    pub fn update(
        &mut self,
        deps: &mut BehaviorDeps<'_>,
        is_on_screen: bool,
        entity: &mut EntityWorldMut<'_>,
    ) {
        let Some(position) = entity.get::<MapPosition>().copied() else {
            return;
        };
        if !entity.contains::<ExtendedFrameList>() {
            entity.insert(ExtendedFrameList::default());
        }

        let previous_state = self.state;
        let previous_step = self.extension_step;

        match self.state {
            HammerState::Waiting { frames_elapsed } => self.wait(frames_elapsed, is_on_screen),
            HammerState::PushingDown => self.push_down(deps, entity, position),
            HammerState::PullingUp => self.pull_up(entity),
        }

        if self.extension_step != previous_step {
            if let Some(mut frames) = entity.get_mut::<ExtendedFrameList>() {
                frames.rebuild(self.extension_step, SHAFT_FRAME);
            }
        }

        if std::mem::discriminant(&self.state) != std::mem::discriminant(&previous_state) {
            debug!(
                "smash hammer {:?}: {:?} -> {:?} at frame {} (step {})",
                entity.id(),
                previous_state,
                self.state,
                deps.frame,
                self.extension_step
            );
        }
    }

    fn wait(&mut self, frames_elapsed: u32, is_on_screen: bool) {
        if frames_elapsed == 0 && !is_on_screen {
            return;
        }

        let frames_elapsed = frames_elapsed + 1;
        self.state = if frames_elapsed == WARMUP_FRAMES {
            HammerState::PushingDown
        } else {
            HammerState::Waiting { frames_elapsed }
        };
    }

    fn push_down(
        &mut self,
        deps: &mut BehaviorDeps<'_>,
        entity: &mut EntityWorldMut<'_>,
        position: MapPosition,
    ) {
        if self.extension_step == 0 {
            entity.insert(PlayerDamaging::new(DAMAGE));
        }

        match move_vertically(deps.collision, entity, 1) {
            MovementResult::Completed => self.extension_step += 1,
            // A blocked one-unit push moves nothing, so `position` is still current.
            MovementResult::Obstructed => {
                deps.effects.play_sound(SoundId::HammerSmash);
                deps.effects
                    .spawn_one_shot(ActorId::SmokeCloudFx, position + SMOKE_OFFSET);
                self.state = HammerState::PullingUp;
            }
        }
    }

    fn pull_up(&mut self, entity: &mut EntityWorldMut<'_>) {
        // A hammer blocked right at rest has nothing to retract.
        if self.extension_step > 0 {
            if let Some(mut position) = entity.get_mut::<MapPosition>() {
                position.y -= 1;
            }
            self.extension_step -= 1;
        }

        if self.extension_step == 0 {
            entity.remove::<PlayerDamaging>();
            self.state = HammerState::waiting();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::gateway::EffectQueue;
    use crate::components::boxcollider::Aabb;
    use crate::resources::collision::CollisionChecker;

    /// Floor below which nothing may move.
    struct Floor(i32);

    impl CollisionChecker for Floor {
        fn is_blocked(&self, _mover: Entity, bbox: &Aabb, _dx: i32, dy: i32) -> bool {
            bbox.bottom() + dy > self.0
        }
    }

    fn step(
        hammer: &mut SmashHammer,
        world: &mut World,
        id: Entity,
        floor: &Floor,
        effects: &mut EffectQueue,
        on_screen: bool,
    ) {
        let mut deps = BehaviorDeps {
            collision: floor,
            effects,
            frame: 0,
        };
        let mut entity = world.entity_mut(id);
        hammer.update(&mut deps, on_screen, &mut entity);
    }

    #[test]
    fn test_new_hammer_is_waiting_at_rest() {
        let hammer = SmashHammer::new();
        assert_eq!(hammer.state(), HammerState::Waiting { frames_elapsed: 0 });
        assert_eq!(hammer.extension_step(), 0);
    }

    #[test]
    fn test_first_update_creates_frame_list() {
        let mut world = World::new();
        let id = world.spawn(MapPosition::new(0, 0)).id();
        let mut hammer = SmashHammer::new();
        let mut effects = EffectQueue::default();

        step(&mut hammer, &mut world, id, &Floor(10), &mut effects, false);

        assert!(world.get::<ExtendedFrameList>(id).unwrap().is_empty());
    }

    #[test]
    fn test_blocked_at_rest_returns_to_waiting_without_moving() {
        let mut world = World::new();
        let id = world.spawn(MapPosition::new(0, 4)).id();
        let mut hammer = SmashHammer {
            state: HammerState::PushingDown,
            extension_step: 0,
        };
        let mut effects = EffectQueue::default();
        let floor = Floor(5);

        step(&mut hammer, &mut world, id, &floor, &mut effects, true);
        assert_eq!(hammer.state(), HammerState::PullingUp);
        assert!(world.get::<PlayerDamaging>(id).is_some());

        step(&mut hammer, &mut world, id, &floor, &mut effects, true);
        assert_eq!(hammer.state(), HammerState::Waiting { frames_elapsed: 0 });
        assert_eq!(hammer.extension_step(), 0);
        assert!(world.get::<PlayerDamaging>(id).is_none());
        assert_eq!(world.get::<MapPosition>(id), Some(&MapPosition::new(0, 4)));
    }

    #[test]
    fn test_entity_without_position_is_left_alone() {
        let mut world = World::new();
        let id = world.spawn_empty().id();
        let mut hammer = SmashHammer {
            state: HammerState::PushingDown,
            extension_step: 0,
        };
        let mut effects = EffectQueue::default();

        step(&mut hammer, &mut world, id, &Floor(0), &mut effects, true);

        assert_eq!(hammer.state(), HammerState::PushingDown);
        assert!(effects.is_empty());
        assert!(world.get::<PlayerDamaging>(id).is_none());
        assert!(world.get::<ExtendedFrameList>(id).is_none());
    }

    #[test]
    fn test_impact_smoke_spawns_below_head() {
        let mut world = World::new();
        let id = world.spawn(MapPosition::new(3, 6)).id();
        let mut hammer = SmashHammer {
            state: HammerState::PushingDown,
            extension_step: 2,
        };
        let mut effects = EffectQueue::default();

        step(&mut hammer, &mut world, id, &Floor(7), &mut effects, true);

        assert_eq!(hammer.state(), HammerState::PullingUp);
        assert_eq!(effects.sounds, vec![SoundId::HammerSmash]);
        assert_eq!(
            effects.spawns,
            vec![(ActorId::SmokeCloudFx, MapPosition::new(3, 10))]
        );
    }
}
