//! Side-effect gateway between behaviors and the rest of the engine.
//!
//! Behaviors request sounds and effect spawns through the [`SideEffects`]
//! trait instead of touching the audio bridge or the world's spawner. The
//! in-engine implementation, [`EffectQueue`], buffers requests during the
//! behavior pass and applies them afterwards in [`EffectQueue::apply`].

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::ttl::Ttl;
use crate::events::audio::{AudioCmd, SoundId};
use crate::resources::actorcatalog::{ActorCatalog, ActorId, OneShotSpec};

/// World-visible effects a behavior may trigger.
///
/// Both operations are fire-and-forget: nothing is returned and the caller
/// never waits on audio or spawning.
pub trait SideEffects {
    fn play_sound(&mut self, id: SoundId);

    /// Spawn a self-contained entity of archetype `actor` at `position`.
    fn spawn_one_shot(&mut self, actor: ActorId, position: MapPosition);
}

/// Buffered side effects of one behavior pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EffectQueue {
    pub sounds: Vec<SoundId>,
    pub spawns: Vec<(ActorId, MapPosition)>,
}

impl SideEffects for EffectQueue {
    fn play_sound(&mut self, id: SoundId) {
        self.sounds.push(id);
    }

    fn spawn_one_shot(&mut self, actor: ActorId, position: MapPosition) {
        self.spawns.push((actor, position));
    }
}

impl EffectQueue {
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty() && self.spawns.is_empty()
    }

    /// Turn queued sounds into [`AudioCmd::PlayFx`] messages and spawn the
    /// queued one-shot effects using the [`ActorCatalog`].
    pub fn apply(self, world: &mut World) {
        if self.is_empty() {
            return;
        }

        if !self.sounds.is_empty() {
            match world.get_resource_mut::<Messages<AudioCmd>>() {
                Some(mut messages) => {
                    for sound in &self.sounds {
                        messages.write(AudioCmd::PlayFx {
                            id: sound.key().to_string(),
                        });
                    }
                }
                None => warn!(
                    "No audio message queue, dropping {} sound(s)",
                    self.sounds.len()
                ),
            }
        }

        if self.spawns.is_empty() {
            return;
        }
        world.init_resource::<ActorCatalog>();
        world.resource_scope(|world, catalog: Mut<ActorCatalog>| {
            for (actor, position) in self.spawns {
                match catalog.get(actor) {
                    Some(spec) => {
                        let entity = spawn_one_shot(world, spec, position);
                        debug!("Spawned {:?} as {:?} at {:?}", actor, entity, position);
                    }
                    None => warn!("No one-shot archetype registered for {:?}", actor),
                }
            }
        });
    }
}

/// Spawn an animated, self-destructing visual effect.
pub fn spawn_one_shot(world: &mut World, spec: &OneShotSpec, position: MapPosition) -> Entity {
    world
        .spawn((
            position,
            Sprite::new(spec.tex_key.clone(), spec.frame_width, spec.frame_height)
                .with_frame(spec.first_frame),
            Animation::once(spec.first_frame, spec.last_frame).with_delay(spec.delay_frames),
            Ttl::new(spec.lifetime_frames()),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::system::SystemState;

    #[test]
    fn test_queue_records_requests_in_order() {
        let mut queue = EffectQueue::default();
        assert!(queue.is_empty());
        queue.play_sound(SoundId::HammerSmash);
        queue.spawn_one_shot(ActorId::SmokeCloudFx, MapPosition::new(1, 2));
        queue.spawn_one_shot(ActorId::SmokeCloudFx, MapPosition::new(5, 6));
        assert_eq!(queue.sounds, vec![SoundId::HammerSmash]);
        assert_eq!(
            queue.spawns,
            vec![
                (ActorId::SmokeCloudFx, MapPosition::new(1, 2)),
                (ActorId::SmokeCloudFx, MapPosition::new(5, 6))
            ]
        );
    }

    #[test]
    fn test_apply_writes_audio_and_spawns_effect() {
        let mut world = World::new();
        world.init_resource::<Messages<AudioCmd>>();

        let mut queue = EffectQueue::default();
        queue.play_sound(SoundId::HammerSmash);
        queue.spawn_one_shot(ActorId::SmokeCloudFx, MapPosition::new(3, 8));
        queue.apply(&mut world);

        world.resource_mut::<Messages<AudioCmd>>().update();
        let mut state = SystemState::<MessageReader<AudioCmd>>::new(&mut world);
        let mut reader = state.get_mut(&mut world);
        let cmds: Vec<AudioCmd> = reader.read().cloned().collect();
        assert_eq!(
            cmds,
            vec![AudioCmd::PlayFx {
                id: "hammer_smash".into()
            }]
        );

        let mut query = world.query::<(&MapPosition, &Sprite, &Ttl)>();
        let spawned: Vec<_> = query.iter(&world).collect();
        assert_eq!(spawned.len(), 1);
        let (position, sprite, ttl) = spawned[0];
        assert_eq!(*position, MapPosition::new(3, 8));
        assert_eq!(sprite.tex_key, "smoke_cloud");
        assert_eq!(ttl.remaining_frames, 5);
    }

    #[test]
    fn test_apply_without_audio_queue_still_spawns() {
        let mut world = World::new();
        let mut queue = EffectQueue::default();
        queue.play_sound(SoundId::HammerSmash);
        queue.spawn_one_shot(ActorId::SmokeCloudFx, MapPosition::default());
        queue.apply(&mut world);

        let mut query = world.query::<&Ttl>();
        assert_eq!(query.iter(&world).count(), 1);
    }
}
