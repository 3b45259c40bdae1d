//! High-level world setup and the per-frame schedule.
//!
//! - [`setup_world`] inserts every resource the simulation reads.
//! - [`load_scene`] turns a [`SceneLayout`] into collision geometry and actors.
//! - [`build_update_schedule`] + [`tick`] advance the simulation one frame.
//!
//! Frame order: animations and lifetimes of existing effects first, then the
//! behavior pass (which may spawn new effects), then audio forwarding. A
//! freshly spawned effect is therefore shown on its first frame before it
//! starts animating.

use std::rc::Rc;

use bevy_ecs::prelude::*;
use log::info;

use crate::behaviors::Behavior;
use crate::behaviors::smashhammer::SmashHammer;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::solid::Solid;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::{AudioCmd, AudioMessage, SoundId};
use crate::renderer::backend::RenderBackend;
use crate::renderer::image::{Image, Pixel};
use crate::renderer::texture::Texture;
use crate::resources::actorcatalog::ActorCatalog;
use crate::resources::audio::AudioBridge;
use crate::resources::collision::CollisionMap;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scenelayout::SceneLayout;
use crate::resources::texturestore::TextureStore;
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_system;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::behavior::behavior_system;
use crate::systems::ttl::ttl_system;

/// Texture key of the hammer sprite sheet: frame 0 head, frame 1 shaft.
pub const HAMMER_TEX_KEY: &str = "smash_hammer";
pub const HAMMER_Z: i32 = 10;

/// Insert the resources the simulation and its systems expect.
pub fn setup_world(world: &mut World, config: GameConfig) {
    let (view_w, view_h) = config.view_units();
    world.insert_resource(config);
    world.insert_resource(WorldTime::default());
    world.insert_resource(Viewport::new(0, 0, view_w, view_h));
    world.insert_resource(CollisionMap::default());
    world.insert_resource(ActorCatalog::default());
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();
}

/// Ask the audio thread to load the effects gameplay can trigger.
pub fn request_sound_loading(world: &mut World, asset_dir: &str) {
    let mut messages = world.resource_mut::<Messages<AudioCmd>>();
    for sound in SoundId::ALL {
        messages.write(AudioCmd::LoadFx {
            id: sound.key().to_string(),
            path: format!("{}/{}.wav", asset_dir, sound.key()),
        });
    }
}

/// Spawn a smash hammer resting at `position`.
pub fn spawn_smash_hammer(world: &mut World, position: MapPosition) -> Entity {
    world
        .spawn((
            position,
            BoxCollider::new(1, 1),
            Sprite::new(HAMMER_TEX_KEY, 8, 8),
            ZIndex(HAMMER_Z),
            Behavior::from(SmashHammer::new()),
        ))
        .id()
}

/// Spawn a solid block that stops moving actors.
pub fn spawn_solid_block(world: &mut World, position: MapPosition, width: i32, height: i32) -> Entity {
    world
        .spawn((position, BoxCollider::new(width, height), Solid))
        .id()
}

/// Replace collision geometry and viewport with the scene's, and spawn its
/// actors. Returns the spawned hammer entities.
pub fn load_scene(world: &mut World, layout: &SceneLayout) -> Vec<Entity> {
    world.insert_resource(layout.collision_map());
    world.insert_resource(layout.viewport());

    let hammers: Vec<Entity> = layout
        .hammer_positions()
        .into_iter()
        .map(|position| spawn_smash_hammer(world, position))
        .collect();

    info!(
        "Scene loaded: {}x{} units, {} hammer(s)",
        layout.width(),
        layout.height(),
        hammers.len()
    );
    hammers
}

/// Systems run once per simulation frame, in order.
pub fn build_update_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            animation_system,
            ttl_system,
            behavior_system,
            forward_audio_cmds.run_if(resource_exists::<AudioBridge>),
            update_bevy_audio_cmds,
            poll_audio_messages.run_if(resource_exists::<AudioBridge>),
            update_bevy_audio_messages,
        )
            .chain(),
    );
    schedule
}

/// Advance the world by one simulation frame.
pub fn tick(world: &mut World, schedule: &mut Schedule) {
    let tick_seconds = world
        .get_resource::<GameConfig>()
        .map(|config| config.tick_seconds())
        .unwrap_or(1.0 / 15.0);
    {
        let mut time = world.get_resource_or_insert_with(WorldTime::default);
        time.frame_count += 1;
        time.delta = tick_seconds * time.time_scale;
        time.elapsed += time.delta;
    }
    schedule.run(world);
}

/// Flat-colored sprite sheets for every texture key the game references.
///
/// Each sheet is a horizontal strip of frames; frames get darker from left
/// to right so animations are visible without real art.
pub fn placeholder_images(catalog: &ActorCatalog) -> Vec<(String, Image)> {
    let mut sheets = vec![(
        HAMMER_TEX_KEY.to_string(),
        strip(8, 8, 2, Pixel::rgba(170, 170, 190, 255)),
    )];
    for spec in catalog.one_shots.values() {
        let frames = (spec.last_frame + 1).max(1) as u32;
        sheets.push((
            spec.tex_key.clone(),
            strip(
                spec.frame_width as u32,
                spec.frame_height as u32,
                frames,
                EFFECT_COLOR,
            ),
        ));
    }
    sheets
}

const EFFECT_COLOR: Pixel = Pixel::rgba(200, 200, 200, 220);

fn strip(frame_width: u32, frame_height: u32, frames: u32, color: Pixel) -> Image {
    let mut image = Image::filled(frame_width * frames, frame_height, Pixel::TRANSPARENT);
    for frame in 0..frames {
        let shade = |c: u8| (c as u32 * (frames + 1 - frame) / (frames + 1)) as u8;
        let tint = Pixel::rgba(shade(color.r), shade(color.g), shade(color.b), color.a);
        for y in 1..frame_height.saturating_sub(1) {
            for x in 1..frame_width.saturating_sub(1) {
                image.set_pixel(frame * frame_width + x, y, tint);
            }
        }
    }
    image
}

/// Upload the placeholder sheets and insert them as a non-send
/// [`TextureStore`]. Returns the number of textures created.
pub fn load_placeholder_textures<B: RenderBackend + 'static>(
    world: &mut World,
    backend: &Rc<B>,
) -> usize {
    let images = world
        .get_resource::<ActorCatalog>()
        .map(placeholder_images)
        .unwrap_or_else(|| placeholder_images(&ActorCatalog::default()));

    let mut store = TextureStore::<B>::new();
    for (key, image) in &images {
        store.insert(key.as_str(), Texture::new(backend, image));
    }
    let count = store.len();
    world.insert_non_send_resource(store);
    count
}
