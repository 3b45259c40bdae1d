//! Hazard Engine entry point.
//!
//! Runs a scene of frame-stepped hazards either headless (a fixed number of
//! simulation frames, logging what the actors do) or in a raylib window with
//! placeholder art.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 60
//! cargo run --release -- --window
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};

use hazardengine::behaviors::Behavior;
use hazardengine::behaviors::smashhammer::HammerState;
use hazardengine::components::mapposition::MapPosition;
use hazardengine::components::ttl::Ttl;
use hazardengine::game;
use hazardengine::resources::gameconfig::GameConfig;
use hazardengine::resources::scenelayout::SceneLayout;
use hazardengine::resources::worldtime::WorldTime;

/// Hazard Engine 2D
#[derive(Parser)]
#[command(version, about = "Frame-stepped hazards on bevy_ecs")]
struct Cli {
    /// INI configuration file. Missing files fall back to defaults.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON scene layout. The built-in test room is used when omitted.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Simulation frames to run in headless mode.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Open a window and run until it is closed.
    #[cfg(feature = "raylib")]
    #[arg(long)]
    window: bool,

    /// Directory holding the sound effects, used in window mode.
    #[cfg(feature = "raylib")]
    #[arg(long, value_name = "DIR", default_value = "./assets/sounds")]
    sounds: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        info!("{}; using default configuration", e);
    }

    let layout = match &cli.scene {
        Some(path) => match SceneLayout::load_from_file(&path.to_string_lossy()) {
            Ok(layout) => layout,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => SceneLayout::builtin(),
    };

    let mut world = World::new();
    game::setup_world(&mut world, config);
    game::load_scene(&mut world, &layout);
    let mut schedule = game::build_update_schedule();

    #[cfg(feature = "raylib")]
    if cli.window {
        window::run(&mut world, &mut schedule, &cli.sounds);
        return;
    }

    run_headless(&mut world, &mut schedule, cli.frames);
}

fn run_headless(world: &mut World, schedule: &mut Schedule, frames: u64) {
    info!("Running {} frame(s) headless", frames);

    let mut last_states = hammer_states(world);
    let mut peak_effects = 0usize;
    for _ in 0..frames {
        game::tick(world, schedule);

        let frame = world.resource::<WorldTime>().frame_count;
        let states = hammer_states(world);
        for ((entity, old, _), (_, new, position)) in last_states.iter().zip(&states) {
            if std::mem::discriminant(old) != std::mem::discriminant(new) {
                info!(
                    "frame {:>4}: hammer {:?} {:?} -> {:?} at ({}, {})",
                    frame, entity, old, new, position.x, position.y
                );
            }
        }
        last_states = states;

        let live_effects = world.query::<&Ttl>().iter(world).count();
        peak_effects = peak_effects.max(live_effects);
    }

    for (entity, state, position) in &last_states {
        info!(
            "hammer {:?}: {:?} at ({}, {})",
            entity, state, position.x, position.y
        );
    }
    info!(
        "Done: {} hammer(s), at most {} live effect(s) at once",
        last_states.len(),
        peak_effects
    );
}

fn hammer_states(world: &mut World) -> Vec<(Entity, HammerState, MapPosition)> {
    let mut states: Vec<_> = world
        .query::<(Entity, &Behavior, &MapPosition)>()
        .iter(world)
        .map(|(entity, behavior, position)| {
            let Behavior::SmashHammer(hammer) = behavior;
            (entity, hammer.state(), *position)
        })
        .collect();
    states.sort_by_key(|(entity, ..)| *entity);
    states
}

#[cfg(feature = "raylib")]
mod window {
    use std::rc::Rc;

    use bevy_ecs::prelude::*;
    use log::info;
    use raylib::prelude::{Color, RaylibDraw};

    use hazardengine::game;
    use hazardengine::renderer::raylib_backend::RaylibBackend;
    use hazardengine::resources::audio::{setup_audio, shutdown_audio};
    use hazardengine::resources::gameconfig::GameConfig;
    use hazardengine::resources::rendertarget::RenderTarget;
    use hazardengine::resources::texturestore::TextureStore;
    use hazardengine::systems::render::render_pass;

    pub fn run(world: &mut World, schedule: &mut Schedule, sounds_dir: &str) {
        let config = world.resource::<GameConfig>().clone();

        let mut builder = raylib::init();
        builder
            .size(config.window_width as i32, config.window_height as i32)
            .resizable()
            .title("Hazard Engine");
        if config.vsync {
            builder.vsync();
        }
        if config.fullscreen {
            builder.fullscreen();
        }
        let (mut rl, thread) = builder.build();
        rl.set_target_fps(config.target_fps);

        setup_audio(world);
        game::request_sound_loading(world, sounds_dir);

        // GPU objects need the window's context: create them after it and
        // drop them before it.
        let backend = Rc::new(RaylibBackend::new());
        let textures = game::load_placeholder_textures(world, &backend);
        info!("Loaded {} placeholder texture(s)", textures);
        let render_target = RenderTarget::new(&backend, config.render_width, config.render_height);

        let tick_seconds = config.tick_seconds();
        let mut accumulator = 0.0f32;
        while !rl.window_should_close() {
            accumulator += rl.get_frame_time();
            while accumulator >= tick_seconds {
                game::tick(world, schedule);
                accumulator -= tick_seconds;
            }

            let (screen_w, screen_h) = (rl.get_screen_width(), rl.get_screen_height());
            let mut d = rl.begin_drawing(&thread);
            {
                let _bound = render_target.texture.bind();
                d.clear_background(Color::new(24, 20, 32, 255));
                render_pass::<RaylibBackend>(world);
            }
            d.clear_background(Color::BLACK);
            render_target.present(screen_w, screen_h);
        }

        drop(render_target);
        world.remove_non_send_resource::<TextureStore<RaylibBackend>>();
        info!("{} GPU texture(s) left at shutdown", backend.live_textures());
        drop(backend);
        shutdown_audio(world);
    }
}
