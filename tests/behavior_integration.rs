//! Behavior pass integration tests: smash hammers driven through the full
//! update schedule, with scene geometry, solid bodies and the effect gateway.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;

use hazardengine::behaviors::Behavior;
use hazardengine::behaviors::smashhammer::{HammerState, SHAFT_FRAME, SmashHammer, WARMUP_FRAMES};
use hazardengine::components::damaging::PlayerDamaging;
use hazardengine::components::extendedframes::ExtendedFrameList;
use hazardengine::components::mapposition::MapPosition;
use hazardengine::components::sprite::Sprite;
use hazardengine::components::ttl::Ttl;
use hazardengine::events::audio::AudioCmd;
use hazardengine::game;
use hazardengine::resources::gameconfig::GameConfig;
use hazardengine::resources::scenelayout::SceneLayout;
use hazardengine::resources::viewport::Viewport;

/// Ten rows: ceiling, two hammers, a ledge under the right one, floor.
const ROOM: &[&str] = &[
    "################",
    "#...H......H...#",
    "#..............#",
    "#..............#",
    "#..........##..#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "################",
];

struct Room {
    world: World,
    schedule: Schedule,
    cmds: SystemState<MessageReader<'static, 'static, AudioCmd>>,
    sounds: Vec<String>,
}

impl Room {
    fn new(rows: &[&str]) -> (Self, Vec<Entity>) {
        let mut world = World::new();
        game::setup_world(&mut world, GameConfig::new());
        let layout = SceneLayout {
            grid: rows.iter().map(|row| row.to_string()).collect(),
            viewport: None,
        };
        let hammers = game::load_scene(&mut world, &layout);
        let cmds = SystemState::new(&mut world);
        let room = Room {
            world,
            schedule: game::build_update_schedule(),
            cmds,
            sounds: Vec::new(),
        };
        (room, hammers)
    }

    fn tick(&mut self) {
        game::tick(&mut self.world, &mut self.schedule);
        let mut reader = self.cmds.get_mut(&mut self.world);
        for cmd in reader.read() {
            if let AudioCmd::PlayFx { id } = cmd {
                self.sounds.push(id.clone());
            }
        }
    }

    fn run(&mut self, frames: u32) {
        for _ in 0..frames {
            self.tick();
        }
    }

    fn hammer(&self, entity: Entity) -> SmashHammer {
        match self.world.get::<Behavior>(entity) {
            Some(Behavior::SmashHammer(hammer)) => *hammer,
            None => panic!("entity {:?} has no behavior", entity),
        }
    }

    fn position(&self, entity: Entity) -> MapPosition {
        *self.world.get::<MapPosition>(entity).unwrap()
    }

    fn shaft_len(&self, entity: Entity) -> usize {
        self.world
            .get::<ExtendedFrameList>(entity)
            .map(|frames| frames.len())
            .unwrap_or(0)
    }

    fn effects(&mut self) -> Vec<(MapPosition, String, u32)> {
        self.world
            .query::<(&MapPosition, &Sprite, &Ttl)>()
            .iter(&self.world)
            .map(|(position, sprite, ttl)| (*position, sprite.tex_key.clone(), ttl.remaining_frames))
            .collect()
    }
}

#[test]
fn hammer_waits_warmup_frames_before_pushing() {
    let (mut room, hammers) = Room::new(ROOM);
    let left = hammers[0];

    for frames_elapsed in 0..WARMUP_FRAMES {
        assert_eq!(
            room.hammer(left).state(),
            HammerState::Waiting { frames_elapsed },
            "after {} frame(s)",
            frames_elapsed
        );
        assert_eq!(room.position(left), MapPosition::new(4, 1));
        room.tick();
    }
    assert_eq!(room.hammer(left).state(), HammerState::PushingDown);
    assert_eq!(room.position(left), MapPosition::new(4, 1));
    assert!(room.world.get::<PlayerDamaging>(left).is_none());
}

#[test]
fn off_screen_hammer_holds_its_warmup() {
    let (mut room, hammers) = Room::new(ROOM);
    room.world
        .resource_mut::<Viewport>()
        .scroll_to(100, 100);

    room.run(40);
    for &hammer in &hammers {
        assert_eq!(
            room.hammer(hammer).state(),
            HammerState::Waiting { frames_elapsed: 0 }
        );
        assert_eq!(room.position(hammer).y, 1);
    }

    room.world.resource_mut::<Viewport>().scroll_to(0, 0);
    room.run(3);
    assert_eq!(
        room.hammer(hammers[0]).state(),
        HammerState::Waiting { frames_elapsed: 3 }
    );
}

#[test]
fn pushing_down_extends_shaft_and_hurts() {
    let (mut room, hammers) = Room::new(ROOM);
    let left = hammers[0];

    room.run(WARMUP_FRAMES + 3);
    let hammer = room.hammer(left);
    assert_eq!(hammer.state(), HammerState::PushingDown);
    assert_eq!(hammer.extension_step(), 3);
    assert_eq!(room.position(left), MapPosition::new(4, 4));
    assert_eq!(room.shaft_len(left), 3);
    assert_eq!(room.world.get::<PlayerDamaging>(left).unwrap().amount, 1);

    let frames = room.world.get::<ExtendedFrameList>(left).unwrap();
    assert!(frames.frames.iter().all(|f| f.frame == SHAFT_FRAME));
}

#[test]
fn ledge_stops_hammer_and_fires_effects_once() {
    let (mut room, hammers) = Room::new(ROOM);
    let right = hammers[1];

    // Two free cells above the ledge, then the blocked push.
    room.run(WARMUP_FRAMES + 2);
    assert_eq!(room.hammer(right).extension_step(), 2);
    assert!(room.sounds.is_empty());

    room.tick();
    let hammer = room.hammer(right);
    assert_eq!(hammer.state(), HammerState::PullingUp);
    assert_eq!(hammer.extension_step(), 2);
    assert_eq!(room.position(right), MapPosition::new(11, 3));
    assert_eq!(room.sounds, vec!["hammer_smash".to_string()]);

    let effects = room.effects();
    assert_eq!(effects.len(), 1);
    let (position, tex_key, ttl) = &effects[0];
    assert_eq!(*position, MapPosition::new(11, 7));
    assert_eq!(tex_key, "smoke_cloud");
    assert_eq!(*ttl, 5);

    // Pulling up does not repeat the impact.
    room.tick();
    assert_eq!(room.sounds.len(), 1);
    assert_eq!(room.hammer(right).extension_step(), 1);
    assert_eq!(room.position(right), MapPosition::new(11, 2));
}

#[test]
fn hammer_cycle_returns_to_rest() {
    let (mut room, hammers) = Room::new(ROOM);
    let right = hammers[1];

    // 19 waiting, 2 pushes, 1 blocked push, 2 pulls.
    room.run(WARMUP_FRAMES + 5);
    let hammer = room.hammer(right);
    assert_eq!(hammer.state(), HammerState::Waiting { frames_elapsed: 0 });
    assert_eq!(hammer.extension_step(), 0);
    assert_eq!(room.position(right), MapPosition::new(11, 1));
    assert_eq!(room.shaft_len(right), 0);
    assert!(room.world.get::<PlayerDamaging>(right).is_none());

    // And the next cycle starts over.
    room.run(WARMUP_FRAMES);
    assert_eq!(room.hammer(right).state(), HammerState::PushingDown);
}

#[test]
fn long_drop_reaches_the_floor() {
    let (mut room, hammers) = Room::new(ROOM);
    let left = hammers[0];

    // Rows 2..=8 are free under the left hammer.
    room.run(WARMUP_FRAMES + 8);
    let hammer = room.hammer(left);
    assert_eq!(hammer.state(), HammerState::PullingUp);
    assert_eq!(hammer.extension_step(), 7);
    assert_eq!(room.position(left), MapPosition::new(4, 8));
    assert_eq!(room.shaft_len(left), 7);
    assert_eq!(room.sounds.len(), 2);
}

#[test]
fn smoke_effect_expires_after_its_animation() {
    let (mut room, _) = Room::new(ROOM);
    let ledge_smoke = MapPosition::new(11, 7);
    let smoke_alive = |room: &mut Room| {
        room.effects()
            .iter()
            .any(|(position, _, _)| *position == ledge_smoke)
    };

    room.run(WARMUP_FRAMES + 3);
    assert!(smoke_alive(&mut room));

    room.run(4);
    assert!(smoke_alive(&mut room));
    room.tick();
    assert!(!smoke_alive(&mut room));
}

#[test]
fn solid_body_blocks_hammer() {
    let (mut room, hammers) = Room::new(&["#####", "#.H.#", "#...#", "#...#", "#...#", "#####"]);
    let hammer = hammers[0];
    game::spawn_solid_block(&mut room.world, MapPosition::new(2, 3), 1, 1);

    room.run(WARMUP_FRAMES + 2);
    assert_eq!(room.hammer(hammer).state(), HammerState::PullingUp);
    assert_eq!(room.hammer(hammer).extension_step(), 1);
    assert_eq!(room.position(hammer), MapPosition::new(2, 2));
}

#[test]
fn hammer_blocked_at_rest_returns_to_waiting() {
    let (mut room, hammers) = Room::new(&["###", "#H#", "###"]);
    let hammer = hammers[0];

    room.run(WARMUP_FRAMES + 1);
    assert_eq!(room.hammer(hammer).state(), HammerState::PullingUp);
    assert_eq!(room.sounds.len(), 1);

    room.tick();
    assert_eq!(
        room.hammer(hammer).state(),
        HammerState::Waiting { frames_elapsed: 0 }
    );
    assert_eq!(room.position(hammer), MapPosition::new(1, 1));
    assert!(room.world.get::<PlayerDamaging>(hammer).is_none());
}

#[test]
fn shaft_tracks_extension_on_every_frame() {
    let (mut room, hammers) = Room::new(ROOM);

    // The first tick inserts the frame lists.
    room.tick();
    let mut previous: Vec<i32> = hammers
        .iter()
        .map(|&hammer| room.hammer(hammer).extension_step())
        .collect();

    // Two full cycles of the long-drop hammer.
    for frame in 0..2 * (WARMUP_FRAMES + 16) {
        room.world.clear_trackers();
        room.tick();

        for (&hammer, previous_step) in hammers.iter().zip(previous.iter_mut()) {
            let step = room.hammer(hammer).extension_step();
            let frames = room
                .world
                .entity(hammer)
                .get_ref::<ExtendedFrameList>()
                .unwrap();
            assert_eq!(frames.len(), step as usize, "frame {}", frame);
            assert_eq!(
                frames.is_changed(),
                step != *previous_step,
                "frame {}: step {} -> {}",
                frame,
                *previous_step,
                step
            );
            *previous_step = step;
        }
    }
}
