//! Cinder Engine demo entry point.
//!
//! A headless run of the particle component stack: an entity with a
//! particle system attached is driven by a scripted "remote authority"
//! that sends emitter snapshots through the state bridge, while the frame
//! loop updates and renders into a recording target.
//!
//! # Frame Loop
//!
//! 1. Load configuration and particle definitions
//! 2. Spawn an entity and attach the particle component bundle
//! 3. Each frame: maybe send a snapshot, maybe move the owner, then
//!    update + render via [`game::run_frame`]
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 240
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::Messages;
use clap::Parser;
use glam::Vec2;

use cinderengine::components::mapposition::MapPosition;
use cinderengine::events::movement::MoveMessage;
use cinderengine::events::particles::{EmitterSnapshot, EmitterStateMessage};
use cinderengine::fx::ParticleDefinition;
use cinderengine::game;
use cinderengine::resources::engineconfig::EngineConfig;
use cinderengine::resources::particledefs::ParticleDefStore;
use cinderengine::resources::rendertarget::RecordingTarget;
use cinderengine::resources::statebridge::StateBridge;
use cinderengine::systems::rendergroup::attach_particle_system;

/// Cinder Engine 2D
#[derive(Parser)]
#[command(
    version,
    about = "Headless Cinder Engine demo: feeds authoritative emitter snapshots to a particle component and logs the resulting draw stream."
)]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 180)]
    frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = EngineConfig::new();
    if let Some(path) = cli.config {
        config.config_path = path;
    }
    if let Err(e) = config.load_from_file() {
        log::warn!("using default configuration: {e}");
    }

    let definitions_path = config.definitions_path.clone();
    let target_fps = config.target_fps.max(1);
    let mut world = game::setup_world(config);

    {
        let mut defs = world.resource_mut::<ParticleDefStore>();
        if let Err(e) = defs.load_from_file(&definitions_path) {
            log::warn!("{e}; falling back to built-in demo definitions");
            defs.insert("fire", ParticleDefinition::new("flame.png"));
            defs.insert("smoke", ParticleDefinition::new("smoke.png"));
        }
    }

    let entity = world.spawn(MapPosition::new(0.0, 0.0)).id();
    attach_particle_system(&mut world, entity);

    let remote = world.resource::<StateBridge>().sender();

    let mut update = game::build_update_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    let mut target = RecordingTarget::new();
    let dt = 1.0 / target_fps as f32;

    for frame in 0..cli.frames {
        // Scripted remote authority: light the fire, later hand over to
        // smoke, and clear everything near the end.
        if frame == 0 {
            let _ = remote.send(EmitterStateMessage {
                entity,
                snapshot: EmitterSnapshot::from_pairs([("fire".to_string(), true)]),
            });
        } else if frame == cli.frames / 2 {
            let _ = remote.send(EmitterStateMessage {
                entity,
                snapshot: EmitterSnapshot::from_pairs([
                    ("fire".to_string(), false),
                    ("smoke".to_string(), true),
                ]),
            });
        } else if frame + 10 == cli.frames {
            let _ = remote.send(EmitterStateMessage {
                entity,
                snapshot: EmitterSnapshot::default(),
            });
        }

        // Drift the owner sideways now and then, like a moving entity would.
        if frame % 30 == 10 {
            let from = world
                .get::<MapPosition>(entity)
                .expect("demo entity has a position")
                .pos;
            let to = from + Vec2::new(4.0, 0.0);
            world
                .get_mut::<MapPosition>(entity)
                .expect("demo entity has a position")
                .pos = to;
            world
                .resource_mut::<Messages<MoveMessage>>()
                .write(MoveMessage { entity, from, to });
        }

        target.clear();
        game::run_frame(&mut world, &mut update, dt, &mut target);

        if frame % 30 == 0 {
            log::info!("frame {frame}: {} particle draws", target.draws.len());
        }
    }

    log::info!("done after {} frames", cli.frames);
}
