//! High-level world setup and the per-frame driver.
//!
//! [`setup_world`] builds an ECS world with the engine resources,
//! [`build_update_schedule`] wires the update systems in their required
//! order, and [`run_frame`] drives one frame: clock, update schedule, then
//! the render pass. Update always precedes render within a frame, and
//! snapshot reconciliation runs inside the update schedule, so a render
//! never observes a half-applied snapshot.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::events::drawdepth::set_draw_depth_observer;
use crate::events::movement::MoveMessage;
use crate::resources::camera2d::Camera2D;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::particledefs::ParticleDefStore;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::statebridge::setup_state_bridge;
use crate::resources::worldtime::WorldTime;
use crate::systems::movement::{emitter_move_system, update_move_messages};
use crate::systems::net::{poll_state_messages, update_state_messages};
use crate::systems::particles::{emitter_state_system, particle_update_system};
use crate::systems::render::{camera_view_rect, render_particles};
use crate::systems::time::update_world_time;

/// Build a world carrying the engine resources described by `config`.
///
/// The camera is centered on the world origin; the state bridge and the
/// message mailboxes are registered, and the draw-depth observer is live
/// once this returns.
pub fn setup_world(config: EngineConfig) -> World {
    let mut world = World::new();

    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    world.insert_resource(Camera2D {
        target: Vec2::ZERO,
        offset: Vec2::new(
            config.render_width as f32 / 2.0,
            config.render_height as f32 / 2.0,
        ),
        zoom: 1.0,
    });
    world.insert_resource(ParticleDefStore::new());
    world.insert_resource(Messages::<MoveMessage>::default());
    setup_state_bridge(&mut world);
    world.insert_resource(config);

    world.spawn(Observer::new(set_draw_depth_observer));
    // Ensure the observer is registered before any system triggers events.
    world.flush();

    world
}

/// Wire the update systems.
///
/// Snapshot delivery chains ahead of reconciliation; move application and
/// the per-tick advancement run after reconciliation so the frame's render
/// sees a settled registry.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            poll_state_messages,
            update_state_messages,
            emitter_state_system,
        )
            .chain(),
    );
    update.add_systems(
        (update_move_messages, emitter_move_system)
            .chain()
            .after(emitter_state_system),
    );
    update.add_systems(
        particle_update_system
            .after(emitter_state_system)
            .after(emitter_move_system),
    );
    update
}

/// Run one frame: advance the clock, run the update schedule, then draw.
pub fn run_frame(world: &mut World, update: &mut Schedule, dt: f32, target: &mut dyn RenderTarget) {
    update_world_time(world, dt);
    update.run(world);

    let (view_tl, view_br) = camera_view_rect(world);
    render_particles(world, target, view_tl, view_br);

    world.clear_trackers(); // Clear changed components for next frame
}
