//! Particle draw pass.
//!
//! Draws every particle component in ascending [`DrawDepth`] order, each
//! anchored at the screen-space projection of its owner's world position.
//! The registry's own render takes care of per-emitter sorting and the
//! additive-blend scope; this pass only decides which component draws when
//! and where.
//!
//! The view rectangle parameters bound the visible region; culling against
//! them is the render target's concern, not this pass's.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::trace;

use crate::components::drawdepth::DrawDepth;
use crate::components::mapposition::MapPosition;
use crate::components::particles::ParticleSystem;
use crate::resources::camera2d::Camera2D;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;

/// World-space rectangle currently visible through the camera, computed
/// from the screen corners like the sprite pass does.
pub fn camera_view_rect(world: &World) -> (Vec2, Vec2) {
    let cam = *world.resource::<Camera2D>();
    let screen = *world.resource::<ScreenSize>();

    let tl = cam.screen_to_world(Vec2::ZERO);
    let br = cam.screen_to_world(Vec2::new(screen.w as f32, screen.h as f32));
    let view_min = Vec2::new(tl.x.min(br.x), tl.y.min(br.y));
    let view_max = Vec2::new(tl.x.max(br.x), tl.y.max(br.y));
    (view_min, view_max)
}

/// Draw all particle components, lowest depth first.
///
/// Update must have run earlier in the same frame; reconciliation never
/// interleaves with this pass (see the schedule in [`crate::game`]).
pub fn render_particles(
    world: &mut World,
    target: &mut dyn RenderTarget,
    view_tl: Vec2,
    view_br: Vec2,
) {
    trace!("particle pass, view {view_tl:?}..{view_br:?}");

    let cam = *world.resource::<Camera2D>();

    let mut query = world.query::<(&mut ParticleSystem, &MapPosition, &DrawDepth)>();
    let mut draws: Vec<(Mut<ParticleSystem>, Vec2, DrawDepth)> = query
        .iter_mut(world)
        .map(|(particles, pos, depth)| (particles, cam.world_to_screen(pos.pos), *depth))
        .collect();
    draws.sort_by_key(|(_, _, depth)| *depth);

    for (particles, anchor, _depth) in draws.iter_mut() {
        particles.render(*anchor, target);
    }
}
