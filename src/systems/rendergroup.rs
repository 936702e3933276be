//! Render-group maintenance and particle component lifecycle.
//!
//! The master/slave relation spans two entities, so the operations here
//! take `&mut World` and keep both sides consistent: the slave's master
//! handle and the master's slave list. Every failure mode (candidate
//! without the required capabilities, missing component, dead master) is a
//! logged no-op; stale grouping instructions are common with remote
//! authorities and must not error.
//!
//! Attach/detach are the explicit lifecycle entry points of the particle
//! component: attaching installs the component bundle, detaching unslaves
//! first and then removes it.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::drawdepth::DrawDepth;
use crate::components::particles::ParticleSystem;
use crate::components::rendergroup::RenderGroup;
use crate::components::sprite::Sprite;

/// Slave `slave` to `candidate`.
///
/// The candidate must be a renderable ([`RenderGroup`]) carrying a sprite
/// ([`Sprite`]); anything else is silently ignored. An existing master is
/// released first, so a component has at most one master at a time.
pub fn set_master(world: &mut World, slave: Entity, candidate: Entity) {
    if world.get::<RenderGroup>(candidate).is_none() {
        debug!("set_master: {candidate:?} is not a renderable, ignoring");
        return;
    }
    if world.get::<Sprite>(candidate).is_none() {
        debug!("set_master: {candidate:?} has no sprite to aggregate under, ignoring");
        return;
    }
    let Some(group) = world.get::<RenderGroup>(slave) else {
        debug!("set_master: {slave:?} has no render group, ignoring");
        return;
    };
    if group.is_slaved() {
        unset_master(world, slave);
    }

    if let Some(mut master_group) = world.get_mut::<RenderGroup>(candidate) {
        master_group.add_slave(slave);
    }
    if let Some(mut slave_group) = world.get_mut::<RenderGroup>(slave) {
        slave_group.set_master_handle(candidate);
    }
}

/// Release `slave` from its master, if any.
///
/// The slave's handle is cleared even when the master entity is gone or no
/// longer renderable.
pub fn unset_master(world: &mut World, slave: Entity) {
    let master = world
        .get::<RenderGroup>(slave)
        .and_then(|group| group.master());
    let Some(master) = master else {
        return;
    };

    if let Some(mut master_group) = world.get_mut::<RenderGroup>(master) {
        master_group.remove_slave(slave);
    }
    if let Some(mut slave_group) = world.get_mut::<RenderGroup>(slave) {
        slave_group.clear_master_handle();
    }
}

/// Install the particle component bundle on `entity`.
///
/// The entity is expected to already carry a
/// [`MapPosition`](crate::components::mapposition::MapPosition); move
/// notifications reach the registry through the message queue, so there is
/// no subscription state to set up.
pub fn attach_particle_system(world: &mut World, entity: Entity) {
    world.entity_mut(entity).insert((
        ParticleSystem::new(),
        RenderGroup::new(),
        DrawDepth::default(),
    ));
    info!("particle system attached to {entity:?}");
}

/// Remove the particle component bundle from `entity`, unslaving it first.
pub fn detach_particle_system(world: &mut World, entity: Entity) {
    unset_master(world, entity);
    world
        .entity_mut(entity)
        .remove::<(ParticleSystem, RenderGroup, DrawDepth)>();
    info!("particle system detached from {entity:?}");
}
