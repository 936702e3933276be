//! Particle component systems: per-tick advancement and state reconciliation.
//!
//! # Behavior
//!
//! - [`particle_update_system`] advances every registry each simulation
//!   tick, visible or not, so effects keep evolving off screen.
//! - [`emitter_state_system`] is the sole entry point for authoritative
//!   snapshots: each message is folded into the target registry with
//!   [`ParticleSystem::reconcile`]. There is no local prediction or merge;
//!   the snapshot wins, and emitters it omits are removed.
//!
//! # Ordering
//!
//! Reconciliation must run before the render pass of the same frame so a
//! partially applied snapshot is never observable. The frame driver in
//! [`crate::game`] chains these systems ahead of rendering.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::particles::ParticleSystem;
use crate::events::particles::EmitterStateMessage;
use crate::resources::particledefs::ParticleDefStore;
use crate::resources::worldtime::WorldTime;

/// Advance every particle registry by the frame delta.
pub fn particle_update_system(mut query: Query<&mut ParticleSystem>, time: Res<WorldTime>) {
    let dt = time.delta; // delta is already scaled
    if dt <= 0.0 {
        return;
    }
    for mut particles in query.iter_mut() {
        particles.update_all(dt);
    }
}

/// Apply authoritative emitter snapshots to their target registries.
///
/// Messages addressing entities without a `ParticleSystem` are dropped;
/// stale or duplicate snapshots are harmless by construction.
pub fn emitter_state_system(
    mut reader: MessageReader<EmitterStateMessage>,
    mut query: Query<&mut ParticleSystem>,
    defs: Res<ParticleDefStore>,
) {
    for msg in reader.read() {
        match query.get_mut(msg.entity) {
            Ok(mut particles) => particles.reconcile(&msg.snapshot, &defs),
            Err(_) => debug!(
                "emitter snapshot for entity {:?} without ParticleSystem ignored",
                msg.entity
            ),
        }
    }
}
