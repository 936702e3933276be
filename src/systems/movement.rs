//! Move-notification consumer for particle components.
//!
//! Drains [`MoveMessage`](crate::events::movement::MoveMessage)s and shifts
//! the emission points of the target entity's emitters by the movement
//! delta. Multiple messages for the same entity within one frame compose
//! additively; none are dropped or coalesced.

use bevy_ecs::prelude::*;

use crate::components::particles::ParticleSystem;
use crate::events::movement::MoveMessage;

/// Apply transform move deltas to the emitters of moved entities.
///
/// Messages addressing entities without a `ParticleSystem` are ignored.
pub fn emitter_move_system(
    mut reader: MessageReader<MoveMessage>,
    mut query: Query<&mut ParticleSystem>,
) {
    for msg in reader.read() {
        if let Ok(mut particles) = query.get_mut(msg.entity) {
            particles.move_all(msg.delta());
        }
    }
}

/// Advance the ECS message queue for [`MoveMessage`] so same-frame readers
/// can observe writes. Run this before [`emitter_move_system`].
pub fn update_move_messages(mut msgs: ResMut<Messages<MoveMessage>>) {
    msgs.update();
}
