//! Systems bridging the remote-state channel with the ECS mailbox.
//!
//! The remote side pushes decoded
//! [`EmitterStateMessage`](crate::events::particles::EmitterStateMessage)s
//! into the [`StateBridge`](crate::resources::statebridge::StateBridge)
//! channel at its own pace; these systems make them visible to message
//! readers each frame. Reconciliation itself lives in
//! [`crate::systems::particles::emitter_state_system`].

use bevy_ecs::prelude::*;

use crate::events::particles::EmitterStateMessage;
use crate::resources::statebridge::StateBridge;

/// Drain any pending snapshots from the bridge and enqueue them into the
/// ECS [`Messages<EmitterStateMessage>`] mailbox.
///
/// Non-blocking; intended to run each frame before reconciliation.
pub fn poll_state_messages(
    bridge: Res<StateBridge>,
    mut writer: MessageWriter<EmitterStateMessage>,
) {
    writer.write_batch(bridge.rx_state.try_iter());
}

/// Advance the ECS message queue for [`EmitterStateMessage`].
///
/// The [`Messages`] API requires calling `update()` once per frame to age
/// the double buffer. Run this after [`poll_state_messages`].
pub fn update_state_messages(mut msgs: ResMut<Messages<EmitterStateMessage>>) {
    msgs.update();
}
