//! ECS resources that bridge the world with the remote-state source.
//!
//! The networking layer (or a test, or the demo binary) decodes incoming
//! component-state packets into
//! [`EmitterStateMessage`](crate::events::particles::EmitterStateMessage)s
//! and pushes them through a channel. Use [`setup_state_bridge`] once during
//! initialization to create the channel and register the
//! [`StateBridge`] and `Messages<EmitterStateMessage>` resources; the
//! [`poll_state_messages`](crate::systems::net::poll_state_messages) system
//! drains the channel into the ECS mailbox each frame.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::particles::EmitterStateMessage;

/// Shared bridge between the remote-state source and the ECS world.
#[derive(Resource)]
pub struct StateBridge {
    /// Sender handed to whatever produces snapshots (network thread, demo).
    pub tx_state: Sender<EmitterStateMessage>,
    /// Receiver drained into `Messages<EmitterStateMessage>` each frame.
    pub rx_state: Receiver<EmitterStateMessage>,
}

impl StateBridge {
    /// Clone the producer side of the channel.
    pub fn sender(&self) -> Sender<EmitterStateMessage> {
        self.tx_state.clone()
    }
}

/// Create the snapshot channel and register bridge resources.
///
/// Returns a sender for the remote side. Snapshots sent on it become
/// visible to systems after the next [`poll_state_messages`] run.
///
/// [`poll_state_messages`]: crate::systems::net::poll_state_messages
pub fn setup_state_bridge(world: &mut World) -> Sender<EmitterStateMessage> {
    let (tx_state, rx_state) = unbounded::<EmitterStateMessage>();
    let remote = tx_state.clone();

    world.insert_resource(StateBridge { tx_state, rx_state });
    world.insert_resource(Messages::<EmitterStateMessage>::default());

    remote
}
