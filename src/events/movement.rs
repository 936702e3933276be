//! Transform move notifications.
//!
//! Whatever drives an entity's transform (the movement system, the frame
//! driver, a network interpolator) writes a [`MoveMessage`] whenever the
//! position changes. Subscribing components consume the messages explicitly
//! through a `MessageReader` instead of hidden observer subscriptions; the
//! particle registry uses the delta to keep emission points attached to
//! their owner.
//!
//! # Related
//!
//! - [`crate::systems::movement::emitter_move_system`] – the consumer

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;
use glam::Vec2;

/// Message emitted when an entity's world position changed.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct MoveMessage {
    /// The entity whose transform moved.
    pub entity: Entity,
    /// World position before the move.
    pub from: Vec2,
    /// World position after the move.
    pub to: Vec2,
}

impl MoveMessage {
    /// Movement delta of this notification.
    pub fn delta(&self) -> Vec2 {
        self.to - self.from
    }
}
