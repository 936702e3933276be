//! Draw-depth change events.
//!
//! Other components (or the server, through the component message layer)
//! can retarget a renderable's layer by triggering a [`SetDrawDepthEvent`].
//! The observer mutates the target's
//! [`DrawDepth`](crate::components::drawdepth::DrawDepth) in place. A
//! component's own broadcast coming back to it is ignored.
//!
//! # Example
//!
//! ```ignore
//! world.trigger(SetDrawDepthEvent {
//!     entity,
//!     depth: 12,
//!     sender: None,
//! });
//! ```

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::drawdepth::DrawDepth;

/// Event requesting a new draw depth for `entity`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDrawDepthEvent {
    /// The renderable entity whose layer changes.
    pub entity: Entity,
    /// The new depth value.
    pub depth: i32,
    /// Originating entity, if the message came from a component broadcast.
    pub sender: Option<Entity>,
}

/// Observer applying [`SetDrawDepthEvent`]s.
///
/// Self-addressed broadcasts and unknown targets are ignored.
pub fn set_draw_depth_observer(
    trigger: On<SetDrawDepthEvent>,
    mut query: Query<&mut DrawDepth>,
) {
    let event = trigger.event();
    if event.sender == Some(event.entity) {
        // Don't listen to our own messages
        return;
    }
    match query.get_mut(event.entity) {
        Ok(mut depth) => depth.0 = event.depth,
        Err(_) => debug!("set_draw_depth for entity without DrawDepth ignored"),
    }
}
