//! Draw depth component for render ordering.
//!
//! The [`DrawDepth`] component controls the drawing order of renderable
//! entities. Entities with higher depth values are drawn on top of those
//! with lower values. The render pass sorts by it; the external renderable
//! sort across component kinds consumes the same value.

use bevy_ecs::prelude::Component;

/// Rendering order layer for 2D drawing.
///
/// Higher values are drawn later (on top). Sort by `DrawDepth` to get a
/// painter's algorithm across renderables.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DrawDepth(pub i32);

impl Default for DrawDepth {
    /// Mid-range layer where loose world objects sit by default.
    fn default() -> Self {
        DrawDepth(32)
    }
}
