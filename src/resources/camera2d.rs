//! Shared 2D camera used for world/screen transforms.
//!
//! The render pass anchors every particle component at the screen-space
//! projection of its owner's world position, computed here. The inverse
//! transform recovers the world-space view rectangle from the screen
//! corners for visibility bounds.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// 2D camera: `target` is the world position projected onto `offset`
/// (usually the screen center), scaled by `zoom`.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Camera2D {
    /// World position the camera looks at.
    pub target: Vec2,
    /// Screen position `target` maps to.
    pub offset: Vec2,
    /// Pixels per world unit.
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera2D {
    /// Project a world position to screen space.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.target) * self.zoom + self.offset
    }

    /// Unproject a screen position back to world space.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom + self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_world_to_screen_identity_camera() {
        let cam = Camera2D::default();
        assert!(approx_eq(
            cam.world_to_screen(Vec2::new(3.0, 4.0)),
            Vec2::new(3.0, 4.0)
        ));
    }

    #[test]
    fn test_screen_to_world_inverts_projection() {
        let cam = Camera2D {
            target: Vec2::new(100.0, 50.0),
            offset: Vec2::new(320.0, 180.0),
            zoom: 2.0,
        };
        let world = Vec2::new(112.5, 40.0);
        assert!(approx_eq(cam.screen_to_world(cam.world_to_screen(world)), world));
    }
}
