use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key, its size in world units and the
/// origin selecting the pivot point relative to the texture's top-left.
///
/// Besides being drawn by the sprite pass, carrying a `Sprite` is what makes
/// an entity eligible to act as a render-group master: only sprite-bearing
/// renderables can aggregate slaved effects.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vec2,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vec2::ZERO,
        }
    }
}
