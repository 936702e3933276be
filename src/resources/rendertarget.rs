//! Render target abstraction for the draw pass.
//!
//! The engine draws through the [`RenderTarget`] trait instead of a concrete
//! GPU handle: the particle pass only needs a blend-mode register and a
//! sprite draw primitive. [`RecordingTarget`] implements the trait by
//! recording draw calls, which backs headless runs and the integration
//! tests; a windowed build would implement it over its graphics API.

use glam::Vec2;

/// Blending mode of the target's color writes.
///
/// Particle passes run under [`BlendMode::Additive`] and must restore the
/// previous mode before returning, since sprite passes right after assume
/// the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending, the default for sprite drawing.
    #[default]
    Alpha,
    /// Additive blending used while drawing particle effects.
    Additive,
    /// Multiplicative blending for light/shadow overlays.
    Multiply,
}

/// Minimal drawing surface consumed by the render systems.
pub trait RenderTarget {
    /// Current blend mode.
    fn blend_mode(&self) -> BlendMode;

    /// Set the blend mode for subsequent draws.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Draw the sprite identified by `tex_key` at a screen position.
    fn draw_sprite(&mut self, tex_key: &str, position: Vec2);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Sprite/atlas key passed to the draw primitive.
    pub tex_key: String,
    /// Screen position of the draw.
    pub position: Vec2,
    /// Blend mode active when the call was issued.
    pub blend: BlendMode,
}

/// A render target that records draw calls instead of rasterizing.
///
/// Used by the headless demo binary and the integration tests to assert on
/// draw order and blend-mode scoping.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    blend: BlendMode,
    /// Every draw call issued against this target, in order.
    pub draws: Vec<DrawCall>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded draws, keeping the current blend mode.
    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl RenderTarget for RecordingTarget {
    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn draw_sprite(&mut self, tex_key: &str, position: Vec2) {
        self.draws.push(DrawCall {
            tex_key: tex_key.to_string(),
            position,
            blend: self.blend,
        });
    }
}
