//! Low-level particle effect primitive.
//!
//! A [`ParticleEffect`] owns the in-flight particles of a single emitter:
//! it spawns new particles while emitting, integrates and ages them each
//! update, and draws them relative to its render origin. The higher-level
//! [`ParticleSystem`](crate::components::particles::ParticleSystem)
//! component treats this type as opaque simulation state; it only drives
//! the emitting flag, the emission-point offset, the render origin, and
//! the per-frame update.
//!
//! Definitions are data ([`ParticleDefinition`]), loaded from JSON by the
//! [`ParticleDefStore`](crate::resources::particledefs::ParticleDefStore).

use fastrand::Rng;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::resources::rendertarget::RenderTarget;

/// Static description of a particle effect, resolved by name from the
/// definition store.
///
/// The `sprite` key doubles as the render sort key: emitters sharing a
/// sprite atlas are drawn consecutively to reduce texture switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleDefinition {
    /// Texture/atlas key used to draw every particle of this effect.
    pub sprite: String,
    /// Particles spawned per second while emitting.
    #[serde(default = "default_rate")]
    pub rate: f32,
    /// Particle lifetime range in seconds. Stored as (min, max).
    #[serde(default = "default_lifetime")]
    pub lifetime: (f32, f32),
    /// Direction arc in degrees. 0° points up. Stored as (min, max).
    #[serde(default = "default_arc")]
    pub arc_degrees: (f32, f32),
    /// Speed range in units per second. Stored as (min, max).
    #[serde(default = "default_speed")]
    pub speed: (f32, f32),
}

fn default_rate() -> f32 {
    20.0
}

fn default_lifetime() -> (f32, f32) {
    (0.5, 1.5)
}

fn default_arc() -> (f32, f32) {
    (0.0, 360.0)
}

fn default_speed() -> (f32, f32) {
    (20.0, 60.0)
}

impl ParticleDefinition {
    /// Minimal definition drawing `sprite` with default emission values.
    pub fn new(sprite: impl Into<String>) -> Self {
        Self {
            sprite: sprite.into(),
            rate: default_rate(),
            lifetime: default_lifetime(),
            arc_degrees: default_arc(),
            speed: default_speed(),
        }
    }
}

/// One live particle. Positions are relative to the effect's render origin.
#[derive(Debug, Clone, Copy)]
struct Particle {
    pos: Vec2,
    velocity: Vec2,
    age: f32,
    ttl: f32,
}

/// Running simulation state of one emitter.
#[derive(Debug, Clone)]
pub struct ParticleEffect {
    definition: ParticleDefinition,
    /// Absolute render origin, overwritten by every render pass.
    origin: Vec2,
    /// Emission point relative to the origin. Shifted by move deltas.
    emit_offset: Vec2,
    emitting: bool,
    particles: Vec<Particle>,
    spawn_accumulator: f32,
    rng: Rng,
}

/// Sample a random f32 in the range [min, max].
/// If the range is smaller than EPSILON, returns min directly.
#[inline]
fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

impl ParticleEffect {
    /// Create an effect at `emit_offset` with no live particles.
    pub fn new(definition: ParticleDefinition, emit_offset: Vec2) -> Self {
        Self {
            definition,
            origin: Vec2::ZERO,
            emit_offset,
            emitting: false,
            particles: Vec::new(),
            spawn_accumulator: 0.0,
            rng: Rng::new(),
        }
    }

    /// Sprite/atlas key of this effect, used as the render sort key.
    pub fn sprite_key(&self) -> &str {
        &self.definition.sprite
    }

    pub fn is_emitting(&self) -> bool {
        self.emitting
    }

    /// Start or stop spawning new particles. Live particles keep aging.
    pub fn set_emitting(&mut self, emitting: bool) {
        self.emitting = emitting;
    }

    /// Current emission-point offset relative to the render origin.
    pub fn emit_offset(&self) -> Vec2 {
        self.emit_offset
    }

    /// Shift the emission point by `delta`. Deltas compose additively.
    pub fn move_emitter(&mut self, delta: Vec2) {
        self.emit_offset += delta;
    }

    /// Absolute render origin set by the last render pass.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Re-anchor the effect to an absolute screen position. Does not touch
    /// the emission-point offset.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Number of in-flight particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Age, integrate and spawn particles for `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        for p in self.particles.iter_mut() {
            p.age += dt;
            p.pos += p.velocity * dt;
        }
        self.particles.retain(|p| p.age < p.ttl);

        if !self.emitting || self.definition.rate <= 0.0 {
            return;
        }

        let period = 1.0 / self.definition.rate;
        self.spawn_accumulator += dt;

        // Catch-up loop: spawn multiple particles if dt is large
        while self.spawn_accumulator >= period {
            self.spawn_accumulator -= period;
            self.spawn_particle();
        }
    }

    fn spawn_particle(&mut self) {
        let (arc_min, arc_max) = self.definition.arc_degrees;
        let angle_deg = random_f32_range(&mut self.rng, arc_min, arc_max);

        let (speed_min, speed_max) = self.definition.speed;
        let speed = random_f32_range(&mut self.rng, speed_min, speed_max);

        let (ttl_min, ttl_max) = self.definition.lifetime;
        let ttl = random_f32_range(&mut self.rng, ttl_min, ttl_max);

        // Convert angle to direction vector (0° = up, Y+ is down)
        let theta = angle_deg.to_radians();
        let dir = Vec2::new(theta.sin(), -theta.cos());

        self.particles.push(Particle {
            pos: self.emit_offset,
            velocity: dir * speed,
            age: 0.0,
            ttl: ttl.max(f32::EPSILON),
        });
    }

    /// Draw every live particle relative to the current render origin.
    /// Blend-mode handling belongs to the caller.
    pub fn render(&self, target: &mut dyn RenderTarget) {
        for p in self.particles.iter() {
            target.draw_sprite(&self.definition.sprite, self.origin + p.pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn effect() -> ParticleEffect {
        ParticleEffect::new(ParticleDefinition::new("spark.png"), Vec2::ZERO)
    }

    #[test]
    fn test_inactive_effect_spawns_nothing() {
        let mut fx = effect();
        fx.update(1.0);
        assert_eq!(fx.particle_count(), 0);
    }

    #[test]
    fn test_emitting_effect_spawns_at_rate() {
        let mut fx = ParticleEffect::new(
            ParticleDefinition {
                rate: 8.0, // period of 0.125s divides 1.0 exactly
                lifetime: (5.0, 5.0),
                ..ParticleDefinition::new("spark.png")
            },
            Vec2::ZERO,
        );
        fx.set_emitting(true);
        fx.update(1.0);
        assert_eq!(fx.particle_count(), 8);
    }

    #[test]
    fn test_particles_expire_after_lifetime() {
        let mut fx = ParticleEffect::new(
            ParticleDefinition {
                sprite: "spark.png".to_string(),
                rate: 10.0,
                lifetime: (0.2, 0.2),
                arc_degrees: (0.0, 0.0),
                speed: (1.0, 1.0),
            },
            Vec2::ZERO,
        );
        fx.set_emitting(true);
        fx.update(0.5);
        assert!(fx.particle_count() > 0);
        fx.set_emitting(false);
        fx.update(0.3);
        assert_eq!(fx.particle_count(), 0);
    }

    #[test]
    fn test_move_emitter_accumulates_deltas() {
        let mut fx = effect();
        fx.move_emitter(Vec2::new(2.0, 0.0));
        fx.move_emitter(Vec2::new(0.0, 3.0));
        assert!(approx_eq(fx.emit_offset().x, 2.0));
        assert!(approx_eq(fx.emit_offset().y, 3.0));
    }

    #[test]
    fn test_set_origin_is_absolute() {
        let mut fx = effect();
        fx.set_origin(Vec2::new(10.0, 10.0));
        fx.set_origin(Vec2::new(4.0, 5.0));
        assert!(approx_eq(fx.origin().x, 4.0));
        assert!(approx_eq(fx.origin().y, 5.0));
    }

    #[test]
    fn test_definition_from_json_fills_defaults() {
        let def: ParticleDefinition = serde_json::from_str(r#"{"sprite": "smoke.png"}"#).unwrap();
        assert_eq!(def.sprite, "smoke.png");
        assert!(approx_eq(def.rate, 20.0));
    }
}
