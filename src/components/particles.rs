//! Server-synchronized particle system component.
//!
//! The [`ParticleSystem`] component owns zero or more named emitters and is
//! the only place that mutates them. Emitter state is authoritative on the
//! server: snapshots arrive as
//! [`EmitterSnapshot`](crate::events::particles::EmitterSnapshot) values and
//! are folded into the registry by [`ParticleSystem::reconcile`], which
//! updates or prunes existing emitters instead of recreating them so that
//! in-flight particles survive redundant or repeated snapshots.
//!
//! # Positioning
//!
//! Each emitter tracks two positions that compose:
//! - an *emission-point offset*, shifted additively by owner move deltas
//!   ([`ParticleSystem::move_all`]) and deciding where new particles appear
//!   relative to the origin;
//! - an absolute *render origin*, overwritten on every render call from the
//!   owner's current screen position and never affected by move deltas.
//!
//! # Draw order
//!
//! [`ParticleSystem::render`] draws emitters sorted by sprite key (ties in
//! insertion order) so consecutive draws share atlases, and runs under an
//! additive-blend scope that restores the target's previous mode on every
//! path, including the empty-registry one.
//!
//! # Related
//!
//! - [`crate::systems::particles`] – per-tick update and snapshot reconciliation
//! - [`crate::systems::render`] – the depth-sorted draw pass
//! - [`crate::fx::ParticleEffect`] – the underlying simulation primitive

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::debug;
use rustc_hash::FxHashMap;

use crate::events::particles::EmitterSnapshot;
use crate::fx::ParticleEffect;
use crate::resources::particledefs::ParticleDefStore;
use crate::resources::rendertarget::{BlendMode, RenderTarget};

/// One named emitter owned by a [`ParticleSystem`].
///
/// Created by [`ParticleSystem::add`], destroyed by
/// [`ParticleSystem::remove`]; nothing else constructs or drops these.
#[derive(Debug, Clone)]
pub struct Emitter {
    name: String,
    active: bool,
    /// Insertion sequence number. Doubles as an identity marker: an emitter
    /// that survives a reconciliation keeps its number.
    seq: u64,
    effect: ParticleEffect,
}

impl Emitter {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the emitter currently spawns new particles.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Insertion/identity marker, unique within the owning component.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn effect(&self) -> &ParticleEffect {
        &self.effect
    }
}

/// Named-emitter registry attached to one entity.
#[derive(Component, Debug, Default)]
pub struct ParticleSystem {
    emitters: FxHashMap<String, Emitter>,
    next_seq: u64,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.emitters.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Emitter> {
        self.emitters.get(name)
    }

    /// Iterate emitters in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Emitter> {
        self.emitters.values()
    }

    /// Create an emitter named `name` from the definition store.
    ///
    /// No-op when the name is already present or the store cannot resolve
    /// it; an unknown definition is "nothing to add", not an error. The new
    /// emitter starts at the zero vector and is repositioned by the next
    /// move or render.
    pub fn add(&mut self, name: &str, active: bool, defs: &ParticleDefStore) {
        if self.emitters.contains_key(name) {
            return;
        }
        let Some(definition) = defs.get(name) else {
            debug!("no particle definition for '{name}', skipping add");
            return;
        };
        let mut effect = ParticleEffect::new(definition.clone(), Vec2::ZERO);
        effect.set_emitting(active);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.emitters.insert(
            name.to_string(),
            Emitter {
                name: name.to_string(),
                active,
                seq,
                effect,
            },
        );
    }

    /// Destroy the emitter named `name`. No-op when absent.
    pub fn remove(&mut self, name: &str) {
        if self.emitters.remove(name).is_none() {
            debug!("remove of unknown emitter '{name}' ignored");
        }
    }

    /// Flip the active flag of an existing emitter in place, preserving its
    /// accumulated particle state. No-op when absent.
    pub fn set_active(&mut self, name: &str, active: bool) {
        match self.emitters.get_mut(name) {
            Some(emitter) => {
                emitter.active = active;
                emitter.effect.set_emitting(active);
            }
            None => debug!("set_active of unknown emitter '{name}' ignored"),
        }
    }

    /// Fold an authoritative snapshot into the registry.
    ///
    /// Updates and additions run first, pruning second, so an emitter named
    /// in consecutive snapshots is never destroyed and recreated within one
    /// reconciliation. O(existing + snapshot).
    pub fn reconcile(&mut self, snapshot: &EmitterSnapshot, defs: &ParticleDefStore) {
        for (name, active) in snapshot.iter() {
            if self.emitters.contains_key(name) {
                self.set_active(name, active);
            } else {
                self.add(name, active, defs);
            }
        }

        // Prune emitters the snapshot no longer names
        let stale: Vec<String> = self
            .emitters
            .keys()
            .filter(|name| !snapshot.contains(name))
            .cloned()
            .collect();
        for name in stale {
            self.remove(&name);
        }
    }

    /// Shift every emitter's emission point by the owner's movement delta.
    /// Rapid successive deltas compose additively.
    pub fn move_all(&mut self, delta: Vec2) {
        for emitter in self.emitters.values_mut() {
            emitter.effect.move_emitter(delta);
        }
    }

    /// Advance every emitter's simulation by `dt` seconds. Emitters have no
    /// interdependencies, so iteration order is free.
    pub fn update_all(&mut self, dt: f32) {
        for emitter in self.emitters.values_mut() {
            emitter.effect.update(dt);
        }
    }

    /// Names of the emitters in the order [`ParticleSystem::render`] will
    /// draw them: sprite key ascending, ties in insertion order.
    pub fn draw_order(&self) -> Vec<&str> {
        let mut order: Vec<&Emitter> = self.emitters.values().collect();
        order.sort_by(|a, b| {
            a.effect
                .sprite_key()
                .cmp(b.effect.sprite_key())
                .then(a.seq.cmp(&b.seq))
        });
        order.into_iter().map(|e| e.name.as_str()).collect()
    }

    /// Re-anchor every emitter to `anchor` and draw them sorted by sprite
    /// key ascending, ties in insertion order. Sorting by atlas keeps
    /// texture switches down when an entity carries several emitters.
    ///
    /// Draws run under additive blending; the target's previous mode is
    /// restored before returning on every path, empty registry included.
    pub fn render(&mut self, anchor: Vec2, target: &mut dyn RenderTarget) {
        let previous_blend = target.blend_mode();
        target.set_blend_mode(BlendMode::Additive);

        let mut order: Vec<&mut Emitter> = self.emitters.values_mut().collect();
        order.sort_by(|a, b| {
            a.effect
                .sprite_key()
                .cmp(b.effect.sprite_key())
                .then(a.seq.cmp(&b.seq))
        });
        for emitter in order {
            emitter.effect.set_origin(anchor);
            emitter.effect.render(target);
        }

        target.set_blend_mode(previous_blend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::ParticleDefinition;
    use crate::resources::rendertarget::RecordingTarget;

    fn defs() -> ParticleDefStore {
        let mut store = ParticleDefStore::new();
        store.insert("fire", ParticleDefinition::new("flame.png"));
        store.insert("smoke", ParticleDefinition::new("smoke.png"));
        store.insert("sparks", ParticleDefinition::new("flame.png"));
        store
    }

    #[test]
    fn test_add_creates_emitter_at_zero() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        ps.add("fire", true, &store);
        let emitter = ps.get("fire").unwrap();
        assert!(emitter.is_active());
        assert_eq!(emitter.effect().emit_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_add_existing_name_is_noop() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        ps.add("fire", true, &store);
        let seq = ps.get("fire").unwrap().seq();
        ps.add("fire", false, &store);
        let emitter = ps.get("fire").unwrap();
        assert_eq!(emitter.seq(), seq);
        assert!(emitter.is_active());
    }

    #[test]
    fn test_add_unknown_definition_is_noop() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        ps.add("plasma", true, &store);
        assert!(ps.is_empty());
    }

    #[test]
    fn test_set_active_flips_in_place() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        ps.add("fire", true, &store);
        let seq = ps.get("fire").unwrap().seq();
        ps.set_active("fire", false);
        let emitter = ps.get("fire").unwrap();
        assert!(!emitter.is_active());
        assert!(!emitter.effect().is_emitting());
        assert_eq!(emitter.seq(), seq);
    }

    #[test]
    fn test_set_active_absent_is_noop() {
        let mut ps = ParticleSystem::new();
        ps.set_active("fire", true);
        assert!(ps.is_empty());
    }

    #[test]
    fn test_reconcile_applies_then_prunes() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        ps.add("fire", true, &store);
        ps.add("smoke", true, &store);

        let snapshot = EmitterSnapshot::from_pairs([("fire".to_string(), false)]);
        ps.reconcile(&snapshot, &store);

        assert_eq!(ps.len(), 1);
        assert!(!ps.get("fire").unwrap().is_active());
        assert!(!ps.contains("smoke"));
    }

    #[test]
    fn test_reconcile_preserves_identity() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        ps.add("fire", true, &store);
        let seq = ps.get("fire").unwrap().seq();

        let snapshot = EmitterSnapshot::from_pairs([("fire".to_string(), false)]);
        ps.reconcile(&snapshot, &store);
        ps.reconcile(&snapshot, &store);

        assert_eq!(ps.len(), 1);
        assert_eq!(ps.get("fire").unwrap().seq(), seq);
    }

    #[test]
    fn test_move_all_composes_deltas() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        ps.add("fire", true, &store);
        ps.move_all(Vec2::new(2.0, 0.0));
        ps.move_all(Vec2::new(0.0, 3.0));
        let offset = ps.get("fire").unwrap().effect().emit_offset();
        assert_eq!(offset, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_render_sorts_by_sprite_key_then_insertion() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        // "smoke" draws smoke.png, the other two draw flame.png
        ps.add("smoke", true, &store);
        ps.add("fire", true, &store);
        ps.add("sparks", true, &store);
        ps.update_all(0.5);

        let mut target = RecordingTarget::new();
        ps.render(Vec2::ZERO, &mut target);

        let keys: Vec<&str> = target.draws.iter().map(|d| d.tex_key.as_str()).collect();
        let first_smoke = keys.iter().position(|k| *k == "smoke.png").unwrap();
        assert!(keys[..first_smoke].iter().all(|k| *k == "flame.png"));
        assert!(keys[first_smoke..].iter().all(|k| *k == "smoke.png"));
    }

    #[test]
    fn test_draw_order_breaks_sprite_ties_by_insertion() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        // smoke.png sorts after flame.png; fire and sparks share flame.png
        ps.add("smoke", true, &store);
        ps.add("fire", true, &store);
        ps.add("sparks", true, &store);
        assert_eq!(ps.draw_order(), vec!["fire", "sparks", "smoke"]);
    }

    #[test]
    fn test_render_restores_blend_mode_when_empty() {
        let mut ps = ParticleSystem::new();
        let mut target = RecordingTarget::new();
        target.set_blend_mode(BlendMode::Multiply);
        ps.render(Vec2::ZERO, &mut target);
        assert_eq!(target.blend_mode(), BlendMode::Multiply);
        assert!(target.draws.is_empty());
    }

    #[test]
    fn test_render_draws_additive() {
        let store = defs();
        let mut ps = ParticleSystem::new();
        ps.add("fire", true, &store);
        ps.update_all(0.5);

        let mut target = RecordingTarget::new();
        ps.render(Vec2::ZERO, &mut target);

        assert!(!target.draws.is_empty());
        assert!(target.draws.iter().all(|d| d.blend == BlendMode::Additive));
        assert_eq!(target.blend_mode(), BlendMode::Alpha);
    }
}
