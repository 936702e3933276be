//! Particle definition store.
//!
//! String-keyed store of [`ParticleDefinition`]s, resolved by name when the
//! registry adds an emitter. Absence of a name is not an error; the add
//! simply does nothing. Definitions load from a JSON file mapping names to
//! definitions:
//!
//! ```json
//! {
//!     "engine_exhaust": { "sprite": "exhaust.png", "rate": 40.0 },
//!     "fire": { "sprite": "flame.png" }
//! }
//! ```

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;
use std::path::Path;

use crate::fx::ParticleDefinition;

/// Particle definitions keyed by name.
#[derive(Resource, Debug, Default)]
pub struct ParticleDefStore {
    defs: FxHashMap<String, ParticleDefinition>,
}

impl ParticleDefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one under `name`.
    pub fn insert(&mut self, name: impl Into<String>, def: ParticleDefinition) {
        self.defs.insert(name.into(), def);
    }

    /// Resolve a definition by name. `None` means "nothing to add".
    pub fn get(&self, name: &str) -> Option<&ParticleDefinition> {
        self.defs.get(name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Load definitions from a JSON file, merging into the store. Returns
    /// the number of definitions read.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let parsed: FxHashMap<String, ParticleDefinition> = serde_json::from_str(&json)
            .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
        let count = parsed.len();
        self.defs.extend(parsed);
        info!("loaded {count} particle definitions from {}", path.display());
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unknown_name_is_none() {
        let store = ParticleDefStore::new();
        assert!(store.get("fire").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = ParticleDefStore::new();
        store.insert("fire", ParticleDefinition::new("flame.png"));
        assert_eq!(store.get("fire").unwrap().sprite, "flame.png");
        assert_eq!(store.len(), 1);
    }
}
