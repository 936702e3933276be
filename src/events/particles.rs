//! Authoritative emitter-state snapshots.
//!
//! The server periodically describes the desired emitter set of an entity
//! as a full snapshot: which emitter names should exist and whether each is
//! emitting. A snapshot is not a diff; anything it omits must go away.
//! Decoding and validation happen here at the boundary
//! ([`EmitterSnapshot::from_json`]), so the registry core only ever sees a
//! strongly typed value.
//!
//! # Related
//!
//! - [`crate::systems::particles::emitter_state_system`] – the sole consumer
//! - [`crate::resources::statebridge`] – channel delivering these messages

use std::collections::BTreeMap;

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;
use serde::{Deserialize, Serialize};

/// Desired emitter state: name → active flag. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmitterSnapshot(BTreeMap<String, bool>);

impl EmitterSnapshot {
    /// Build a snapshot from (name, active) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, bool)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Decode and validate a snapshot from its wire JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterate (name, active) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, active)| (name.as_str(), *active))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Buffered message carrying an authoritative snapshot for one entity.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct EmitterStateMessage {
    /// Entity owning the particle system component.
    pub entity: Entity,
    /// Full desired emitter state for that entity.
    pub snapshot: EmitterSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_json() {
        let snapshot = EmitterSnapshot::from_json(r#"{"fire": true, "smoke": false}"#).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.contains("fire"));
        let pairs: Vec<(&str, bool)> = snapshot.iter().collect();
        assert_eq!(pairs, vec![("fire", true), ("smoke", false)]);
    }

    #[test]
    fn test_snapshot_rejects_malformed_payload() {
        assert!(EmitterSnapshot::from_json(r#"{"fire": "yes"}"#).is_err());
        assert!(EmitterSnapshot::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = EmitterSnapshot::from_json("{}").unwrap();
        assert!(snapshot.is_empty());
    }
}
