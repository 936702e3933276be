//! Event and message types exchanged across systems.
//!
//! This module groups the buffered messages and triggered events that let
//! systems communicate without direct dependencies.
//!
//! Submodules:
//! - [`drawdepth`] – draw-depth change events and their observer
//! - [`movement`] – transform move notifications
//! - [`particles`] – authoritative emitter-state snapshots
//!
//! See each submodule for concrete data, semantics, and example usage.

pub mod drawdepth;
pub mod movement;
pub mod particles;
