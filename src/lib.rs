//! Cinder Engine library.
//!
//! A client-side 2D engine slice built around server-synchronized particle
//! system components: named emitters reconciled against authoritative
//! snapshots, master/slave render grouping, and a deterministic draw pass.
//! Exposes the ECS components, resources, systems, and events for use in
//! integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod fx;
pub mod game;
pub mod resources;
pub mod systems;
