//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, rendering handles, asset
//! stores, and the remote-state bridge. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `engineconfig` – INI-backed engine settings with safe defaults
//! - `particledefs` – particle definitions keyed by string names
//! - `rendertarget` – blend-mode + draw-primitive seam for the draw pass
//! - `screensize` – internal render resolution in pixels
//! - `statebridge` – channel delivering authoritative emitter snapshots
//! - `worldtime` – simulation time and delta

pub mod camera2d;
pub mod engineconfig;
pub mod particledefs;
pub mod rendertarget;
pub mod screensize;
pub mod statebridge;
pub mod worldtime;
