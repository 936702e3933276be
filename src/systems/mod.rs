//! Engine systems.
//!
//! This module groups the ECS systems that advance simulation, consume
//! messages, and draw.
//!
//! Submodules overview
//! - [`movement`] – apply transform move deltas to particle emitters
//! - [`net`] – bridge the remote-state channel into the ECS mailbox
//! - [`particles`] – advance emitters and reconcile authoritative snapshots
//! - [`render`] – draw particle components depth-sorted through a render target
//! - [`rendergroup`] – master/slave maintenance and attach/detach lifecycle
//! - [`time`] – update simulation time and delta

pub mod movement;
pub mod net;
pub mod particles;
pub mod render;
pub mod rendergroup;
pub mod time;
