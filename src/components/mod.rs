//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`drawdepth`] – rendering order layer for 2D drawing
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`particles`] – server-synchronized named particle emitters
//! - [`rendergroup`] – master/slave render grouping relation
//! - [`sprite`] – 2D sprite rendering component

pub mod drawdepth;
pub mod mapposition;
pub mod particles;
pub mod rendergroup;
pub mod sprite;
