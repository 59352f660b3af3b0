//! Collision detection primitives
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (boxes, spheres)
//!
//! # Key Types
//!
//! - [`Aabb`] - Axis-aligned box attached to every collidable
//! - [`BoundingSphere`] - Probe shape used for every query

pub mod primitives;

// Re-export commonly used types
pub use primitives::{Aabb, BoundingSphere};
