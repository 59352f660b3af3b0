//! Physics module for collision detection
//!
//! Provides box/sphere primitives, collider kinds used for filtering, and a
//! flat collision world that answers sphere queries by linear scan.

pub mod collision;
pub mod collision_layers;
pub mod collision_world;

pub use collision::{Aabb, BoundingSphere};
pub use collision_layers::{ColliderKind, KindMask};
pub use collision_world::{Collidable, CollisionHit, CollisionWorld, Owner};
