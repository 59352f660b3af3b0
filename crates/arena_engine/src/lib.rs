//! # Arena Engine
//!
//! Headless foundation for frame-driven arena games.
//!
//! ## Features
//!
//! - **Collision**: axis-aligned boxes tested against spheres over a flat,
//!   insertion-ordered list of collidables
//! - **Frame timing**: fixed-step clock for deterministic simulation
//! - **Configuration**: TOML and RON loading through a single trait
//! - **Logging**: `log` facade with `env_logger` initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use arena_engine::prelude::*;
//!
//! let mut world = CollisionWorld::new();
//! let wall = Aabb::from_center_size(Vec3::new(0.0, 2.5, 0.0), Vec3::new(10.0, 5.0, 1.0));
//! world.insert(ColliderKind::Wall, wall, Vec3::new(0.0, 2.5, 0.0));
//!
//! let hit = world.check_sphere(Vec3::new(0.0, 1.0, 0.8), 0.5, KindMask::empty());
//! assert!(hit.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{components::Lifetime, Entity, EntityAllocator},
        foundation::{
            math::{Quat, Vec3},
            time::FrameClock,
        },
        physics::{
            Aabb, BoundingSphere, Collidable, ColliderKind, CollisionHit, CollisionWorld,
            KindMask, Owner,
        },
    };
}
