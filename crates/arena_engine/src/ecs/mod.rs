//! Entity identifiers and per-entity components

pub mod components;
pub mod entity;

pub use entity::{Entity, EntityAllocator};
