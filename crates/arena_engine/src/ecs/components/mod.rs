//! ECS Components module

pub mod lifetime;

pub use lifetime::Lifetime;
