//! # Maze Shooter
//!
//! Headless simulation of a first-person shooter in a small walled maze.
//! The [`Simulation`] owns every piece of game state and advances it one
//! fixed frame at a time. Rendering is left to the caller, which can read
//! positions and boxes back out of the simulation after each step.
//!
//! ```rust
//! use maze_shooter::{GameConfig, InputEvent, Key, Simulation};
//!
//! let mut config = GameConfig::default();
//! config.enemies.count = 0;
//! let mut sim = Simulation::new(config).unwrap();
//! sim.handle_input(InputEvent::KeyDown(Key::W));
//! for _ in 0..10 {
//!     sim.step();
//! }
//! assert!(sim.player().eye.z < 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod arena;
pub mod config;
pub mod enemies;
pub mod events;
pub mod input;
pub mod player;
pub mod score;
pub mod simulation;
pub mod weapon;

use arena_engine::config::ConfigError;
use thiserror::Error;

pub use config::GameConfig;
pub use events::FrameEvent;
pub use input::{InputEvent, Key, MouseButton};
pub use score::ScoreSubmission;
pub use simulation::{Simulation, Snapshot};

/// Game-level errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration loaded but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
