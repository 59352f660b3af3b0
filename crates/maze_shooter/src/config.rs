//! Game configuration
//!
//! All gameplay constants live here. Speeds and accelerations are per frame,
//! not per second: the simulation advances by one fixed step per frame.

use arena_engine::config::Config;
use arena_engine::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::GameError;

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player movement settings
    pub player: PlayerConfig,

    /// Gun and bullet settings
    pub weapon: WeaponConfig,

    /// Enemy placement settings
    pub enemies: EnemyConfig,

    /// Frame loop settings
    pub simulation: SimulationConfig,
}

/// Player movement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal distance covered per frame
    pub move_speed: f32,

    /// Upward velocity given by a jump
    pub jump_speed: f32,

    /// Downward acceleration per frame
    pub gravity: f32,

    /// Eye height above the feet, also the lowest allowed eye height
    pub height: f32,

    /// Collision radius
    pub radius: f32,

    /// Highest allowed eye height
    pub ceiling_height: f32,

    /// Distance the player is pushed away from an enemy on contact
    pub enemy_push: f32,

    /// Radians of view rotation per unit of mouse movement
    pub look_sensitivity: f32,
}

/// Gun and bullet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Bullet travel per frame
    pub bullet_speed: f32,

    /// Visual radius, which also sizes the bullet's box
    pub bullet_radius: f32,

    /// Radius of the sphere a bullet tests against other objects
    pub hit_radius: f32,

    /// Damage per hit
    pub damage: i32,

    /// Seconds of simulated time before an unspent bullet is removed
    pub lifetime_secs: f32,

    /// Distance in front of the eye where bullets appear
    pub muzzle_distance: f32,

    /// Gun position relative to the eye, in view space
    pub gun_offset: Vec3,

    /// Gun box extents
    pub gun_size: Vec3,
}

/// Enemy placement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Enemies placed at startup
    pub count: u32,

    /// Random positions tried per enemy before giving up on it
    pub spawn_attempts: u32,

    /// Positions are drawn from `[-spawn_extent, spawn_extent)` on X and Z
    pub spawn_extent: f32,

    /// Height of the enemy center
    pub spawn_height: f32,

    /// Free space required around a spawn position
    pub clearance_radius: f32,

    /// Enemy box extents before the margin is added
    pub size: Vec3,

    /// Margin added to every face of the enemy box
    pub margin: f32,

    /// Starting health
    pub health: i32,
}

/// Frame loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated seconds per frame
    pub frame_step: f32,

    /// Seed for enemy placement
    pub seed: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.15,
            jump_speed: 0.3,
            gravity: 0.02,
            height: 1.8,
            radius: 0.5,
            ceiling_height: 10.0,
            enemy_push: 0.1,
            look_sensitivity: 0.002,
        }
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            bullet_speed: 0.5,
            bullet_radius: 0.1,
            hit_radius: 0.2,
            damage: 10,
            lifetime_secs: 3.0,
            muzzle_distance: 1.0,
            gun_offset: Vec3::new(0.3, -0.4, -0.5),
            gun_size: Vec3::new(0.2, 0.1, 0.5),
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            count: 5,
            spawn_attempts: 50,
            spawn_extent: 20.0,
            spawn_height: 1.0,
            clearance_radius: 1.5,
            size: Vec3::new(1.0, 2.0, 1.0),
            margin: 0.2,
            health: 100,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_step: 1.0 / 60.0,
            seed: 42,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, GameError> {
        let config = Self::load_or_default(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("player.move_speed", self.player.move_speed),
            ("player.height", self.player.height),
            ("player.radius", self.player.radius),
            ("weapon.bullet_speed", self.weapon.bullet_speed),
            ("weapon.hit_radius", self.weapon.hit_radius),
            ("enemies.spawn_extent", self.enemies.spawn_extent),
            ("simulation.frame_step", self.simulation.frame_step),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.player.ceiling_height < self.player.height {
            return Err(GameError::InvalidConfig(format!(
                "player.ceiling_height ({}) is below player.height ({})",
                self.player.ceiling_height, self.player.height
            )));
        }
        if self.enemies.health <= 0 {
            return Err(GameError::InvalidConfig(
                "enemies.health must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_speed_rejected() {
        let mut config = GameConfig::default();
        config.player.move_speed = 0.0;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_ceiling_below_eye_rejected() {
        let mut config = GameConfig::default();
        config.player.ceiling_height = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "[enemies]\ncount = 2\n\n[simulation]\nseed = 7\n").unwrap();

        let config = GameConfig::load(Some(&path)).unwrap();
        assert_eq!(config.enemies.count, 2);
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn test_invalid_file_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");
        std::fs::write(&path, "(simulation: (frame_step: 0.0))").unwrap();
        assert!(matches!(
            GameConfig::load(Some(&path)),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
