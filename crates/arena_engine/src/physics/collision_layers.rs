//! Collider kinds and kind masks for filtering collision queries
//!
//! Every collidable carries exactly one [`ColliderKind`]. Queries pass a
//! [`KindMask`] naming the kinds to skip.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Semantic type tag of a collidable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColliderKind {
    /// Maze and boundary walls
    Wall,
    /// Walkable ground
    Floor,
    /// Upper bound of the arena
    Ceiling,
    /// Damageable target
    Enemy,
    /// Projectile in flight
    Bullet,
    /// Weapon held by the player
    PlayerGun,
}

bitflags! {
    /// Set of collider kinds
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KindMask: u32 {
        /// Walls
        const WALL = 1 << 0;
        /// Floors
        const FLOOR = 1 << 1;
        /// Ceilings
        const CEILING = 1 << 2;
        /// Enemies
        const ENEMY = 1 << 3;
        /// Bullets
        const BULLET = 1 << 4;
        /// The player's gun
        const PLAYER_GUN = 1 << 5;
    }
}

impl ColliderKind {
    /// Single-kind mask for this kind
    pub const fn mask(self) -> KindMask {
        match self {
            Self::Wall => KindMask::WALL,
            Self::Floor => KindMask::FLOOR,
            Self::Ceiling => KindMask::CEILING,
            Self::Enemy => KindMask::ENEMY,
            Self::Bullet => KindMask::BULLET,
            Self::PlayerGun => KindMask::PLAYER_GUN,
        }
    }

    /// Stable lowercase name, used in logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Ceiling => "ceiling",
            Self::Enemy => "enemy",
            Self::Bullet => "bullet",
            Self::PlayerGun => "player_gun",
        }
    }
}

impl KindMask {
    /// Whether `kind` is a member of this mask
    pub const fn includes(self, kind: ColliderKind) -> bool {
        self.contains(kind.mask())
    }
}
