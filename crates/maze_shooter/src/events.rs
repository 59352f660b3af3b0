//! Events emitted while stepping the simulation

use arena_engine::ecs::Entity;
use arena_engine::physics::ColliderKind;
use serde::Serialize;

/// Something that happened during a frame.
///
/// The simulation collects these while it runs and hands them back from
/// [`crate::Simulation::step`], so a front end can play sounds or update the
/// HUD without polling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameEvent {
    /// A bullet was fired
    Shot {
        /// The new bullet
        bullet: Entity,
    },
    /// The player left the ground
    Jumped,
    /// A bullet touched another object and was removed
    BulletHit {
        /// The spent bullet
        bullet: Entity,
        /// What it hit
        target: Entity,
        /// Kind of the object it hit
        kind: ColliderKind,
    },
    /// An enemy lost health and survived
    EnemyDamaged {
        /// The enemy
        enemy: Entity,
        /// Health left
        remaining: i32,
    },
    /// An enemy ran out of health and was removed
    EnemyKilled {
        /// The removed enemy
        enemy: Entity,
        /// Score after the kill
        score: u32,
    },
    /// A bullet hit nothing before its lifetime ran out
    BulletExpired {
        /// The removed bullet
        bullet: Entity,
    },
}

impl FrameEvent {
    /// Short name for log lines
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Shot { .. } => "shot",
            Self::Jumped => "jumped",
            Self::BulletHit { .. } => "bullet_hit",
            Self::EnemyDamaged { .. } => "enemy_damaged",
            Self::EnemyKilled { .. } => "enemy_killed",
            Self::BulletExpired { .. } => "bullet_expired",
        }
    }
}
