//! Enemy placement and damage

use arena_engine::ecs::Entity;
use arena_engine::foundation::math::Vec3;
use arena_engine::physics::{Aabb, ColliderKind, CollisionWorld, KindMask};
use rand::Rng;

use crate::config::EnemyConfig;

/// Kinds a spawn position may overlap
pub const SPAWN_IGNORE: KindMask = KindMask::ENEMY.union(KindMask::FLOOR).union(KindMask::CEILING);

/// A live enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    /// Collider id
    pub id: Entity,
    /// Center of the enemy body
    pub position: Vec3,
}

/// Result of damaging an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Survived with this much health
    Wounded(i32),
    /// Health reached zero; the collider has been removed
    Killed,
}

/// Collision box of an enemy centered on `position`
pub fn enemy_bounds(position: Vec3, config: &EnemyConfig) -> Aabb {
    Aabb::from_center_size(position, config.size).expand_by_scalar(config.margin)
}

/// Register an enemy at `position` without any clearance check
pub fn spawn_at(world: &mut CollisionWorld, position: Vec3, config: &EnemyConfig) -> Enemy {
    let id = world.insert_with(
        ColliderKind::Enemy,
        enemy_bounds(position, config),
        position,
        |enemy| enemy.health = Some(config.health),
    );
    Enemy { id, position }
}

/// Place up to `config.count` enemies at random free positions.
///
/// Each enemy gets `config.spawn_attempts` tries; an enemy with no free
/// position after that is skipped.
pub fn spawn_random(world: &mut CollisionWorld, config: &EnemyConfig, rng: &mut impl Rng) -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(config.count as usize);
    for index in 0..config.count {
        let placed = (0..config.spawn_attempts).find_map(|_| {
            let position = Vec3::new(
                rng.gen_range(-config.spawn_extent..config.spawn_extent),
                config.spawn_height,
                rng.gen_range(-config.spawn_extent..config.spawn_extent),
            );
            world
                .check_sphere(position, config.clearance_radius, SPAWN_IGNORE)
                .is_none()
                .then_some(position)
        });

        match placed {
            Some(position) => enemies.push(spawn_at(world, position, config)),
            None => log::warn!(
                "No free position for enemy {} after {} attempts",
                index,
                config.spawn_attempts
            ),
        }
    }
    log::info!("Spawned {} of {} enemies", enemies.len(), config.count);
    enemies
}

/// Subtract `damage` from an enemy's health, removing it at zero.
/// Returns `None` when `id` is not a live enemy.
pub fn apply_damage(world: &mut CollisionWorld, id: Entity, damage: i32) -> Option<DamageOutcome> {
    let enemy = world.get_mut(id).filter(|object| object.kind == ColliderKind::Enemy)?;
    let health = enemy.health.get_or_insert(0);
    *health -= damage;
    let remaining = *health;

    if remaining <= 0 {
        world.remove(id);
        Some(DamageOutcome::Killed)
    } else {
        Some(DamageOutcome::Wounded(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_spawns_avoid_walls() {
        let mut world = CollisionWorld::new();
        arena::build(&mut world);
        let config = EnemyConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        let enemies = spawn_random(&mut world, &config, &mut rng);
        assert!(!enemies.is_empty());
        for enemy in &enemies {
            let blocked = world.check_sphere(
                enemy.position,
                config.clearance_radius,
                SPAWN_IGNORE.union(KindMask::PLAYER_GUN),
            );
            assert!(blocked.is_none(), "enemy at {:?} overlaps {:?}", enemy.position, blocked);
            assert!(enemy.position.x >= -20.0 && enemy.position.x < 20.0);
            assert!((enemy.position.y - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = EnemyConfig::default();
        let place = |seed| {
            let mut world = CollisionWorld::new();
            arena::build(&mut world);
            let mut rng = StdRng::seed_from_u64(seed);
            spawn_random(&mut world, &config, &mut rng)
                .iter()
                .map(|enemy| enemy.position)
                .collect::<Vec<_>>()
        };
        assert_eq!(place(3), place(3));
    }

    #[test]
    fn test_no_room_spawns_nothing() {
        let mut world = CollisionWorld::new();
        let center = Vec3::zeros();
        world.insert(
            ColliderKind::Wall,
            Aabb::from_center_size(center, Vec3::repeat(100.0)),
            center,
        );
        let config = EnemyConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(spawn_random(&mut world, &config, &mut rng).is_empty());
    }

    #[test]
    fn test_damage_until_dead() {
        let mut world = CollisionWorld::new();
        let config = EnemyConfig::default();
        let enemy = spawn_at(&mut world, Vec3::new(0.0, 1.0, -5.0), &config);

        for hit in 1..10 {
            assert_eq!(
                apply_damage(&mut world, enemy.id, 10),
                Some(DamageOutcome::Wounded(100 - hit * 10))
            );
        }
        assert_eq!(apply_damage(&mut world, enemy.id, 10), Some(DamageOutcome::Killed));
        assert!(world.get(enemy.id).is_none());
        assert_eq!(apply_damage(&mut world, enemy.id, 10), None);
    }

    #[test]
    fn test_damage_ignores_non_enemies() {
        let mut world = CollisionWorld::new();
        let center = Vec3::zeros();
        let wall = world.insert(
            ColliderKind::Wall,
            Aabb::from_center_size(center, Vec3::repeat(1.0)),
            center,
        );
        assert_eq!(apply_damage(&mut world, wall, 10), None);
        assert!(world.get(wall).is_some());
    }
}
