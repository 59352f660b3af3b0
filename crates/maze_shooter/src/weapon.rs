//! Gun and bullets

use arena_engine::ecs::{components::Lifetime, Entity};
use arena_engine::foundation::math::Vec3;
use arena_engine::physics::{Aabb, ColliderKind, CollisionWorld, KindMask, Owner};

use crate::config::WeaponConfig;
use crate::player::Player;

/// Kinds a bullet passes through
pub const BULLET_IGNORE: KindMask = KindMask::BULLET.union(KindMask::PLAYER_GUN);

/// A bullet in flight
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    /// Collider id
    pub id: Entity,
    /// Current center
    pub position: Vec3,
    /// Travel per frame
    pub velocity: Vec3,
    /// Damage dealt on hit
    pub damage: i32,
    /// Who fired it
    pub owner: Owner,
    /// When it is removed if it hits nothing
    pub lifetime: Lifetime,
}

/// Box of a bullet centered on `position`
pub fn bullet_bounds(position: Vec3, radius: f32) -> Aabb {
    Aabb::from_center_size(position, Vec3::repeat(radius * 2.0))
}

/// Fire a bullet from the player's eye along the view direction
pub fn fire(world: &mut CollisionWorld, player: &Player, config: &WeaponConfig, now: f32) -> Bullet {
    let direction = player.view.forward();
    let position = player.eye + direction * config.muzzle_distance;
    let id = world.insert_with(
        ColliderKind::Bullet,
        bullet_bounds(position, config.bullet_radius),
        position,
        |bullet| bullet.owner = Some(Owner::Player),
    );
    log::debug!("Bullet {} fired from {:?}", id, position);

    Bullet {
        id,
        position,
        velocity: direction * config.bullet_speed,
        damage: config.damage,
        owner: Owner::Player,
        lifetime: Lifetime::new(now, config.lifetime_secs),
    }
}

impl Bullet {
    /// Move one frame and refresh the collider
    pub fn advance(&mut self, world: &mut CollisionWorld, config: &WeaponConfig) {
        self.position += self.velocity;
        world.set_bounds(self.id, bullet_bounds(self.position, config.bullet_radius), self.position);
    }
}

/// The gun held in front of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gun {
    /// Collider id
    pub id: Entity,
}

impl Gun {
    /// Register the gun, already placed relative to `player`
    pub fn equip(world: &mut CollisionWorld, player: &Player, config: &WeaponConfig) -> Self {
        let (bounds, center) = Self::placement(player, config);
        let id = world.insert(ColliderKind::PlayerGun, bounds, center);
        Self { id }
    }

    /// Move the gun to follow the player's view
    pub fn follow(&self, world: &mut CollisionWorld, player: &Player, config: &WeaponConfig) {
        let (bounds, center) = Self::placement(player, config);
        world.set_bounds(self.id, bounds, center);
    }

    fn placement(player: &Player, config: &WeaponConfig) -> (Aabb, Vec3) {
        let rotation = player.view.rotation();
        let center = player.eye + rotation * config.gun_offset;
        (Aabb::from_oriented(center, config.gun_size, &rotation), center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_fire_spawns_in_front_of_eye() {
        let mut world = CollisionWorld::new();
        let player = Player::new(&PlayerConfig::default());
        let config = WeaponConfig::default();

        let bullet = fire(&mut world, &player, &config, 2.0);
        assert_relative_eq!(bullet.position, Vec3::new(0.0, 1.8, -1.0), epsilon = 1e-6);
        assert_relative_eq!(bullet.velocity, Vec3::new(0.0, 0.0, -0.5), epsilon = 1e-6);
        assert_relative_eq!(bullet.lifetime.expires_at(), 5.0);

        let collider = world.get(bullet.id).unwrap();
        assert_eq!(collider.kind, ColliderKind::Bullet);
        assert_eq!(collider.owner, Some(Owner::Player));
    }

    #[test]
    fn test_advance_moves_collider() {
        let mut world = CollisionWorld::new();
        let player = Player::new(&PlayerConfig::default());
        let config = WeaponConfig::default();
        let mut bullet = fire(&mut world, &player, &config, 0.0);

        bullet.advance(&mut world, &config);
        let collider = world.get(bullet.id).unwrap();
        assert_relative_eq!(collider.center, Vec3::new(0.0, 1.8, -1.5), epsilon = 1e-6);
        assert_relative_eq!(collider.bounds.size(), Vec3::repeat(0.2), epsilon = 1e-6);
    }

    #[test]
    fn test_gun_follows_view() {
        let mut world = CollisionWorld::new();
        let mut player = Player::new(&PlayerConfig::default());
        let config = WeaponConfig::default();
        let gun = Gun::equip(&mut world, &player, &config);
        assert_relative_eq!(
            world.get(gun.id).unwrap().center,
            Vec3::new(0.3, 1.4, -0.5),
            epsilon = 1e-6
        );

        player.eye.x = 4.0;
        gun.follow(&mut world, &player, &config);
        assert_relative_eq!(world.get(gun.id).unwrap().center.x, 4.3, epsilon = 1e-6);
    }
}
