//! Per-frame game simulation
//!
//! [`Simulation`] owns the collision world and every piece of game state.
//! Input events are applied as they arrive; [`Simulation::step`] then
//! advances one fixed frame in this order:
//!
//! 1. bullets, newest first: move, test for hits, apply damage
//! 2. gravity, ground check and vertical motion
//! 3. horizontal motion with collide-and-slide
//! 4. height clamp
//! 5. gun placement and bullet expiry
//!
//! Steps 1-4 only run while input is captured ("locked"). Step 5 always runs.

use arena_engine::ecs::Entity;
use arena_engine::foundation::math::Vec3;
use arena_engine::foundation::time::FrameClock;
use arena_engine::physics::{ColliderKind, CollisionWorld, Owner};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::enemies::{self, DamageOutcome, Enemy};
use crate::events::FrameEvent;
use crate::input::{InputEvent, Key, MouseButton};
use crate::player::{MoveOutcome, Player};
use crate::score::ScoreSubmission;
use crate::weapon::{self, Bullet, Gun, BULLET_IGNORE};
use crate::{arena, GameError};

/// The whole game state
#[derive(Debug)]
pub struct Simulation {
    config: GameConfig,
    world: CollisionWorld,
    clock: FrameClock,
    player: Player,
    gun: Gun,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    score: u32,
    locked: bool,
    pending: Vec<FrameEvent>,
}

/// Serializable summary of the state after a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Frames stepped so far
    pub frame: u64,
    /// Simulated seconds
    pub time: f32,
    /// Whether input is captured
    pub locked: bool,
    /// Enemies killed
    pub score: u32,
    /// Eye position
    pub eye: Vec3,
    /// View yaw, radians
    pub yaw: f32,
    /// View pitch, radians
    pub pitch: f32,
    /// Whether the player stands on the floor
    pub on_ground: bool,
    /// Live enemies
    pub enemies: Vec<EnemyState>,
    /// Bullets in flight
    pub bullets: usize,
}

/// One enemy in a [`Snapshot`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyState {
    /// Collider id
    pub id: Entity,
    /// Body center
    pub position: Vec3,
    /// Health left
    pub health: i32,
}

impl Simulation {
    /// Build the arena, equip the gun and place the enemies
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut world = CollisionWorld::new();
        arena::build(&mut world);

        let player = Player::new(&config.player);
        let gun = Gun::equip(&mut world, &player, &config.weapon);

        let mut rng = StdRng::seed_from_u64(config.simulation.seed);
        let enemies = enemies::spawn_random(&mut world, &config.enemies, &mut rng);

        log::info!(
            "Simulation ready: {} colliders, {} enemies, seed {}",
            world.len(),
            enemies.len(),
            config.simulation.seed
        );

        Ok(Self {
            clock: FrameClock::new(config.simulation.frame_step),
            config,
            world,
            player,
            gun,
            bullets: Vec::new(),
            enemies,
            score: 0,
            locked: false,
            pending: Vec::new(),
        })
    }

    /// Apply one input event
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.lock();
                self.set_key(key, true);
            }
            InputEvent::KeyUp(key) => self.set_key(key, false),
            InputEvent::MouseDown(button) => {
                self.lock();
                if button == MouseButton::Left {
                    self.shoot();
                }
            }
            InputEvent::MouseMove { dx, dy } => {
                if self.locked {
                    self.player
                        .view
                        .look(dx, dy, self.config.player.look_sensitivity);
                }
            }
            InputEvent::Release => {
                if self.locked {
                    log::debug!("Input released");
                }
                self.locked = false;
            }
        }
    }

    fn lock(&mut self) {
        if !self.locked {
            log::debug!("Input captured");
            self.locked = true;
        }
    }

    fn set_key(&mut self, key: Key, down: bool) {
        match key {
            Key::W => self.player.moves.forward = down,
            Key::S => self.player.moves.backward = down,
            Key::A => self.player.moves.left = down,
            Key::D => self.player.moves.right = down,
            Key::Space => {
                if down && self.player.jump(&self.config.player) {
                    self.pending.push(FrameEvent::Jumped);
                }
            }
        }
    }

    /// Fire a bullet along the view. Returns the bullet's id.
    pub fn shoot(&mut self) -> Entity {
        let bullet = weapon::fire(
            &mut self.world,
            &self.player,
            &self.config.weapon,
            self.clock.total_time(),
        );
        let id = bullet.id;
        self.bullets.push(bullet);
        self.pending.push(FrameEvent::Shot { bullet: id });
        id
    }

    /// Advance one frame. Returns everything that happened since the
    /// previous step, input-triggered events included.
    pub fn step(&mut self) -> Vec<FrameEvent> {
        self.clock.tick();
        let mut events = std::mem::take(&mut self.pending);

        if self.locked {
            self.update_bullets(&mut events);

            let player_config = &self.config.player;
            self.player.update_vertical(&self.world, player_config);
            let outcome = self.player.update_horizontal(&self.world, player_config);
            if matches!(outcome, MoveOutcome::Blocked | MoveOutcome::PushedByEnemy) {
                log::trace!("Frame {}: {:?}", self.clock.frame_count(), outcome);
            }
            self.player.clamp_height(player_config);
        }

        self.gun.follow(&mut self.world, &self.player, &self.config.weapon);
        self.expire_bullets(&mut events);
        events
    }

    fn update_bullets(&mut self, events: &mut Vec<FrameEvent>) {
        for index in (0..self.bullets.len()).rev() {
            let bullet = &mut self.bullets[index];
            bullet.advance(&mut self.world, &self.config.weapon);

            let Some(hit) = self.world.check_sphere(
                bullet.position,
                self.config.weapon.hit_radius,
                BULLET_IGNORE,
            ) else {
                continue;
            };

            let bullet = self.bullets.remove(index);
            self.world.remove(bullet.id);
            events.push(FrameEvent::BulletHit {
                bullet: bullet.id,
                target: hit.id,
                kind: hit.kind,
            });

            if hit.kind == ColliderKind::Enemy && bullet.owner == Owner::Player {
                self.damage_enemy(hit.id, bullet.damage, events);
            }
        }
    }

    fn damage_enemy(&mut self, enemy: Entity, damage: i32, events: &mut Vec<FrameEvent>) {
        match enemies::apply_damage(&mut self.world, enemy, damage) {
            Some(DamageOutcome::Wounded(remaining)) => {
                events.push(FrameEvent::EnemyDamaged { enemy, remaining });
            }
            Some(DamageOutcome::Killed) => {
                self.enemies.retain(|live| live.id != enemy);
                self.score += 1;
                log::info!("Enemy {} killed, score {}", enemy, self.score);
                events.push(FrameEvent::EnemyKilled {
                    enemy,
                    score: self.score,
                });
            }
            None => {}
        }
    }

    fn expire_bullets(&mut self, events: &mut Vec<FrameEvent>) {
        let now = self.clock.total_time();
        let world = &mut self.world;
        self.bullets.retain(|bullet| {
            if !bullet.lifetime.is_expired(now) {
                return true;
            }
            world.remove(bullet.id);
            events.push(FrameEvent::BulletExpired { bullet: bullet.id });
            false
        });
    }

    /// Place an enemy at `position` regardless of what is there
    pub fn spawn_enemy_at(&mut self, position: Vec3) -> Entity {
        let enemy = enemies::spawn_at(&mut self.world, position, &self.config.enemies);
        self.enemies.push(enemy);
        enemy.id
    }

    /// Score submission for the current score
    pub fn submission(&self, name: &str) -> Option<ScoreSubmission> {
        ScoreSubmission::new(name, self.score)
    }

    /// Summary of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.clock.frame_count(),
            time: self.clock.total_time(),
            locked: self.locked,
            score: self.score,
            eye: self.player.eye,
            yaw: self.player.view.yaw,
            pitch: self.player.view.pitch,
            on_ground: self.player.on_ground,
            enemies: self
                .enemies
                .iter()
                .map(|enemy| EnemyState {
                    id: enemy.id,
                    position: enemy.position,
                    health: self
                        .world
                        .get(enemy.id)
                        .and_then(|object| object.health)
                        .unwrap_or(0),
                })
                .collect(),
            bullets: self.bullets.len(),
        }
    }

    /// The player
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The player, mutably. Lets a driver aim or teleport directly.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The collision world
    pub const fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// The gun
    pub const fn gun(&self) -> Gun {
        self.gun
    }

    /// Bullets in flight, oldest first
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Live enemies
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Enemies killed
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Whether input is captured
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Simulated seconds
    pub fn time(&self) -> f32 {
        self.clock.total_time()
    }

    /// Frames stepped
    pub fn frame(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Active configuration
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_arena() -> Simulation {
        let mut config = GameConfig::default();
        config.enemies.count = 0;
        Simulation::new(config).unwrap()
    }

    #[test]
    fn test_starts_unlocked_at_center() {
        let sim = empty_arena();
        assert!(!sim.is_locked());
        assert_eq!(sim.player().eye, Vec3::new(0.0, 1.8, 0.0));
        assert_eq!(sim.world().len(), 15);
    }

    #[test]
    fn test_key_down_locks_and_key_up_clears() {
        let mut sim = empty_arena();
        sim.handle_input(InputEvent::KeyDown(Key::A));
        assert!(sim.is_locked());
        assert!(sim.player().moves.left);
        sim.handle_input(InputEvent::KeyUp(Key::A));
        assert!(!sim.player().moves.left);
    }

    #[test]
    fn test_mouse_move_ignored_while_unlocked() {
        let mut sim = empty_arena();
        sim.handle_input(InputEvent::MouseMove { dx: 100.0, dy: 0.0 });
        assert_eq!(sim.player().view.yaw, 0.0);

        sim.handle_input(InputEvent::MouseDown(MouseButton::Right));
        sim.handle_input(InputEvent::MouseMove { dx: 100.0, dy: 0.0 });
        assert!(sim.player().view.yaw < 0.0);
    }

    #[test]
    fn test_released_player_does_not_move() {
        let mut sim = empty_arena();
        sim.handle_input(InputEvent::KeyDown(Key::W));
        sim.handle_input(InputEvent::Release);
        for _ in 0..10 {
            sim.step();
        }
        assert_eq!(sim.player().eye, Vec3::new(0.0, 1.8, 0.0));
    }

    #[test]
    fn test_input_events_reported_on_next_step() {
        let mut sim = empty_arena();
        sim.handle_input(InputEvent::KeyDown(Key::Space));
        let bullet = sim.shoot();

        let events = sim.step();
        assert!(events.contains(&FrameEvent::Jumped));
        assert!(events.contains(&FrameEvent::Shot { bullet }));
        assert!(sim.step().iter().all(|event| *event != FrameEvent::Jumped));
    }

    #[test]
    fn test_left_click_fires() {
        let mut sim = empty_arena();
        sim.handle_input(InputEvent::MouseDown(MouseButton::Left));
        assert!(sim.is_locked());
        assert_eq!(sim.bullets().len(), 1);
        assert_eq!(sim.world().count_kind(ColliderKind::Bullet), 1);
    }

    #[test]
    fn test_bullet_hitting_wall_is_removed() {
        let mut sim = empty_arena();
        sim.handle_input(InputEvent::MouseDown(MouseButton::Left));
        let bullet = sim.bullets()[0].id;

        // The interior wall along -Z starts 4.8 units out.
        let mut hit = None;
        for _ in 0..20 {
            hit = sim
                .step()
                .into_iter()
                .find(|event| matches!(event, FrameEvent::BulletHit { .. }))
                .or(hit);
        }
        assert!(matches!(
            hit,
            Some(FrameEvent::BulletHit { bullet: id, kind: ColliderKind::Wall, .. }) if id == bullet
        ));
        assert!(sim.bullets().is_empty());
        assert!(sim.world().get(bullet).is_none());
    }

    #[test]
    fn test_snapshot_reports_enemies() {
        let mut sim = empty_arena();
        let enemy = sim.spawn_enemy_at(Vec3::new(3.0, 1.0, 3.0));
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.enemies.len(), 1);
        assert_eq!(snapshot.enemies[0].id, enemy);
        assert_eq!(snapshot.enemies[0].health, 100);
        assert_eq!(snapshot.score, 0);
    }

    #[test]
    fn test_gun_tracks_player_while_unlocked() {
        let mut sim = empty_arena();
        sim.player_mut().eye.x = 2.0;
        sim.step();
        let gun = sim.world().get(sim.gun().id).unwrap();
        assert!((gun.center.x - 2.3).abs() < 1e-5);
    }
}
