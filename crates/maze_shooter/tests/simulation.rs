//! End-to-end frame loop tests

use arena_engine::foundation::math::Vec3;
use arena_engine::physics::{ColliderKind, KindMask};
use maze_shooter::{FrameEvent, GameConfig, InputEvent, Key, MouseButton, Simulation};

fn config_without_enemies() -> GameConfig {
    let mut config = GameConfig::default();
    config.enemies.count = 0;
    config
}

fn locked(config: GameConfig) -> Simulation {
    let mut sim = Simulation::new(config).unwrap();
    sim.handle_input(InputEvent::MouseDown(MouseButton::Right));
    assert!(sim.is_locked());
    sim
}

#[test]
fn test_ten_hits_kill_enemy_and_score_one() {
    let mut sim = locked(config_without_enemies());
    let enemy = sim.spawn_enemy_at(Vec3::new(0.0, 1.0, -3.0));

    let mut damaged = Vec::new();
    let mut killed = Vec::new();
    for _ in 0..10 {
        sim.shoot();
        for _ in 0..4 {
            for event in sim.step() {
                match event {
                    FrameEvent::EnemyDamaged { remaining, .. } => damaged.push(remaining),
                    FrameEvent::EnemyKilled { enemy: id, score } => killed.push((id, score)),
                    _ => {}
                }
            }
        }
    }

    assert_eq!(damaged, vec![90, 80, 70, 60, 50, 40, 30, 20, 10]);
    assert_eq!(killed, vec![(enemy, 1)]);
    assert_eq!(sim.score(), 1);
    assert!(sim.enemies().is_empty());
    assert!(sim.world().get(enemy).is_none());
    assert!(sim.bullets().is_empty());
}

#[test]
fn test_newest_bullet_resolves_first() {
    let mut config = config_without_enemies();
    config.enemies.health = 10;
    let mut sim = locked(config);
    let enemy = sim.spawn_enemy_at(Vec3::new(0.0, 1.0, -3.0));
    let older = sim.shoot();
    let newer = sim.shoot();

    let mut hits = Vec::new();
    let mut killed = Vec::new();
    for _ in 0..4 {
        for event in sim.step() {
            match event {
                FrameEvent::BulletHit { bullet, target, .. } => hits.push((bullet, target)),
                FrameEvent::EnemyKilled { enemy: id, .. } => killed.push(id),
                _ => {}
            }
        }
    }

    assert_eq!(hits.first(), Some(&(newer, enemy)));
    assert!(!hits.contains(&(older, enemy)));
    assert_eq!(killed, vec![enemy]);
    assert_eq!(sim.score(), 1);
}

#[test]
fn test_bullets_expire_after_three_seconds() {
    let mut config = config_without_enemies();
    config.weapon.bullet_speed = 0.001;
    let mut sim = locked(config);
    let bullet = sim.shoot();

    for _ in 0..170 {
        sim.step();
    }
    assert_eq!(sim.bullets().len(), 1);

    let mut expired = false;
    for _ in 0..20 {
        expired |= sim.step().contains(&FrameEvent::BulletExpired { bullet });
    }
    assert!(expired);
    assert!(sim.bullets().is_empty());
    assert_eq!(sim.world().count_kind(ColliderKind::Bullet), 0);
}

#[test]
fn test_bullets_expire_while_released() {
    let mut sim = Simulation::new(config_without_enemies()).unwrap();
    sim.shoot();
    assert!(!sim.is_locked());

    for _ in 0..200 {
        sim.step();
    }
    assert!(sim.bullets().is_empty());
}

#[test]
fn test_player_slides_along_boundary_wall() {
    let mut sim = locked(config_without_enemies());
    sim.player_mut().eye = Vec3::new(10.0, 1.8, -22.0);
    sim.handle_input(InputEvent::KeyDown(Key::W));
    sim.handle_input(InputEvent::KeyDown(Key::D));

    for _ in 0..60 {
        sim.step();
        assert!(sim.player().eye.z > -23.8, "went through the wall: {:?}", sim.player().eye);
    }

    let eye = sim.player().eye;
    assert!(eye.z < -23.0, "never reached the wall: {eye:?}");
    assert!(eye.x > 14.0, "did not slide: {eye:?}");
}

#[test]
fn test_eye_height_stays_within_bounds() {
    let mut config = config_without_enemies();
    config.player.jump_speed = 2.0;
    let mut sim = locked(config);

    let mut touched_ceiling = false;
    for frame in 0..400 {
        if frame % 50 == 0 {
            sim.handle_input(InputEvent::KeyDown(Key::Space));
            sim.handle_input(InputEvent::KeyUp(Key::Space));
        }
        sim.step();
        let y = sim.player().eye.y;
        assert!((1.8..=10.0).contains(&y), "eye height {y} on frame {frame}");
        touched_ceiling |= (y - 10.0).abs() < f32::EPSILON;
    }
    assert!(touched_ceiling);
}

#[test]
fn test_jump_only_from_ground() {
    let mut sim = locked(config_without_enemies());
    sim.handle_input(InputEvent::KeyDown(Key::Space));
    assert!(sim.step().contains(&FrameEvent::Jumped));

    for _ in 0..5 {
        sim.step();
    }
    assert!(!sim.player().on_ground);
    let velocity = sim.player().vertical_velocity;

    sim.handle_input(InputEvent::KeyDown(Key::Space));
    assert!(!sim.step().contains(&FrameEvent::Jumped));
    assert!(sim.player().vertical_velocity < velocity);

    for _ in 0..120 {
        sim.step();
    }
    assert!(sim.player().on_ground);
    sim.handle_input(InputEvent::KeyDown(Key::Space));
    assert!(sim.step().contains(&FrameEvent::Jumped));
}

#[test]
fn test_enemies_never_spawn_inside_walls() {
    let mut total = 0;
    for seed in 0..10 {
        let mut config = GameConfig::default();
        config.simulation.seed = seed;
        let sim = Simulation::new(config).unwrap();
        let radius = sim.config().enemies.clearance_radius;

        for enemy in sim.enemies() {
            let hit = sim
                .world()
                .check_sphere(enemy.position, radius, KindMask::all().difference(KindMask::WALL));
            assert!(hit.is_none(), "seed {seed}: enemy at {:?} in {hit:?}", enemy.position);
        }
        total += sim.enemies().len();
    }
    assert!(total > 0);
}

#[test]
fn test_released_input_freezes_player_and_bullets() {
    let mut sim = locked(config_without_enemies());
    sim.handle_input(InputEvent::KeyDown(Key::W));
    let bullet = sim.shoot();
    sim.handle_input(InputEvent::Release);

    let eye = sim.player().eye;
    let position = sim.bullets()[0].position;
    for _ in 0..10 {
        sim.step();
    }
    assert_eq!(sim.player().eye, eye);
    assert_eq!(sim.bullets()[0].id, bullet);
    assert_eq!(sim.bullets()[0].position, position);
}

#[test]
fn test_submission_uses_current_score() {
    let sim = Simulation::new(config_without_enemies()).unwrap();
    let submission = sim.submission(" player ").unwrap();
    assert_eq!(submission.name, "player");
    assert_eq!(submission.score, 0);
    assert!(sim.submission("   ").is_none());
}
