//! Player controller
//!
//! Kinematic first-person movement: gravity and ground detection on the
//! vertical axis, collide-and-slide on the horizontal plane.

use arena_engine::foundation::math::{constants::HALF_PI, utils, Quat, Vec3, Vec3Ext};
use arena_engine::physics::{BoundingSphere, ColliderKind, CollisionWorld, KindMask};

use crate::config::PlayerConfig;

/// Kinds the player walks through horizontally
pub const MOVE_IGNORE: KindMask = KindMask::PLAYER_GUN.union(KindMask::FLOOR).union(KindMask::CEILING);

/// Keeps the view from flipping over at straight up or down
const PITCH_LIMIT: f32 = HALF_PI - 1.0e-3;

/// Held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags {
    /// W
    pub forward: bool,
    /// S
    pub backward: bool,
    /// A
    pub left: bool,
    /// D
    pub right: bool,
}

impl MoveFlags {
    /// Strafe axis: +1 right, -1 left, 0 when both or neither are held
    pub fn axis_x(&self) -> f32 {
        f32::from(u8::from(self.right)) - f32::from(u8::from(self.left))
    }

    /// Walk axis: +1 forward, -1 backward
    pub fn axis_z(&self) -> f32 {
        f32::from(u8::from(self.forward)) - f32::from(u8::from(self.backward))
    }
}

/// First-person view orientation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct View {
    /// Rotation about +Y, radians. Zero looks down -Z.
    pub yaw: f32,
    /// Rotation about the view's X axis, radians. Positive looks up.
    pub pitch: f32,
}

impl View {
    /// Orientation as a quaternion
    pub fn rotation(&self) -> Quat {
        utils::yaw_pitch(self.yaw, self.pitch)
    }

    /// Unit vector the view looks along
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::new(0.0, 0.0, -1.0)
    }

    /// Unit vector to the right of the view
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::new(1.0, 0.0, 0.0)
    }

    /// Turn by a relative mouse movement
    pub fn look(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw -= dx * sensitivity;
        self.set_pitch(self.pitch - dy * sensitivity);
    }

    /// Point the view from `from` toward `to`. No-op when they coincide.
    pub fn face(&mut self, from: Vec3, to: Vec3) {
        let delta = to - from;
        let horizontal = delta.flatten_y().magnitude();
        if horizontal <= f32::EPSILON && delta.y.abs() <= f32::EPSILON {
            return;
        }
        if horizontal > f32::EPSILON {
            self.yaw = (-delta.x).atan2(-delta.z);
        }
        self.set_pitch(delta.y.atan2(horizontal));
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// What a horizontal movement step did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No movement keys held
    Idle,
    /// Moved the full step
    Moved,
    /// Bumped into an enemy and was pushed away from it
    PushedByEnemy,
    /// Blocked diagonally, slid along X
    SlidX,
    /// Blocked diagonally and on X, slid along Z
    SlidZ,
    /// Could not move at all
    Blocked,
}

/// The player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Eye (camera) position
    pub eye: Vec3,
    /// Vertical velocity per frame
    pub vertical_velocity: f32,
    /// Whether the feet touched the floor during the last ground check
    pub on_ground: bool,
    /// Held movement keys
    pub moves: MoveFlags,
    /// View orientation
    pub view: View,
}

impl Player {
    /// Player standing at the arena center
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            eye: Vec3::new(0.0, config.height, 0.0),
            vertical_velocity: 0.0,
            on_ground: true,
            moves: MoveFlags::default(),
            view: View::default(),
        }
    }

    /// Start a jump if standing on the floor. Returns whether it jumped.
    pub fn jump(&mut self, config: &PlayerConfig) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vertical_velocity = config.jump_speed;
        self.on_ground = false;
        true
    }

    /// Apply gravity, test the feet against the floor, then move vertically.
    pub fn update_vertical(&mut self, world: &CollisionWorld, config: &PlayerConfig) {
        self.vertical_velocity -= config.gravity;

        let feet = BoundingSphere::new(
            Vec3::new(self.eye.x, self.eye.y - config.height, self.eye.z),
            config.radius,
        );
        self.on_ground = world.first_of_kind_touching(ColliderKind::Floor, &feet).is_some();
        if self.on_ground && self.vertical_velocity < 0.0 {
            self.vertical_velocity = 0.0;
        }

        self.eye.y += self.vertical_velocity;
    }

    /// Move along the held keys, sliding along whatever blocks the way
    pub fn update_horizontal(&mut self, world: &CollisionWorld, config: &PlayerConfig) -> MoveOutcome {
        let move_x = self.moves.axis_x();
        let move_z = self.moves.axis_z();
        if move_x == 0.0 && move_z == 0.0 {
            return MoveOutcome::Idle;
        }

        let forward = self.view.forward().flatten_y().normalize_or_zero();
        let right = self.view.right().flatten_y().normalize_or_zero();
        let direction = (forward * move_z + right * move_x).normalize_or_zero();

        let candidate = self.eye + direction * config.move_speed;
        let Some(hit) = world.check_sphere(candidate, config.radius, MOVE_IGNORE) else {
            self.eye = candidate;
            return MoveOutcome::Moved;
        };

        if hit.kind == ColliderKind::Enemy {
            let push = (self.eye - hit.center).normalize_or_zero() * config.enemy_push;
            self.eye += push;
            return MoveOutcome::PushedByEnemy;
        }

        let along_x = self.eye + Vec3::new(direction.x, 0.0, 0.0) * config.move_speed;
        if world.check_sphere(along_x, config.radius, MOVE_IGNORE).is_none() {
            self.eye = along_x;
            return MoveOutcome::SlidX;
        }

        let along_z = self.eye + Vec3::new(0.0, 0.0, direction.z) * config.move_speed;
        if world.check_sphere(along_z, config.radius, MOVE_IGNORE).is_none() {
            self.eye = along_z;
            return MoveOutcome::SlidZ;
        }

        MoveOutcome::Blocked
    }

    /// Keep the eye between the floor height and the ceiling
    pub fn clamp_height(&mut self, config: &PlayerConfig) {
        if self.eye.y < config.height {
            self.eye.y = config.height;
            self.vertical_velocity = 0.0;
            self.on_ground = true;
        } else if self.eye.y > config.ceiling_height {
            self.eye.y = config.ceiling_height;
            self.vertical_velocity = 0.0;
        }
    }
}
