//! Flat collision world
//!
//! Holds every collidable in one insertion-ordered list and answers sphere
//! queries by scanning it front to back. Queries report the first overlap
//! in list order, so the order objects were added decides which one wins
//! when a probe touches several at once.

use crate::ecs::{Entity, EntityAllocator};
use crate::foundation::math::Vec3;
use crate::physics::collision::{Aabb, BoundingSphere};
use crate::physics::collision_layers::{ColliderKind, KindMask};

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The local player
    Player,
}

/// An object participating in collision checks
#[derive(Debug, Clone, PartialEq)]
pub struct Collidable {
    /// Handle shared with whatever renders this object
    pub id: Entity,
    /// Semantic type tag
    pub kind: ColliderKind,
    /// World-space bounds used for every test
    pub bounds: Aabb,
    /// Position of the visual object; pushes are computed from it
    pub center: Vec3,
    /// Whether a renderer should draw the object
    pub visible: bool,
    /// Remaining health for damageable objects
    pub health: Option<i32>,
    /// Owner for projectiles
    pub owner: Option<Owner>,
}

/// Result of a successful sphere query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionHit {
    /// The object that was hit
    pub id: Entity,
    /// Its kind
    pub kind: ColliderKind,
    /// Its visual position
    pub center: Vec3,
}

impl From<&Collidable> for CollisionHit {
    fn from(object: &Collidable) -> Self {
        Self {
            id: object.id,
            kind: object.kind,
            center: object.center,
        }
    }
}

/// Insertion-ordered list of collidables with linear-scan queries
#[derive(Debug, Default)]
pub struct CollisionWorld {
    ids: EntityAllocator,
    objects: Vec<Collidable>,
}

impl CollisionWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible object with no health or owner
    pub fn insert(&mut self, kind: ColliderKind, bounds: Aabb, center: Vec3) -> Entity {
        self.insert_with(kind, bounds, center, |_| {})
    }

    /// Add an object and let `configure` fill in the optional fields
    pub fn insert_with(
        &mut self,
        kind: ColliderKind,
        bounds: Aabb,
        center: Vec3,
        configure: impl FnOnce(&mut Collidable),
    ) -> Entity {
        let id = self.ids.allocate();
        let mut object = Collidable {
            id,
            kind,
            bounds,
            center,
            visible: true,
            health: None,
            owner: None,
        };
        configure(&mut object);
        log::trace!("Registered {} collider {}", kind.name(), id);
        self.objects.push(object);
        id
    }

    /// Remove an object, keeping the relative order of the rest.
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: Entity) -> Option<Collidable> {
        let index = self.objects.iter().position(|object| object.id == id)?;
        let removed = self.objects.remove(index);
        log::trace!("Removed {} collider {}", removed.kind.name(), id);
        Some(removed)
    }

    /// Look up an object
    pub fn get(&self, id: Entity) -> Option<&Collidable> {
        self.objects.iter().find(|object| object.id == id)
    }

    /// Look up an object mutably
    pub fn get_mut(&mut self, id: Entity) -> Option<&mut Collidable> {
        self.objects.iter_mut().find(|object| object.id == id)
    }

    /// Move an object. Returns false when the id is unknown.
    pub fn set_bounds(&mut self, id: Entity, bounds: Aabb, center: Vec3) -> bool {
        match self.get_mut(id) {
            Some(object) => {
                object.bounds = bounds;
                object.center = center;
                true
            }
            None => false,
        }
    }

    /// First object, in list order, whose box touches a sphere of `radius`
    /// around `center`. Objects whose kind is in `ignore` are skipped.
    pub fn check_sphere(&self, center: Vec3, radius: f32, ignore: KindMask) -> Option<CollisionHit> {
        let sphere = BoundingSphere::new(center, radius);
        self.objects
            .iter()
            .filter(|object| !ignore.includes(object.kind))
            .find(|object| object.bounds.intersects_sphere(&sphere))
            .map(CollisionHit::from)
    }

    /// First object of `kind` touching `sphere`
    pub fn first_of_kind_touching(
        &self,
        kind: ColliderKind,
        sphere: &BoundingSphere,
    ) -> Option<CollisionHit> {
        self.objects
            .iter()
            .filter(|object| object.kind == kind)
            .find(|object| object.bounds.intersects_sphere(sphere))
            .map(CollisionHit::from)
    }

    /// All objects in list order
    pub fn iter(&self) -> impl Iterator<Item = &Collidable> {
        self.objects.iter()
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the world has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects of `kind`
    pub fn count_kind(&self, kind: ColliderKind) -> usize {
        self.objects.iter().filter(|object| object.kind == kind).count()
    }
}
