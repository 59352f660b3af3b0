//! Arena layout
//!
//! The maze is a 50×50 walled square with a cross of interior walls, an
//! invisible floor and an invisible ceiling.

use arena_engine::ecs::Entity;
use arena_engine::foundation::math::Vec3;
use arena_engine::physics::{Aabb, ColliderKind, CollisionWorld};

/// Margin added to every face of a wall's box, keeping the player from
/// getting too close
pub const WALL_MARGIN: f32 = 0.2;

/// Placement of one wall-like object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSpec {
    /// Center of the wall
    pub center: Vec3,
    /// Full extents
    pub size: Vec3,
    /// Whether a renderer should draw it
    pub visible: bool,
    /// Wall, floor or ceiling
    pub kind: ColliderKind,
}

impl WallSpec {
    /// Visible wall
    pub const fn wall(center: [f32; 3], size: [f32; 3]) -> Self {
        Self::new(center, size, true, ColliderKind::Wall)
    }

    /// Wall-like object of any kind
    pub const fn new(center: [f32; 3], size: [f32; 3], visible: bool, kind: ColliderKind) -> Self {
        Self {
            center: Vec3::new(center[0], center[1], center[2]),
            size: Vec3::new(size[0], size[1], size[2]),
            visible,
            kind,
        }
    }

    /// Collision box of this wall, margin included
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size).expand_by_scalar(WALL_MARGIN)
    }
}

/// Interior walls
const MAZE_WALLS: [WallSpec; 8] = [
    WallSpec::wall([10.0, 2.5, 0.0], [10.0, 5.0, 1.0]),
    WallSpec::wall([0.0, 2.5, 10.0], [1.0, 5.0, 10.0]),
    WallSpec::wall([-10.0, 2.5, 0.0], [10.0, 5.0, 1.0]),
    WallSpec::wall([0.0, 2.5, -10.0], [1.0, 5.0, 10.0]),
    WallSpec::wall([5.0, 2.5, 5.0], [10.0, 5.0, 0.5]),
    WallSpec::wall([-5.0, 2.5, 5.0], [10.0, 5.0, 0.5]),
    WallSpec::wall([5.0, 2.5, -5.0], [10.0, 5.0, 0.5]),
    WallSpec::wall([-5.0, 2.5, -5.0], [10.0, 5.0, 0.5]),
];

const FLOOR: WallSpec = WallSpec::new([0.0, 0.0, 0.0], [50.0, 0.1, 50.0], false, ColliderKind::Floor);

const CEILING: WallSpec = WallSpec::new([0.0, 10.0, 0.0], [50.0, 0.1, 50.0], false, ColliderKind::Ceiling);

/// Outer walls
const BOUNDARY_WALLS: [WallSpec; 4] = [
    WallSpec::wall([0.0, 6.25, -25.0], [50.0, 12.5, 1.0]),
    WallSpec::wall([0.0, 6.25, 25.0], [50.0, 12.5, 1.0]),
    WallSpec::wall([-25.0, 6.25, 0.0], [1.0, 12.5, 52.0]),
    WallSpec::wall([25.0, 6.25, 0.0], [1.0, 12.5, 52.0]),
];

/// Full layout in registration order: maze, floor, ceiling, boundary
pub fn maze_layout() -> Vec<WallSpec> {
    MAZE_WALLS
        .iter()
        .chain([&FLOOR, &CEILING])
        .chain(BOUNDARY_WALLS.iter())
        .copied()
        .collect()
}

/// Register one wall
pub fn create_wall(world: &mut CollisionWorld, spec: &WallSpec) -> Entity {
    world.insert_with(spec.kind, spec.bounds(), spec.center, |wall| {
        wall.visible = spec.visible;
    })
}

/// Register the whole maze. Returns the ids in registration order.
pub fn build(world: &mut CollisionWorld) -> Vec<Entity> {
    let layout = maze_layout();
    let ids: Vec<_> = layout.iter().map(|spec| create_wall(world, spec)).collect();
    log::debug!("Arena built with {} wall objects", ids.len());
    ids
}
