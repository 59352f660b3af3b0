//! Primitive collision shapes and intersection algorithms
//!
//! Provides the two shapes the arena needs: axis-aligned boxes for static
//! and dynamic objects, and spheres for the probes tested against them.

use crate::foundation::math::{Quat, Vec3};

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &Self) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }
}

/// An axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from its two corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box centered on `center` with full extents `size`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest axis-aligned box enclosing a box of full extents `size`
    /// centered on `center` and rotated by `rotation`
    pub fn from_oriented(center: Vec3, size: Vec3, rotation: &Quat) -> Self {
        let half = size * 0.5;
        let mut min = Vec3::repeat(f32::INFINITY);
        let mut max = Vec3::repeat(f32::NEG_INFINITY);
        for corner in 0..8 {
            let local = Vec3::new(
                if corner & 1 == 0 { -half.x } else { half.x },
                if corner & 2 == 0 { -half.y } else { half.y },
                if corner & 4 == 0 { -half.z } else { half.z },
            );
            let world = center + rotation * local;
            min = min.inf(&world);
            max = max.sup(&world);
        }
        Self { min, max }
    }

    /// Center point of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extents of the box
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Grow every face outward by `margin`
    #[must_use]
    pub fn expand_by_scalar(mut self, margin: f32) -> Self {
        let offset = Vec3::repeat(margin);
        self.min -= offset;
        self.max += offset;
        self
    }

    /// Move the box by `offset`
    #[must_use]
    pub fn translate(mut self, offset: Vec3) -> Self {
        self.min += offset;
        self.max += offset;
        self
    }

    /// Point inside or on the box nearest to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Whether `point` lies inside or on the box
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Box/sphere overlap. Touching counts as intersecting.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let closest = self.closest_point(sphere.center);
        (closest - sphere.center).magnitude_squared() <= sphere.radius * sphere.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb {
        Aabb::from_center_size(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0))
    }

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(Vec3::new(10.0, 2.5, 0.0), Vec3::new(10.0, 5.0, 1.0));
        assert_relative_eq!(aabb.min, Vec3::new(5.0, 0.0, -0.5));
        assert_relative_eq!(aabb.max, Vec3::new(15.0, 5.0, 0.5));
        assert_relative_eq!(aabb.center(), Vec3::new(10.0, 2.5, 0.0));
    }

    #[test]
    fn test_expand_by_scalar() {
        let aabb = unit_box().expand_by_scalar(0.2);
        assert_relative_eq!(aabb.size(), Vec3::new(2.4, 2.4, 2.4), epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_inside_box() {
        assert!(unit_box().intersects_sphere(&BoundingSphere::new(Vec3::zeros(), 0.1)));
    }

    #[test]
    fn test_sphere_touching_face() {
        let sphere = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 0.5);
        assert!(unit_box().intersects_sphere(&sphere));
    }

    #[test]
    fn test_sphere_near_corner_misses() {
        // Within 0.5 of each face plane but farther than 0.5 from the corner.
        let sphere = BoundingSphere::new(Vec3::new(1.4, 1.4, 1.4), 0.5);
        assert!(!unit_box().intersects_sphere(&sphere));
    }

    #[test]
    fn test_from_oriented_quarter_turn_swaps_extents() {
        let rotation = crate::foundation::math::utils::yaw_pitch(std::f32::consts::FRAC_PI_2, 0.0);
        let aabb = Aabb::from_oriented(Vec3::zeros(), Vec3::new(0.2, 0.1, 0.5), &rotation);
        assert_relative_eq!(aabb.size(), Vec3::new(0.5, 0.1, 0.2), epsilon = 1e-5);
    }

    #[test]
    fn test_from_oriented_identity_matches_center_size() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let size = Vec3::new(0.2, 0.1, 0.5);
        let aabb = Aabb::from_oriented(center, size, &Quat::identity());
        let expected = Aabb::from_center_size(center, size);
        assert_relative_eq!(aabb.min, expected.min, epsilon = 1e-6);
        assert_relative_eq!(aabb.max, expected.max, epsilon = 1e-6);
    }

    #[test]
    fn test_translate_and_contains() {
        let moved = unit_box().translate(Vec3::new(5.0, 0.0, 0.0));
        assert!(moved.contains_point(Vec3::new(5.5, 0.0, 0.0)));
        assert!(!moved.contains_point(Vec3::zeros()));
    }

    #[test]
    fn test_spheres_intersect() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0);
        let c = BoundingSphere::new(Vec3::new(2.1, 0.0, 0.0), 1.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
