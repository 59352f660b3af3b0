//! Math utilities and types
//!
//! Provides the vector and rotation types used by the simulation.

pub use nalgebra::{Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Math utility functions
pub mod utils {
    use super::{Quat, Vec3};

    /// Rotation for a first-person view: yaw about +Y, then pitch about the
    /// rotated +X (Euler order YXZ, roll fixed at zero).
    pub fn yaw_pitch(yaw: f32, pitch: f32) -> Quat {
        Quat::from_axis_angle(&Vec3::y_axis(), yaw) * Quat::from_axis_angle(&Vec3::x_axis(), pitch)
    }
}

/// Extension methods for [`Vec3`]
pub trait Vec3Ext {
    /// Unit vector in the same direction, or the zero vector when the input
    /// has no length.
    fn normalize_or_zero(&self) -> Vec3;

    /// Copy with the Y component zeroed.
    fn flatten_y(&self) -> Vec3;
}

impl Vec3Ext for Vec3 {
    fn normalize_or_zero(&self) -> Vec3 {
        let length = self.magnitude();
        if length > f32::EPSILON {
            self / length
        } else {
            Vec3::zeros()
        }
    }

    fn flatten_y(&self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }
}
