//! Vector and rotation value types.
//!
//! These are the concrete value types the transition wrappers animate:
//! - `Vec2`: 2D size
//! - `Vec3`: position, scale, rotation-as-Euler-degrees
//! - `Quat`: composed rotation handed to the host on each write
//!
//! All types are plain `Copy` data with component-wise arithmetic; no SIMD,
//! no generic dimension machinery.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a vector with the same value in both components.
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    /// Unit X axis.
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    /// Unit Y axis.
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    /// Unit Z axis.
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with the same value in all components.
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value, z: value }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// A rotation quaternion.
///
/// Built from per-axis rotations and handed to `RotationTarget::set_rotation`
/// on each interpolation write. The engine interpolates Euler angle triples
/// and composes a fresh quaternion per write; it never interpolates
/// quaternions directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Rotation of `degrees` around a unit `axis`.
    pub fn from_axis_angle(axis: Vec3, degrees: f32) -> Self {
        let half = degrees.to_radians() * 0.5;
        let (sin, cos) = half.sin_cos();
        Self {
            x: axis.x * sin,
            y: axis.y * sin,
            z: axis.z * sin,
            w: cos,
        }
    }

    /// Compose a rotation from Euler angles in degrees, as the chained
    /// single-axis rotations `X * Y * Z`. Under the product below the Z
    /// factor acts on vectors first and X last.
    ///
    /// This is deliberately not a combined Euler conversion; each axis
    /// animates independently and the composition order is part of the
    /// visual contract.
    pub fn from_euler_xyz(degrees: Vec3) -> Self {
        let qx = Self::from_axis_angle(Vec3::X, degrees.x);
        let qy = Self::from_axis_angle(Vec3::Y, degrees.y);
        let qz = Self::from_axis_angle(Vec3::Z, degrees.z);
        qx * (qy * qz)
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Rotate a vector by this quaternion.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let s = self.w;
        let uv = u.cross(v);
        let uuv = u.cross(uv);
        Vec3::new(
            v.x + 2.0 * (s * uv.x + uuv.x),
            v.y + 2.0 * (s * uv.y + uuv.y),
            v.z + 2.0 * (s * uv.z + uuv.z),
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;

    /// Hamilton product. `a * b` rotates by `b` first, then by `a`.
    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}
