//! Interpolation over transition value types.
//!
//! The `Interpolate` trait is the value abstraction the generic driver is
//! parameterized over: an unclamped component-wise lerp plus a finiteness
//! probe. The lerp is deliberately unclamped so overshoot easing can push
//! values past their endpoints mid-run; convergence is guaranteed by the
//! driver writing the exact end value on completion, never an eased result.

use crate::value::{Vec2, Vec3};

/// Trait for values a transition can animate.
pub trait Interpolate: Sized {
    /// Interpolate between self and another value.
    ///
    /// When t = 0.0, returns self. When t = 1.0, returns to. Values outside
    /// [0, 1] extrapolate past the endpoints.
    fn interpolate(&self, to: &Self, t: f32) -> Self;

    /// Whether every component is a finite number.
    ///
    /// The driver probes each interpolated candidate before writing it and
    /// skips the write for that tick when the candidate is not finite.
    fn is_finite(&self) -> bool;
}

/// Linear interpolation helper for f32 components.
#[inline]
pub(crate) fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f32(*self, *to, t)
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            x: lerp_f32(self.x, to.x, t),
            y: lerp_f32(self.y, to.y, t),
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Interpolate for Vec3 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            x: lerp_f32(self.x, to.x, t),
            y: lerp_f32(self.y, to.y, t),
            z: lerp_f32(self.z, to.z, t),
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Interpolate for [f32; 4] {
    /// Interpolate RGBA color values, per component including alpha.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        [
            lerp_f32(self[0], to[0], t),
            lerp_f32(self[1], to[1], t),
            lerp_f32(self[2], to[2], t),
            lerp_f32(self[3], to[3], t),
        ]
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_f32_interpolation() {
        let from = 0.0_f32;
        let to = 100.0_f32;

        assert!(approx_eq(from.interpolate(&to, 0.0), 0.0));
        assert!(approx_eq(from.interpolate(&to, 0.25), 25.0));
        assert!(approx_eq(from.interpolate(&to, 0.5), 50.0));
        assert!(approx_eq(from.interpolate(&to, 1.0), 100.0));
    }

    #[test]
    fn test_vec_interpolation() {
        let from = Vec2::new(0.0, 10.0);
        let to = Vec2::new(100.0, 20.0);
        let mid = from.interpolate(&to, 0.5);
        assert!(approx_eq(mid.x, 50.0));
        assert!(approx_eq(mid.y, 15.0));

        let from = Vec3::new(-50.0, 0.0, 1.0);
        let to = Vec3::new(50.0, 0.0, 3.0);
        let mid = from.interpolate(&to, 0.5);
        assert!(approx_eq(mid.x, 0.0));
        assert!(approx_eq(mid.z, 2.0));
    }

    #[test]
    fn test_color_interpolation() {
        let red: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
        let blue: [f32; 4] = [0.0, 0.0, 1.0, 0.0];

        let mid = red.interpolate(&blue, 0.5);
        assert!(approx_eq(mid[0], 0.5));
        assert!(approx_eq(mid[1], 0.0));
        assert!(approx_eq(mid[2], 0.5));
        assert!(approx_eq(mid[3], 0.5));
    }

    #[test]
    fn test_extrapolation() {
        // Overshoot easing produces factors outside [0, 1]; the lerp must
        // extrapolate rather than clamp.
        let from = 0.0_f32;
        let to = 100.0_f32;
        assert!(approx_eq(from.interpolate(&to, 1.5), 150.0));
        assert!(approx_eq(from.interpolate(&to, -0.5), -50.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(1.0_f32.is_finite());
        assert!(Interpolate::is_finite(&Vec3::new(0.0, 1.0, 2.0)));
        assert!(!Interpolate::is_finite(&f32::NAN));
        assert!(!Interpolate::is_finite(&Vec2::new(f32::INFINITY, 0.0)));
        assert!(!Interpolate::is_finite(&[0.0, f32::NAN, 0.0, 1.0]));
    }
}
