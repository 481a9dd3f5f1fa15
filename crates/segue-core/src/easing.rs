//! Easing curves for transition timing.
//!
//! An easing curve maps linear elapsed-fraction (0.0 to 1.0) to the
//! interpolation factor actually handed to the value lerp:
//! - `Linear`: no shaping
//! - `Smooth`: one pass of the Hermite smoothstep
//! - `ExtraSmooth`: smoothstep applied twice
//! - `RubberBand`: a damped oscillation that overshoots the target and
//!   springs back
//!
//! # Usage
//!
//! ```
//! use segue_core::easing::Easing;
//!
//! let curve = Easing::Smooth;
//! let factor = curve.evaluate(0.5);
//! ```

use serde::{Deserialize, Serialize};

/// Easing curve for transition timing.
///
/// Input is clamped to [0, 1]; output is not clamped, because `RubberBand`
/// deliberately overshoots past 1 before settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Straight passthrough of the elapsed fraction.
    Linear,
    /// Hermite smoothstep `3t^2 - 2t^3`: gentle start and stop.
    Smooth,
    /// Smoothstep of smoothstep: even flatter ends, steeper middle.
    ExtraSmooth,
    /// `(sin(-3pi*t) / (3pi*t)) * (1 - t) + 1`: overshoots and oscillates
    /// around the target with shrinking amplitude.
    RubberBand,
}

impl Default for Easing {
    fn default() -> Self {
        Self::ExtraSmooth
    }
}

impl Easing {
    /// Evaluate the easing curve at the given fraction.
    ///
    /// # Arguments
    /// * `t` - Elapsed fraction from 0.0 to 1.0 (clamped)
    ///
    /// # Returns
    /// Interpolation factor. Outside [0, 1] only for `RubberBand`.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Smooth => smoothstep(t),
            Self::ExtraSmooth => smoothstep(smoothstep(t)),
            Self::RubberBand => rubber_band(t),
        }
    }
}

/// Hermite smoothstep on an already-normalized input.
#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Damped-oscillation overshoot curve.
///
/// The closed form divides by `3pi*t`; at `t = 0` the curve is pinned to 1
/// so the expression never divides by zero.
fn rubber_band(t: f32) -> f32 {
    if t == 0.0 {
        return 1.0;
    }
    let x = 3.0 * std::f32::consts::PI * t;
    ((-x).sin() / x) * (1.0 - t) + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear() {
        let curve = Easing::Linear;
        assert!(approx_eq(curve.evaluate(0.0), 0.0));
        assert!(approx_eq(curve.evaluate(0.25), 0.25));
        assert!(approx_eq(curve.evaluate(0.5), 0.5));
        assert!(approx_eq(curve.evaluate(0.75), 0.75));
        assert!(approx_eq(curve.evaluate(1.0), 1.0));
    }

    #[test]
    fn test_smooth_boundaries() {
        let curve = Easing::Smooth;
        assert!(approx_eq(curve.evaluate(0.0), 0.0));
        assert!(approx_eq(curve.evaluate(0.5), 0.5));
        assert!(approx_eq(curve.evaluate(1.0), 1.0));

        // Slower than linear at the start, faster past the midpoint.
        assert!(curve.evaluate(0.25) < 0.25);
        assert!(curve.evaluate(0.75) > 0.75);
    }

    #[test]
    fn test_extra_smooth_boundaries() {
        let curve = Easing::ExtraSmooth;
        assert!(approx_eq(curve.evaluate(0.0), 0.0));
        assert!(approx_eq(curve.evaluate(0.5), 0.5));
        assert!(approx_eq(curve.evaluate(1.0), 1.0));

        // Flatter ends than the single smoothstep.
        assert!(curve.evaluate(0.25) < Easing::Smooth.evaluate(0.25));
        assert!(curve.evaluate(0.75) > Easing::Smooth.evaluate(0.75));
    }

    #[test]
    fn test_rubber_band_is_pinned_at_zero() {
        // The closed form is 0/0 at t=0; the curve is defined as 1 there.
        assert_eq!(Easing::RubberBand.evaluate(0.0), 1.0);
    }

    #[test]
    fn test_rubber_band_settles_at_one() {
        let curve = Easing::RubberBand;
        assert!(approx_eq(curve.evaluate(1.0), 1.0));
        assert!(approx_eq(curve.evaluate(0.999), 1.0));
    }

    #[test]
    fn test_rubber_band_overshoots() {
        let curve = Easing::RubberBand;

        // First trough of sin(-3pi*t) is near t = 1/6, undershooting 1.
        assert!(curve.evaluate(1.0 / 6.0) < 1.0);

        // Near t = 1/2 the sine term is positive, overshooting 1.
        assert!(curve.evaluate(0.5) > 1.0);

        // Amplitude shrinks as t approaches 1.
        let early = (curve.evaluate(1.0 / 6.0) - 1.0).abs();
        let late = (curve.evaluate(5.0 / 6.0) - 1.0).abs();
        assert!(late < early);
    }

    #[test]
    fn test_input_clamping() {
        assert!(approx_eq(Easing::Smooth.evaluate(-0.5), 0.0));
        assert!(approx_eq(Easing::Smooth.evaluate(1.5), 1.0));
        assert!(approx_eq(Easing::RubberBand.evaluate(1.5), 1.0));
    }

    #[test]
    fn test_default() {
        assert_eq!(Easing::default(), Easing::ExtraSmooth);
    }
}
