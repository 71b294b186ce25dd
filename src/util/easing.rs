//! Easing functions for rotation animations.
//!
//! All curves map `[0, 1]` onto `[0, 1]` with fixed endpoints and never
//! leave that range, so an eased angle stays between its start and target.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out: accelerates until `t = 0.5`, then decelerates.
    QuadraticInOut,
}

impl EasingFunction {
    /// Default easing function for carousel rotations.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let k = -2.0 * t + 2.0;
                    1.0 - k * k / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_shape() {
        let f = EasingFunction::QuadraticInOut;
        assert_eq!(f.evaluate(0.0), 0.0);
        assert_eq!(f.evaluate(0.25), 0.125); // 2 * 0.25²
        assert_eq!(f.evaluate(0.5), 0.5);
        assert_eq!(f.evaluate(0.75), 0.875); // 1 - 0.5² / 2
        assert_eq!(f.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_is_monotonic_and_bounded() {
        let f = EasingFunction::QuadraticInOut;
        let mut prev = 0.0;
        for step in 0..=100 {
            let v = f.evaluate(step as f32 / 100.0);
            assert!((0.0..=1.0).contains(&v), "out of range at {step}: {v}");
            assert!(v >= prev, "not monotonic at {step}");
            prev = v;
        }
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let in_out = EasingFunction::QuadraticInOut;
        assert_eq!(in_out.evaluate(-0.5), 0.0);
        assert_eq!(in_out.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.0), 0.0);
        assert_eq!(quad_in.evaluate(0.5), 0.25);
        assert_eq!(quad_in.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_quadratic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticInOut);
    }
}
