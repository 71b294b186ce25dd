//! Angle helpers shared by the rotation controller, focus evaluator and
//! layout resolver.
//!
//! Carousel angles are never wrapped. These helpers compute signed
//! distances on the circle so callers can keep working with unbounded
//! values.

use std::f32::consts::{PI, TAU};

/// Yaw considered "facing the viewer".
pub const FRONT_ANGLE: f32 = PI / 2.0;

/// Fixed angular slot of model `index` in a ring of `total` models.
///
/// Returns `0.0` for an empty ring.
#[inline]
#[must_use]
pub fn slot_angle(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    index as f32 / total as f32 * TAU
}

/// Signed shortest distance of `x` from zero, in `[-π, π)`.
#[inline]
#[must_use]
pub fn wrap_signed(x: f32) -> f32 {
    (x + PI).rem_euclid(TAU) - PI
}

/// Shortest signed rotation taking `from` onto `to`, in `(-π, π]`.
///
/// `from + closest_angle_delta(from, to)` is congruent to `to` modulo 2π.
#[must_use]
pub fn closest_angle_delta(from: f32, to: f32) -> f32 {
    let delta = (to - from + PI).rem_euclid(TAU) - PI;
    if delta <= -PI {
        delta + TAU
    } else {
        delta
    }
}

/// Step `current` by `delta` positions around a ring of `len` entries.
///
/// Returns `None` for an empty ring.
#[must_use]
pub fn wrapped_index(current: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    Some((current as isize + delta).rem_euclid(len) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn congruent(a: f32, b: f32) -> bool {
        wrap_signed(a - b).abs() < 1e-4
    }

    #[test]
    fn delta_stays_in_half_open_range() {
        let samples = 48;
        for i in 0..samples {
            for j in 0..samples {
                // Grid over (-π, π]
                let from = PI - TAU * i as f32 / samples as f32;
                let to = PI - TAU * j as f32 / samples as f32;
                let delta = closest_angle_delta(from, to);
                assert!(
                    delta > -PI && delta <= PI,
                    "delta {delta} out of range for {from} -> {to}"
                );
                assert!(congruent(from + delta, to), "{from} + {delta} != {to}");
            }
        }
    }

    #[test]
    fn half_turn_resolves_to_positive_pi() {
        assert!((closest_angle_delta(0.0, PI) - PI).abs() < 1e-6);
        assert!((closest_angle_delta(PI, 0.0) - PI).abs() < 1e-6);
    }

    #[test]
    fn delta_handles_unbounded_inputs() {
        let delta = closest_angle_delta(10.0 * TAU + 0.1, -0.1);
        assert!((delta + 0.2).abs() < 1e-3, "got {delta}");
    }

    #[test]
    fn wrap_signed_is_symmetric_around_zero() {
        assert!((wrap_signed(0.5) - 0.5).abs() < 1e-6);
        assert!((wrap_signed(-0.5) + 0.5).abs() < 1e-6);
        assert!((wrap_signed(TAU + 0.25) - 0.25).abs() < 1e-5);
    }

    #[test]
    fn slot_angles_divide_the_circle() {
        assert_eq!(slot_angle(0, 3), 0.0);
        assert!((slot_angle(1, 4) - PI / 2.0).abs() < 1e-6);
        assert_eq!(slot_angle(2, 0), 0.0);
    }

    #[test]
    fn wrapped_index_cycles() {
        assert_eq!(wrapped_index(2, 1, 3), Some(0));
        assert_eq!(wrapped_index(0, -1, 3), Some(2));
        assert_eq!(wrapped_index(1, 7, 3), Some(2));
        assert_eq!(wrapped_index(0, 1, 0), None);
    }
}
