//! A single eased rotation from one yaw to another.

use crate::util::easing::EasingFunction;

/// Eased transition of the carousel yaw.
///
/// Progress is a pure function of the host timestamp passed to
/// [`sample`](Self::sample); the animation never reads the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAnimation {
    /// Yaw when the animation started.
    pub start_angle: f32,
    /// Yaw the animation ends on.
    pub target_angle: f32,
    /// Host timestamp (ms) the animation started at.
    pub start_ms: f64,
    /// Length of the animation in milliseconds.
    pub duration_ms: f64,
    /// Time-remapping curve.
    pub easing: EasingFunction,
}

impl RotationAnimation {
    /// Animation from `start_angle` to `target_angle` beginning at
    /// `start_ms`.
    #[must_use]
    pub fn new(
        start_angle: f32,
        target_angle: f32,
        start_ms: f64,
        duration_ms: f64,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_angle,
            target_angle,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Normalized progress (0.0 to 1.0) at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms).max(0.0);
        (elapsed / self.duration_ms).min(1.0) as f32
    }

    /// Interpolated yaw at `now_ms`. Exactly the target once complete.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> f32 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.target_angle;
        }
        let eased = self.easing.evaluate(t);
        self.start_angle + (self.target_angle - self.start_angle) * eased
    }

    /// Whether the animation has reached completion at `now_ms`.
    #[must_use]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
