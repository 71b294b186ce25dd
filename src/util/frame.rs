//! Per-frame timing handed to the engine by its host.

/// Timing information for one rendered frame.
///
/// The engine never reads the wall clock itself. Hosts build frames from
/// their own timestamps (`requestAnimationFrame`, a render loop, or synthetic
/// time in scripted sessions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Host timestamp of this frame in milliseconds.
    pub now_ms: f64,
    /// Seconds elapsed since the previous frame.
    pub delta_secs: f32,
}

impl Frame {
    /// Frame at an explicit host timestamp.
    #[must_use]
    pub fn at(now_ms: f64, delta_secs: f32) -> Self {
        Self { now_ms, delta_secs }
    }

    /// Frame following `self` at `now_ms`, with the delta derived from the
    /// two timestamps. Out-of-order timestamps give a zero delta.
    #[must_use]
    pub fn advance_to(self, now_ms: f64) -> Self {
        let delta_secs = ((now_ms - self.now_ms).max(0.0) / 1000.0) as f32;
        Self { now_ms, delta_secs }
    }
}
