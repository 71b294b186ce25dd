use super::animation::RotationAnimation;

/// Authoritative yaw state of one mounted carousel.
///
/// Owned by the [`RotationController`](super::RotationController); other
/// components only ever see it through `&CarouselState` during a tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselState {
    /// Current yaw in radians. Unbounded, never wrapped.
    pub(crate) current_angle: f32,
    /// Whether a pointer drag is in progress.
    pub(crate) is_dragging: bool,
    /// Pointer X at the last processed drag event.
    pub(crate) drag_anchor_x: f32,
    /// In-flight eased rotation, if any.
    pub(crate) animation: Option<RotationAnimation>,
    /// Latest host timestamp observed (ms).
    pub(crate) clock_ms: f64,
}

impl CarouselState {
    /// Current yaw in radians.
    #[must_use]
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    /// Whether a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Pointer X at the last processed drag event.
    #[must_use]
    pub fn drag_anchor_x(&self) -> f32 {
        self.drag_anchor_x
    }

    /// In-flight eased rotation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&RotationAnimation> {
        self.animation.as_ref()
    }

    /// Latest host timestamp observed, in milliseconds.
    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Advance the engine clock. Timestamps never move it backwards.
    pub(crate) fn observe(&mut self, time_ms: f64) {
        if time_ms > self.clock_ms {
            self.clock_ms = time_ms;
        }
    }
}
