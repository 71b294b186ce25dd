/// Platform-agnostic pointer events.
///
/// These are fed into a [`PointerProcessor`](super::PointerProcessor)
/// which turns them into drag actions for the rotation controller.
///
/// # Example
///
/// ```
/// use carousel::input::{PointerEvent, PointerId};
///
/// let down = PointerEvent::down(PointerId(1), 120.0, 40.0, 16.0);
/// assert!(down.is_press());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened to the pointer.
    pub phase: PointerPhase,
    /// Host pointer identifier (DOM `pointerId`, touch id, ...).
    pub pointer_id: PointerId,
    /// Horizontal position in CSS/physical pixels.
    pub x: f32,
    /// Vertical position in CSS/physical pixels.
    pub y: f32,
    /// Host timestamp in milliseconds, on the same timeline as frames.
    pub time_ms: f64,
}

/// Host pointer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub i32);

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Button pressed / touch started.
    Down,
    /// Pointer moved.
    Move,
    /// Button released / touch ended.
    Up,
    /// Pointer left the render surface.
    Leave,
    /// Host cancelled the pointer (gesture takeover, lost capture).
    Cancel,
}

impl PointerEvent {
    /// Pointer pressed.
    #[must_use]
    pub fn down(pointer_id: PointerId, x: f32, y: f32, time_ms: f64) -> Self {
        Self::new(PointerPhase::Down, pointer_id, x, y, time_ms)
    }

    /// Pointer moved.
    #[must_use]
    pub fn moved(pointer_id: PointerId, x: f32, y: f32, time_ms: f64) -> Self {
        Self::new(PointerPhase::Move, pointer_id, x, y, time_ms)
    }

    /// Pointer released.
    #[must_use]
    pub fn up(pointer_id: PointerId, x: f32, y: f32, time_ms: f64) -> Self {
        Self::new(PointerPhase::Up, pointer_id, x, y, time_ms)
    }

    /// Pointer left the surface.
    #[must_use]
    pub fn leave(pointer_id: PointerId, x: f32, y: f32, time_ms: f64) -> Self {
        Self::new(PointerPhase::Leave, pointer_id, x, y, time_ms)
    }

    fn new(
        phase: PointerPhase,
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: f64,
    ) -> Self {
        Self {
            phase,
            pointer_id,
            x,
            y,
            time_ms,
        }
    }

    /// Whether this event starts a gesture.
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.phase == PointerPhase::Down
    }

    /// Whether this event ends a gesture.
    #[must_use]
    pub fn is_release(&self) -> bool {
        matches!(
            self.phase,
            PointerPhase::Up | PointerPhase::Leave | PointerPhase::Cancel
        )
    }
}
