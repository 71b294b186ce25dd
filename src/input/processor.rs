//! Converts raw pointer events into drag actions.
//!
//! The `PointerProcessor` owns pointer capture: the first pointer to go down
//! on the surface is captured, and until it is released every event from
//! other pointers is ignored. It sits between the host's event listeners and
//! the rotation controller.

use super::event::{PointerEvent, PointerId, PointerPhase};

/// What the rotation controller should do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    /// Start dragging at `x`.
    Begin {
        /// Pointer X in pixels.
        x: f32,
        /// Event timestamp in milliseconds.
        time_ms: f64,
    },
    /// Continue dragging to `x`.
    Update {
        /// Pointer X in pixels.
        x: f32,
        /// Event timestamp in milliseconds.
        time_ms: f64,
    },
    /// Release the drag and snap.
    End {
        /// Event timestamp in milliseconds.
        time_ms: f64,
    },
}

/// Tracks which pointer (if any) is captured for dragging.
///
/// # Usage
///
/// ```
/// use carousel::input::{DragAction, PointerEvent, PointerId, PointerProcessor};
///
/// let mut pointers = PointerProcessor::new();
/// let action = pointers.handle_event(PointerEvent::down(PointerId(7), 10.0, 0.0, 0.0));
/// assert_eq!(action, Some(DragAction::Begin { x: 10.0, time_ms: 0.0 }));
/// assert_eq!(pointers.captured(), Some(PointerId(7)));
/// ```
#[derive(Debug, Default)]
pub struct PointerProcessor {
    /// Pointer currently captured by the render surface.
    captured: Option<PointerId>,
}

impl PointerProcessor {
    /// Create a processor with no captured pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer currently captured, if a drag is in progress.
    #[must_use]
    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    /// Process a raw pointer event and return zero or one drag actions.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<DragAction> {
        match (event.phase, self.captured) {
            (PointerPhase::Down, None) => {
                self.captured = Some(event.pointer_id);
                Some(DragAction::Begin {
                    x: event.x,
                    time_ms: event.time_ms,
                })
            }
            (PointerPhase::Move, Some(id)) if id == event.pointer_id => {
                Some(DragAction::Update {
                    x: event.x,
                    time_ms: event.time_ms,
                })
            }
            (
                PointerPhase::Up | PointerPhase::Leave | PointerPhase::Cancel,
                Some(id),
            ) if id == event.pointer_id => {
                self.captured = None;
                Some(DragAction::End {
                    time_ms: event.time_ms,
                })
            }
            (PointerPhase::Down, Some(id)) => {
                log::debug!(
                    "ignoring pointer {:?} while {id:?} is captured",
                    event.pointer_id
                );
                None
            }
            _ => None,
        }
    }

    /// Drop the capture without producing an action. Returns the pointer the
    /// host should release.
    pub fn release(&mut self) -> Option<PointerId> {
        self.captured.take()
    }
}
