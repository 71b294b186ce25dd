//! Input handling: pointer event types and the processor that converts
//! them into drag actions with exclusive pointer capture.

/// Platform-agnostic pointer events.
pub mod event;
/// Converts raw events into drag actions.
pub mod processor;

pub use event::{PointerEvent, PointerId, PointerPhase};
pub use processor::{DragAction, PointerProcessor};
