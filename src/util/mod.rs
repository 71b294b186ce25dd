//! Shared utilities for the carousel engine.
//!
//! Angle math on the unbounded carousel yaw, easing curves for rotation
//! animations, and the per-frame timing passed in by hosts.

pub mod angle;
pub mod easing;
pub mod frame;
