use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Drag, snap and animation parameters for the carousel yaw.
pub struct RotationOptions {
    /// Radians of yaw per pixel of horizontal drag.
    #[schemars(title = "Drag Sensitivity", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub drag_sensitivity: f32,
    /// Duration of snap and navigation animations in milliseconds.
    #[schemars(title = "Animation Duration (ms)", range(min = 50.0, max = 2000.0), extend("step" = 10.0))]
    pub animation_duration_ms: f64,
    /// Release velocity (rad/ms) above which a drag snaps to the adjacent
    /// slot in the flick direction instead of the nearest one.
    #[schemars(title = "Flick Threshold", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub flick_velocity_threshold: f32,
    /// Length of the rolling pointer-sample window used for release
    /// velocity, in milliseconds.
    #[schemars(skip)]
    pub velocity_window_ms: f64,
    /// Idle auto-rotation in rad/s (0 disables it).
    #[schemars(title = "Auto Rotate Speed", range(min = -2.0, max = 2.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
    /// Easing curve for snap and navigation animations.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.0025,
            animation_duration_ms: 450.0,
            flick_velocity_threshold: 0.0006,
            velocity_window_ms: 150.0,
            auto_rotate_speed: 0.0,
            easing: EasingFunction::QuadraticInOut,
        }
    }
}
