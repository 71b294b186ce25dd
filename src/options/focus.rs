use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// Focus detection parameters.
pub struct FocusOptions {
    /// Maximum angular distance (radians) from the front direction at which
    /// a model counts as focused. The comparison is strict.
    #[schemars(title = "Focus Threshold", range(min = 0.05, max = 1.5), extend("step" = 0.01))]
    pub threshold: f32,
    /// How long (ms) a focus change must persist before it is committed
    /// and reported. 0 commits on the first frame.
    #[schemars(title = "Debounce (ms)", range(min = 0.0, max = 1000.0), extend("step" = 10.0))]
    pub debounce_ms: f64,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            threshold: PI / 3.5,
            debounce_ms: 150.0,
        }
    }
}
