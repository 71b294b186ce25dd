use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Ring geometry shared by every model.
pub struct LayoutOptions {
    /// Radius of the ring models are placed on.
    #[schemars(title = "Carousel Radius", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub radius: f32,
    /// Base scale applied to every model before per-model multipliers.
    #[schemars(title = "Model Scale", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub model_scale: f32,
    /// Vertical offset applied to every model.
    #[schemars(title = "Model Y Offset", range(min = -5.0, max = 5.0), extend("step" = 0.1))]
    pub model_y_offset: f32,
    /// Extra scale factor applied while a model is hovered.
    #[schemars(title = "Hover Scale Multiplier", range(min = 1.0, max = 5.0), extend("step" = 0.1))]
    pub hover_scale_multiplier: f32,
    /// Depth offset of the whole carousel group.
    #[schemars(title = "Carousel Z Offset", range(min = -10.0, max = 10.0), extend("step" = 0.05))]
    pub carousel_z_offset: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            model_scale: 0.7,
            model_y_offset: -0.3,
            hover_scale_multiplier: 1.0,
            carousel_z_offset: -0.15,
        }
    }
}
