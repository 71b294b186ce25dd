//! Per-model behavior tags consumed by layout, focus and backdrop selection.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Role a model plays in the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Regular project model on the ring.
    #[default]
    Standard,
    /// Project model the carousel faces when it is first mounted.
    Featured,
}

/// Manual adjustments to a model's computed transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOverride {
    /// Replaces the ring placement entirely (pre-centering).
    pub anchor: Option<Vec3>,
    /// Added to the position after centering.
    pub offset: Vec3,
    /// Added to the resting yaw, in degrees.
    pub yaw_offset_deg: f32,
    /// Multiplies the base model scale.
    pub scale_multiplier: f32,
}

impl Default for TransformOverride {
    fn default() -> Self {
        Self {
            anchor: None,
            offset: Vec3::ZERO,
            yaw_offset_deg: 0.0,
            scale_multiplier: 1.0,
        }
    }
}

/// Scene background shown while a model holds focus.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backdrop {
    /// Leave the page background visible.
    #[default]
    None,
    /// Flat color (linear RGB).
    Solid {
        /// Color components in `[0, 1]`.
        color: [f32; 3],
    },
    /// Looping video texture.
    Video {
        /// Host-resolved video source.
        source: String,
    },
}

/// Everything the engine knows about a model beyond its identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelProfile {
    /// Role tag.
    pub kind: ModelKind,
    /// Transform adjustments.
    pub transform: TransformOverride,
    /// Background while focused.
    pub backdrop: Backdrop,
}
