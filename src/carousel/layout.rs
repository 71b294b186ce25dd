//! Static per-model transforms on the ring.
//!
//! Layout depends only on the model list and [`LayoutOptions`], never on the
//! carousel yaw, so hosts recompute it when either changes rather than every
//! frame. The yaw is applied to the whole group by the host renderer.

use std::f32::consts::PI;

use glam::Vec3;
use serde::Serialize;

use crate::catalog::ModelEntry;
use crate::options::LayoutOptions;
use crate::util::angle::slot_angle;

/// Resting transform of one model, relative to the carousel group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelTransform {
    /// Position inside the group.
    pub position: Vec3,
    /// Yaw in radians.
    pub rotation_y: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Uniform scale while hovered.
    pub hover_scale: f32,
}

/// Resolved transforms for a whole model list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    /// One transform per model, in model-list order.
    pub items: Vec<ModelTransform>,
    /// Mean placement that was subtracted from every position.
    pub scene_center: Vec3,
    /// Translation of the carousel group itself.
    pub group_offset: Vec3,
}

/// Compute every model's resting transform.
///
/// 1. Slot `i` of `n` sits at angle `2π·i/n` on the ring, unless its
///    profile anchors it elsewhere.
/// 2. The mean placement is subtracted so the arrangement is centered on the
///    group origin.
/// 3. Per-model offsets and the shared vertical offset are added after
///    centering.
/// 4. Yaw is the slot angle plus a half turn (facing the center) plus the
///    per-model yaw override.
#[must_use]
pub fn resolve(models: &[ModelEntry], options: &LayoutOptions) -> Layout {
    let total = models.len();
    let group_offset = Vec3::new(0.0, 0.0, options.carousel_z_offset);
    if total == 0 {
        return Layout {
            group_offset,
            ..Layout::default()
        };
    }

    let placements: Vec<Vec3> = models
        .iter()
        .enumerate()
        .map(|(index, model)| {
            model.profile.transform.anchor.unwrap_or_else(|| {
                let angle = slot_angle(index, total);
                Vec3::new(
                    angle.cos() * options.radius,
                    0.0,
                    angle.sin() * options.radius,
                )
            })
        })
        .collect();
    let scene_center = placements.iter().copied().sum::<Vec3>() / total as f32;

    let items = models
        .iter()
        .zip(&placements)
        .enumerate()
        .map(|(index, (model, placement))| {
            let overrides = &model.profile.transform;
            let position = *placement - scene_center
                + Vec3::new(0.0, options.model_y_offset, 0.0)
                + overrides.offset;
            let scale = options.model_scale * overrides.scale_multiplier;
            ModelTransform {
                position,
                rotation_y: slot_angle(index, total)
                    + PI
                    + overrides.yaw_offset_deg.to_radians(),
                scale,
                hover_scale: scale * options.hover_scale_multiplier,
            }
        })
        .collect();

    Layout {
        items,
        scene_center,
        group_offset,
    }
}
