//! Focus detection: which model currently faces the viewer.
//!
//! Every frame each model's signed angular distance from the front
//! direction is recomputed. The closest in-focus model becomes the
//! candidate; a candidate change is only committed (and reported) once it
//! has persisted for the debounce window. "Nothing focused" is a committed
//! state of its own, reached the same way.

use serde::Serialize;

use crate::catalog::{ModelCatalog, ModelEntry};
use crate::options::FocusOptions;
use crate::util::angle::{slot_angle, wrap_signed, FRONT_ANGLE};

/// Notification that the committed focus changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusEvent {
    /// Description of the newly focused model.
    pub description: Option<String>,
    /// Identity of the newly focused model.
    pub identity: Option<String>,
    /// Carousel index of the newly focused model.
    pub index: Option<usize>,
}

impl FocusEvent {
    /// Event for `entry` at `index` gaining focus.
    #[must_use]
    pub fn focused(entry: &ModelEntry, index: usize) -> Self {
        Self {
            description: entry.description.clone(),
            identity: Some(entry.identity.clone()),
            index: Some(index),
        }
    }

    /// Event for the carousel having no focused model.
    #[must_use]
    pub fn cleared() -> Self {
        Self {
            description: None,
            identity: None,
            index: None,
        }
    }

    /// Whether this event clears the focus.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.index.is_none()
    }
}

/// Signed distance of a model's absolute yaw from the front direction, in
/// `[-π, π)`.
#[inline]
#[must_use]
pub fn angular_offset(base_angle: f32, carousel_angle: f32) -> f32 {
    wrap_signed(base_angle + carousel_angle - FRONT_ANGLE)
}

/// Whether an offset is inside the focus threshold (strict).
#[inline]
#[must_use]
pub fn is_within(offset: f32, threshold: f32) -> bool {
    offset.abs() < threshold
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    candidate: Option<usize>,
    since_ms: f64,
}

/// Per-frame focus evaluation with debounced commits.
#[derive(Debug, Clone)]
pub struct FocusEvaluator {
    options: FocusOptions,
    /// Raw per-model predicate from the last evaluated frame.
    in_focus: Vec<bool>,
    committed: Option<usize>,
    pending: Option<Pending>,
}

impl FocusEvaluator {
    /// Evaluator with nothing focused.
    #[must_use]
    pub fn new(options: FocusOptions) -> Self {
        Self {
            options,
            in_focus: Vec::new(),
            committed: None,
            pending: None,
        }
    }

    /// Replace threshold and debounce settings.
    pub fn set_options(&mut self, options: FocusOptions) {
        self.options = options;
    }

    /// Forget all focus state (model list replaced).
    pub fn reset(&mut self) {
        self.in_focus.clear();
        self.committed = None;
        self.pending = None;
    }

    /// Index of the committed focused model.
    #[must_use]
    pub fn committed(&self) -> Option<usize> {
        self.committed
    }

    /// Whether model `index` satisfied the focus predicate on the last
    /// evaluated frame.
    #[must_use]
    pub fn is_in_focus(&self, index: usize) -> bool {
        self.in_focus.get(index).copied().unwrap_or(false)
    }

    /// Evaluate one frame at carousel yaw `angle` and host time `now_ms`.
    ///
    /// Returns the event to deliver when the committed focus changes. An
    /// empty catalog is skipped entirely.
    pub fn evaluate(
        &mut self,
        catalog: &ModelCatalog,
        angle: f32,
        now_ms: f64,
    ) -> Option<FocusEvent> {
        let total = catalog.len();
        if total == 0 {
            return None;
        }

        self.in_focus.resize(total, false);
        let mut candidate: Option<(usize, f32)> = None;
        for index in 0..total {
            let offset = angular_offset(slot_angle(index, total), angle).abs();
            let inside = is_within(offset, self.options.threshold);
            self.in_focus[index] = inside;
            if !inside {
                continue;
            }
            if candidate.is_none_or(|(_, best)| offset < best) {
                candidate = Some((index, offset));
            }
        }
        let candidate = candidate.map(|(index, _)| index);

        if candidate == self.committed {
            self.pending = None;
            return None;
        }

        let since_ms = match self.pending {
            Some(pending) if pending.candidate == candidate => pending.since_ms,
            _ => {
                self.pending = Some(Pending {
                    candidate,
                    since_ms: now_ms,
                });
                now_ms
            }
        };
        if now_ms - since_ms < self.options.debounce_ms {
            return None;
        }

        self.pending = None;
        self.committed = candidate;
        let focused = candidate.and_then(|index| {
            catalog.get(index).map(|entry| (index, entry))
        });
        let event = match focused {
            Some((index, entry)) => {
                log::info!("focus -> #{index} {}", entry.identity);
                FocusEvent::focused(entry, index)
            }
            None => {
                log::info!("focus cleared");
                FocusEvent::cleared()
            }
        };
        Some(event)
    }
}
