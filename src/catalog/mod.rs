//! Model catalog: the ordered list of carousel models and the
//! identity-keyed table of their profiles.
//!
//! Per-model behavior (off-ring placement, scale and yaw tweaks, which model
//! the carousel opens on, background while focused) is declared here once
//! and looked up by identity. Nothing downstream inspects identity strings.

mod portfolio;
mod profile;

use std::path::Path;

pub use profile::{Backdrop, ModelKind, ModelProfile, TransformOverride};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// One model shown on the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Stable opaque key (typically the asset path).
    pub identity: String,
    /// Text shown while the model is focused.
    #[serde(default)]
    pub description: Option<String>,
    /// Link opened when the model is clicked.
    #[serde(default)]
    pub url: Option<String>,
    /// Behavior tags.
    #[serde(flatten)]
    pub profile: ModelProfile,
}

impl ModelEntry {
    /// Standard entry with a description and no overrides.
    #[must_use]
    pub fn new(identity: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            description: Some(description.into()),
            url: None,
            profile: ModelProfile::default(),
        }
    }

    /// Replace the profile.
    #[must_use]
    pub fn with_profile(mut self, profile: ModelProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the click-through link.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[derive(Deserialize, Serialize)]
struct CatalogFile {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

/// Ordered model list with an identity index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelCatalog {
    models: Vec<ModelEntry>,
    by_identity: FxHashMap<String, usize>,
}

impl ModelCatalog {
    /// Build a catalog, rejecting duplicate identities.
    pub fn new(models: Vec<ModelEntry>) -> Result<Self, CarouselError> {
        let mut by_identity = FxHashMap::default();
        for (index, entry) in models.iter().enumerate() {
            if by_identity.insert(entry.identity.clone(), index).is_some() {
                return Err(CarouselError::Catalog(format!(
                    "duplicate identity '{}'",
                    entry.identity
                )));
            }
        }
        Ok(Self {
            models,
            by_identity,
        })
    }

    /// The built-in portfolio catalog.
    #[must_use]
    pub fn portfolio() -> Self {
        let models = portfolio::entries();
        let by_identity = models
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.identity.clone(), index))
            .collect();
        Self {
            models,
            by_identity,
        }
    }

    /// Parse a catalog from TOML (`[[models]]` tables).
    pub fn from_toml(content: &str) -> Result<Self, CarouselError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| CarouselError::Catalog(e.to_string()))?;
        Self::new(file.models)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Serialize the catalog back to TOML.
    pub fn to_toml(&self) -> Result<String, CarouselError> {
        let file = CatalogFile {
            models: self.models.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| CarouselError::Catalog(e.to_string()))
    }

    /// Number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the catalog has no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Models in carousel order.
    #[must_use]
    pub fn entries(&self) -> &[ModelEntry] {
        &self.models
    }

    /// Model at a carousel index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ModelEntry> {
        self.models.get(index)
    }

    /// Carousel index of a model identity.
    #[must_use]
    pub fn index_of(&self, identity: &str) -> Option<usize> {
        self.by_identity.get(identity).copied()
    }

    /// Profile of a model identity.
    #[must_use]
    pub fn profile(&self, identity: &str) -> Option<&ModelProfile> {
        self.index_of(identity)
            .and_then(|index| self.models.get(index))
            .map(|entry| &entry.profile)
    }

    /// Index of the first [`ModelKind::Featured`] model.
    #[must_use]
    pub fn featured_index(&self) -> Option<usize> {
        self.models
            .iter()
            .position(|entry| entry.profile.kind == ModelKind::Featured)
    }

    /// Background to show while `identity` is focused. Unknown identities
    /// and `None` get [`Backdrop::None`].
    #[must_use]
    pub fn backdrop_for(&self, identity: Option<&str>) -> &Backdrop {
        const NO_BACKDROP: &Backdrop = &Backdrop::None;
        identity
            .and_then(|id| self.profile(id))
            .map_or(NO_BACKDROP, |profile| &profile.backdrop)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const CATALOG_TOML: &str = r#"
[[models]]
identity = "/models/logo-sweet-spot.glb"
description = "Ticket office"
backdrop = { kind = "solid", color = [0.0, 0.0, 0.0] }

[models.transform]
anchor = [-2.0, 0.0, 0.0]

[[models]]
identity = "/models/camera.glb"
description = "Portfolio"
kind = "featured"

[models.transform]
offset = [0.0, -0.2, 0.0]
yaw_offset_deg = 90.0
scale_multiplier = 4.0

[[models]]
identity = "/models/3Dchably.glb"
"#;

    #[test]
    fn parses_profiles_from_toml() {
        let catalog = ModelCatalog::from_toml(CATALOG_TOML).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.featured_index(), Some(1));

        let camera = catalog.profile("/models/camera.glb").unwrap();
        assert_eq!(camera.transform.scale_multiplier, 4.0);
        assert_eq!(camera.transform.yaw_offset_deg, 90.0);
        assert_eq!(camera.transform.offset, Vec3::new(0.0, -0.2, 0.0));
        assert_eq!(camera.transform.anchor, None);

        let logo = catalog.get(0).unwrap();
        assert_eq!(logo.profile.kind, ModelKind::Standard);
        assert_eq!(logo.description.as_deref(), Some("Ticket office"));
        assert_eq!(logo.profile.transform.anchor, Some(Vec3::new(-2.0, 0.0, 0.0)));
        assert_eq!(logo.profile.transform.scale_multiplier, 1.0);

        let plain = catalog.get(2).unwrap();
        assert_eq!(plain.description, None);
        assert_eq!(plain.profile, ModelProfile::default());
    }

    #[test]
    fn backdrop_lookup_by_identity() {
        let catalog = ModelCatalog::from_toml(CATALOG_TOML).unwrap();
        assert_eq!(
            catalog.backdrop_for(Some("/models/logo-sweet-spot.glb")),
            &Backdrop::Solid {
                color: [0.0, 0.0, 0.0]
            }
        );
        assert_eq!(catalog.backdrop_for(Some("/models/camera.glb")), &Backdrop::None);
        assert_eq!(catalog.backdrop_for(Some("/models/unknown.glb")), &Backdrop::None);
        assert_eq!(catalog.backdrop_for(None), &Backdrop::None);
    }

    #[test]
    fn rejects_duplicate_identities() {
        let err = ModelCatalog::new(vec![
            ModelEntry::new("a", "first"),
            ModelEntry::new("a", "second"),
        ])
        .unwrap_err();
        assert!(matches!(err, CarouselError::Catalog(msg) if msg.contains("'a'")));
    }

    #[test]
    fn portfolio_round_trips_through_toml() {
        let catalog = ModelCatalog::portfolio();
        let parsed = ModelCatalog::from_toml(&catalog.to_toml().unwrap()).unwrap();
        assert_eq!(catalog, parsed);
    }

    #[test]
    fn portfolio_opens_on_featured_model() {
        let catalog = ModelCatalog::portfolio();
        let featured = catalog.featured_index().unwrap();
        assert_eq!(catalog.index_of(&catalog.entries()[featured].identity), Some(featured));
        assert!(catalog
            .entries()
            .iter()
            .all(|entry| entry.description.is_some()));
    }
}
