//! Preset base images for illusion diffusion

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

const PRESET_HOST: &str = "https://storage.googleapis.com/falserverless/illusion-examples";

/// One selectable base image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseImage {
    pub label: String,
    pub url: String,
}

impl BaseImage {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Ordered catalog of base images, addressed by index.
///
/// The index is selected outside the core (preset picker) and only read
/// when an illusion-diffusion request is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseImageCatalog {
    images: Vec<BaseImage>,
}

impl BaseImageCatalog {
    pub fn new(images: Vec<BaseImage>) -> Self {
        Self { images }
    }

    pub fn get(&self, index: usize) -> Option<&BaseImage> {
        self.images.get(index)
    }

    /// Look up a preset, failing with [`DomainError::UnknownBaseImage`]
    pub fn resolve(&self, index: usize) -> Result<&BaseImage, DomainError> {
        self.images
            .get(index)
            .ok_or(DomainError::UnknownBaseImage {
                index,
                available: self.images.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BaseImage> {
        self.images.iter()
    }
}

impl Default for BaseImageCatalog {
    fn default() -> Self {
        let preset = |label: &str, file: &str| BaseImage::new(label, format!("{PRESET_HOST}/{file}"));
        Self::new(vec![
            preset("Checkers", "checkers.png"),
            preset("Checkers (medium)", "checkers_mid.jpg"),
            preset("Pattern", "pattern.png"),
            preset("Ultra checkers", "ultra_checkers.png"),
            preset("Funky", "funky.jpeg"),
            preset("Cubes", "cubes.jpeg"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_indexable() {
        let catalog = BaseImageCatalog::default();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(2).unwrap().label, "Pattern");
        assert!(catalog.get(2).unwrap().url.ends_with("/pattern.png"));
    }

    #[test]
    fn test_resolve_out_of_range() {
        let catalog = BaseImageCatalog::new(vec![BaseImage::new("a", "https://x/a.png")]);
        assert_eq!(
            catalog.resolve(4).unwrap_err(),
            DomainError::UnknownBaseImage {
                index: 4,
                available: 1
            }
        );
        assert_eq!(catalog.resolve(0).unwrap().url, "https://x/a.png");
    }
}
