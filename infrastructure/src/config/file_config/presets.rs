//! Base image presets from TOML (`[presets]` section)

use serde::{Deserialize, Serialize};
use studio_domain::{BaseImage, BaseImageCatalog, ConfigIssue, ConfigIssueCode};

/// Raw preset entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileBaseImage {
    pub label: String,
    pub url: String,
}

/// Raw presets configuration
///
/// Replaces the built-in catalog when `base_images` is set.
///
/// ```toml
/// [presets]
/// base_images = [
///     { label = "Spiral", url = "https://example.com/spiral.png" },
///     { label = "Grid", url = "https://example.com/grid.png" },
/// ]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePresetsConfig {
    pub base_images: Option<Vec<FileBaseImage>>,
}

impl FilePresetsConfig {
    /// Build the catalog, skipping entries without a URL.
    ///
    /// Falls back to the built-in catalog when nothing usable is configured.
    pub fn to_catalog(&self) -> (BaseImageCatalog, Vec<ConfigIssue>) {
        let Some(entries) = &self.base_images else {
            return (BaseImageCatalog::default(), Vec::new());
        };

        let mut issues = Vec::new();
        let mut images = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if entry.url.trim().is_empty() {
                let field = format!("presets.base_images[{}].url", i);
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: field.clone(),
                    },
                    format!("{}: empty URL, preset '{}' skipped", field, entry.label),
                ));
                continue;
            }
            images.push(BaseImage::new(entry.label.trim(), entry.url.trim()));
        }

        if images.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "presets.base_images".to_string(),
                },
                "presets.base_images: no usable presets, using built-in catalog",
            ));
            return (BaseImageCatalog::default(), issues);
        }

        (BaseImageCatalog::new(images), issues)
    }
}
