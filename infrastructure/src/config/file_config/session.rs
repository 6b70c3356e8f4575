//! Session defaults from TOML (`[session]` section)

use crate::paths::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use studio_domain::{ConfigIssue, ConfigIssueCode, ImageModel};

/// Raw session configuration
///
/// # Example
///
/// ```toml
/// [session]
/// model = "illusionDiffusion"
/// base_image = 2
/// save_dir = "~/Pictures/studio"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Model id selected at startup
    pub model: String,
    /// Preset base image index selected at startup
    pub base_image: usize,
    /// Where saved images go (defaults to the platform download directory)
    pub save_dir: Option<String>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            model: ImageModel::default().as_str().to_string(),
            base_image: 0,
            save_dir: None,
        }
    }
}

impl FileSessionConfig {
    /// Parse the model id, collecting an issue when it is not in the catalog.
    pub fn parse_model(&self) -> (Option<ImageModel>, Vec<ConfigIssue>) {
        match self.model.parse::<ImageModel>() {
            Ok(model) => (Some(model), Vec::new()),
            Err(_) => {
                let valid: Vec<&str> = ImageModel::ALL.iter().map(|m| m.as_str()).collect();
                let issue = ConfigIssue::error(
                    ConfigIssueCode::UnknownModel {
                        field: "session.model".to_string(),
                        value: self.model.clone(),
                    },
                    format!(
                        "session.model: unknown model '{}' (valid: {})",
                        self.model,
                        valid.join(", ")
                    ),
                );
                (None, vec![issue])
            }
        }
    }

    /// Resolve the save directory, expanding a leading `~/`.
    pub fn resolve_save_dir(&self) -> PathBuf {
        match self.save_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => expand_home(dir),
            _ => dirs::download_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
