//! Raw TOML configuration data types
//!
//! These structs mirror the config file. Each section knows how to turn
//! itself into domain values and which issues it has.

mod logging;
mod presets;
mod service;
mod session;

pub use logging::FileLoggingConfig;
pub use presets::{FileBaseImage, FilePresetsConfig};
pub use service::FileServiceConfig;
pub use session::FileSessionConfig;

use serde::{Deserialize, Serialize};
use studio_application::SessionParams;
use studio_domain::{BaseImageCatalog, ConfigIssue, ConfigIssueCode};
use thiserror::Error;

/// Configuration that cannot be used
#[derive(Debug, Error)]
#[error("invalid configuration: {}", summarize(.0))]
pub struct ConfigValidationError(pub Vec<ConfigIssue>);

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub service: FileServiceConfig,
    pub session: FileSessionConfig,
    pub presets: FilePresetsConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.service.issues();
        issues.extend(self.session.parse_model().1);

        let (catalog, preset_issues) = self.presets.to_catalog();
        issues.extend(preset_issues);

        if catalog.get(self.session.base_image).is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::BaseImageOutOfRange {
                    index: self.session.base_image,
                    available: catalog.len(),
                },
                format!(
                    "session.base_image: index {} is out of range ({} presets)",
                    self.session.base_image,
                    catalog.len()
                ),
            ));
        }

        issues
    }

    /// Split issues into warnings (returned) and errors (fatal).
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError(errors))
        }
    }

    pub fn catalog(&self) -> BaseImageCatalog {
        self.presets.to_catalog().0
    }

    /// Initial session selections
    pub fn session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_model(self.session.parse_model().0.unwrap_or_default())
            .with_base_image(self.session.base_image)
            .with_save_dir(self.session.resolve_save_dir())
    }
}
