//! Generation service configuration from TOML (`[service]` section)

use serde::{Deserialize, Serialize};
use studio_domain::{ConfigIssue, ConfigIssueCode};

/// Raw service configuration
///
/// # Example
///
/// ```toml
/// [service]
/// base_url = "https://studio.example.com"
/// route = "/images/fal"
/// user_agent = "image-studio/0.3"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    pub base_url: String,
    /// Path of the generation endpoint under `base_url`
    pub route: String,
    pub user_agent: Option<String>,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3050".to_string(),
            route: "/images/fal".to_string(),
            user_agent: None,
        }
    }
}

impl FileServiceConfig {
    /// Full URL of the generation endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.route.trim().trim_start_matches('/')
        )
    }

    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [("service.base_url", &self.base_url), ("service.route", &self.route)] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: cannot be empty", field),
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            FileServiceConfig::default().endpoint(),
            "http://localhost:3050/images/fal"
        );
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let config = FileServiceConfig {
            base_url: "https://studio.example.com/".to_string(),
            route: "images/fal".to_string(),
            user_agent: None,
        };
        assert_eq!(config.endpoint(), "https://studio.example.com/images/fal");
    }

    #[test]
    fn test_empty_base_url_is_error() {
        let config = FileServiceConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        let issues = config.issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
