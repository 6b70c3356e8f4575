//! Logging configuration from TOML (`[logging]` section)

use crate::paths::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of session events
    pub transcript: Option<String>,
    /// Diagnostic log file (in addition to stderr)
    pub file: Option<String>,
}

impl FileLoggingConfig {
    pub fn transcript_path(&self) -> Option<PathBuf> {
        non_blank(self.transcript.as_deref()).map(expand_home)
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        non_blank(self.file.as_deref()).map(expand_home)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_paths_are_none() {
        let config = FileLoggingConfig {
            transcript: Some("  ".to_string()),
            file: None,
        };
        assert!(config.transcript_path().is_none());
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_paths() {
        let config = FileLoggingConfig {
            transcript: Some("/var/log/studio.jsonl".to_string()),
            file: Some("/var/log/studio.log".to_string()),
        };
        assert_eq!(config.transcript_path(), Some(PathBuf::from("/var/log/studio.jsonl")));
        assert_eq!(config.file_path(), Some(PathBuf::from("/var/log/studio.log")));
    }
}
