//! Session value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const FILE_SCHEME: &str = "file://";

/// Stable address of a turn inside a [`TurnLog`](super::turn_log::TurnLog).
///
/// Turns are never removed individually, so an index stays valid until
/// the whole log is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TurnId(usize);

impl TurnId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A picked image waiting to be uploaded (Value Object)
///
/// Holds a reference to the image, not its bytes. The original file name
/// is kept for display only; uploads always use a fresh random name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    uri: String,
    mime_type: String,
}

impl Attachment {
    /// Create an attachment reference.
    ///
    /// Fails when the URI or MIME type is blank.
    pub fn new(uri: impl Into<String>, mime_type: impl Into<String>) -> Result<Self, DomainError> {
        let uri = uri.into();
        let mime_type = mime_type.into();
        if uri.trim().is_empty() {
            return Err(DomainError::InvalidAttachment("empty uri".to_string()));
        }
        if mime_type.trim().is_empty() {
            return Err(DomainError::InvalidAttachment(format!(
                "no MIME type for {}",
                uri
            )));
        }
        Ok(Self { uri, mime_type })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Filesystem path of the attachment, with any `file://` prefix removed
    pub fn local_path(&self) -> PathBuf {
        PathBuf::from(self.uri.strip_prefix(FILE_SCHEME).unwrap_or(&self.uri))
    }

    /// Original file name, for display
    pub fn file_name(&self) -> Option<String> {
        self.local_path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }
}
