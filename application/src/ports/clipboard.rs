//! Clipboard writer port

use thiserror::Error;

#[derive(Error, Debug)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Accepts text to place on the platform clipboard
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
