//! System clipboard adapter.

use studio_application::{ClipboardError, ClipboardPort};
use tracing::error;

/// Writes to the system clipboard through `arboard`.
///
/// A clipboard handle is opened per write.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            error!("Failed to open clipboard: {}", e);
            ClipboardError(e.to_string())
        })?;
        clipboard.set_text(text.to_string()).map_err(|e| {
            error!("Failed to write clipboard: {}", e);
            ClipboardError(e.to_string())
        })
    }
}
