//! Attachment picker port

use studio_domain::Attachment;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{0}")]
pub struct PickError(pub String);

/// Turns a user-chosen location into an attachment ready to stage
pub trait AttachmentPicker: Send + Sync {
    fn pick(&self, location: &str) -> Result<Attachment, PickError>;
}
