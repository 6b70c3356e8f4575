//! Attachment picking from the local filesystem.

mod loader;

pub use loader::{AttachmentError, AttachmentLoader};
