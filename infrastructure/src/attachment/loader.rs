//! Builds attachments from local image files.
//!
//! Accepts a plain path or a `file://` URI. The MIME type is guessed from
//! the file extension; anything that is not `image/*` is refused before it
//! can reach the session.

use crate::paths::expand_home;
use std::path::{Path, PathBuf};
use studio_application::{AttachmentPicker, PickError};
use studio_domain::{Attachment, DomainError};
use thiserror::Error;
use tracing::debug;

const FILE_SCHEME: &str = "file://";

#[derive(Error, Debug)]
pub enum AttachmentError {
    #[error("No such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot tell the type of {}", .0.display())]
    UnknownType(PathBuf),

    #[error("{} is not an image ({mime})", path.display())]
    NotAnImage { path: PathBuf, mime: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AttachmentLoader;

impl AttachmentLoader {
    /// Load an attachment from a path or `file://` URI.
    pub fn load(location: &str) -> Result<Attachment, AttachmentError> {
        let location = location.trim();
        let path = expand_home(location.strip_prefix(FILE_SCHEME).unwrap_or(location));

        if !path.is_file() {
            return Err(AttachmentError::NotFound(path));
        }

        let mime = Self::guess_mime(&path)?;
        let path = path.canonicalize().unwrap_or(path);
        debug!("Picked {} ({})", path.display(), mime);

        let uri = format!("{}{}", FILE_SCHEME, path.display());
        Ok(Attachment::new(uri, mime)?)
    }

    /// Image MIME type for a path, from its extension
    pub fn guess_mime(path: &Path) -> Result<String, AttachmentError> {
        let mime = mime_guess::from_path(path)
            .first()
            .ok_or_else(|| AttachmentError::UnknownType(path.to_path_buf()))?;

        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(AttachmentError::NotAnImage {
                path: path.to_path_buf(),
                mime: mime.essence_str().to_string(),
            });
        }
        Ok(mime.essence_str().to_string())
    }
}

impl AttachmentPicker for AttachmentLoader {
    fn pick(&self, location: &str) -> Result<Attachment, PickError> {
        Self::load(location).map_err(|e| PickError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"bytes").unwrap();
        path
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = image_file(dir.path(), "cat.png");

        let attachment = AttachmentLoader::load(&path.display().to_string()).unwrap();

        assert_eq!(attachment.mime_type(), "image/png");
        assert!(attachment.uri().starts_with("file://"));
        assert_eq!(attachment.file_name().as_deref(), Some("cat.png"));
    }

    #[test]
    fn test_load_file_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = image_file(dir.path(), "dog.jpeg");

        let attachment = AttachmentLoader::load(&format!("file://{}", path.display())).unwrap();

        assert_eq!(attachment.mime_type(), "image/jpeg");
        assert!(attachment.local_path().is_file());
    }

    #[test]
    fn test_missing_file() {
        let err = AttachmentLoader::load("/nonexistent/studio/cat.png").unwrap_err();
        assert!(matches!(err, AttachmentError::NotFound(_)));
    }

    #[test]
    fn test_non_image_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = image_file(dir.path(), "notes.txt");

        let err = AttachmentLoader::load(&path.display().to_string()).unwrap_err();
        match err {
            AttachmentError::NotAnImage { mime, .. } => assert_eq!(mime, "text/plain"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_picker_reports_message() {
        let err = AttachmentLoader.pick("/nonexistent/studio/cat.png").unwrap_err();
        assert!(err.0.contains("No such file"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = image_file(dir.path(), "blob");

        let err = AttachmentLoader::load(&path.display().to_string()).unwrap_err();
        assert!(matches!(err, AttachmentError::UnknownType(_)));
    }
}
