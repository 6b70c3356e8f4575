//! Port for saving generated images to the device

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

/// Writes a remote image into a local directory
#[async_trait]
pub trait ImageDownloader: Send + Sync {
    /// Download `url` into `directory` under a fresh file name.
    ///
    /// Returns the path of the written file.
    async fn download(&self, url: &str, directory: &Path) -> Result<PathBuf, DownloadError>;
}
