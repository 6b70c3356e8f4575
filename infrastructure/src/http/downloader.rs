//! Saves result images to disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use studio_application::{DownloadError, ImageDownloader};
use tracing::info;
use uuid::Uuid;

pub struct HttpImageDownloader {
    client: reqwest::Client,
}

impl HttpImageDownloader {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Where an image would be written: a fresh `<uuid>.png` in `directory`
    pub fn target_path(directory: &Path) -> PathBuf {
        directory.join(format!("{}.png", Uuid::new_v4()))
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let fetch_error = |message: String| DownloadError::Fetch {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl Default for HttpImageDownloader {
    fn default() -> Self {
        Self::new()
    }
}

/// Write image bytes into `directory`, creating it if needed.
pub(crate) async fn write_image(directory: &Path, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
    let write_error = |path: &Path, e: std::io::Error| DownloadError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    tokio::fs::create_dir_all(directory)
        .await
        .map_err(|e| write_error(directory, e))?;

    let path = HttpImageDownloader::target_path(directory);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| write_error(&path, e))?;
    Ok(path)
}

#[async_trait]
impl ImageDownloader for HttpImageDownloader {
    async fn download(&self, url: &str, directory: &Path) -> Result<PathBuf, DownloadError> {
        let bytes = self.fetch(url).await?;
        let path = write_image(directory, &bytes).await?;
        info!("Saved {} ({} bytes) to {}", url, bytes.len(), path.display());
        Ok(path)
    }
}
