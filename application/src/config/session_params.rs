//! Session parameters: initial selections for a new session.
//!
//! [`SessionParams`] groups the values a [`SessionController`] starts from.
//! They come from the config file / CLI and are application-layer concerns,
//! not domain policy.
//!
//! [`SessionController`]: crate::use_cases::session_controller::SessionController

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use studio_domain::ImageModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionParams {
    /// Model selected when the session starts.
    pub model: ImageModel,
    /// Preset base image index selected when the session starts.
    pub base_image: usize,
    /// Directory saved images are written to.
    pub save_dir: PathBuf,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            model: ImageModel::default(),
            base_image: 0,
            save_dir: PathBuf::from("."),
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: ImageModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_image(mut self, index: usize) -> Self {
        self.base_image = index;
        self
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SessionParams::default();
        assert_eq!(params.model, ImageModel::FastImage);
        assert_eq!(params.base_image, 0);
    }

    #[test]
    fn test_builder_chain() {
        let params = SessionParams::default()
            .with_model(ImageModel::IllusionDiffusion)
            .with_base_image(3)
            .with_save_dir("/tmp/out");
        assert_eq!(params.model, ImageModel::IllusionDiffusion);
        assert_eq!(params.base_image, 3);
        assert_eq!(params.save_dir, PathBuf::from("/tmp/out"));
    }
}
