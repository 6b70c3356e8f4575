//! Infrastructure layer for image-studio
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod attachment;
pub mod clipboard;
pub mod config;
pub mod http;
pub mod logging;
mod paths;

// Re-export commonly used types
pub use attachment::{AttachmentError, AttachmentLoader};
pub use clipboard::SystemClipboard;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FilePresetsConfig,
    FileServiceConfig, FileSessionConfig,
};
pub use http::{HttpError, HttpGenerationGateway, HttpImageDownloader};
pub use logging::JsonlTurnLogger;
