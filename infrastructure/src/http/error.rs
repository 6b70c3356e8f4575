//! Error types for the HTTP adapters

use std::path::PathBuf;
use studio_application::GatewayError;
use thiserror::Error;

/// Errors raised while talking to the generation service
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Could not read attachment {}: {source}", path.display())]
    Attachment {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid MIME type '{0}'")]
    InvalidMime(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response is not JSON: {0}")]
    Decode(String),
}

impl From<HttpError> for GatewayError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Request(e) if e.is_connect() || e.is_timeout() => {
                GatewayError::ConnectionError(e.to_string())
            }
            HttpError::Request(e) => GatewayError::Other(e.to_string()),
            e @ (HttpError::Attachment { .. } | HttpError::InvalidMime(_)) => {
                GatewayError::AttachmentError(e.to_string())
            }
            HttpError::Status { status, body } => GatewayError::HttpStatus { status, body },
            HttpError::Decode(message) => GatewayError::DecodeError(message),
        }
    }
}
