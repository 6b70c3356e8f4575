//! Generation Gateway port
//!
//! Defines the interface for sending one encoded request to the
//! generation service.

use async_trait::async_trait;
use studio_domain::GenerationRequest;
use thiserror::Error;

/// Errors that can occur while performing a generation request
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Response is not valid JSON: {0}")]
    DecodeError(String),

    #[error("Could not read attachment: {0}")]
    AttachmentError(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the remote generation service
///
/// Exactly one call per submission. Implementations must not retry:
/// a failure is terminal for the turn that caused it.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Send the request and return the parsed JSON reply.
    ///
    /// Interpretation of the reply (success vs. failure) is left to the
    /// caller; only transport and decode problems are errors here.
    async fn generate(&self, request: &GenerationRequest) -> Result<serde_json::Value, GatewayError>;
}
