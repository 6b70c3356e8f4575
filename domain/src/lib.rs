//! Domain layer for image-studio
//!
//! This crate contains the core entities and value objects of a generation
//! session. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Turns
//!
//! Every submission appends a [`Turn`] to the session's [`TurnLog`] before
//! the request is made. When the request settles, the turn is reconciled
//! exactly once: a result URL on success, nothing on failure.
//!
//! ## Single flight
//!
//! A [`Session`] allows one outstanding request. Submissions made while it
//! is busy are rejected, never queued, so turns are appended and settled in
//! submission order.
//!
//! ## Encoding
//!
//! A staged [`Attachment`] means a multipart upload; otherwise the request is
//! a JSON body, optionally augmented per model (see [`generation::transform`]).

pub mod config;
pub mod core;
pub mod generation;
pub mod session;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::ImageModel};
pub use generation::{
    outcome::GenerationOutcome,
    preset::{BaseImage, BaseImageCatalog},
    request::{
        ATTACHMENT_FIELD, FilePart, GenerationRequest, JsonBody, MODEL_FIELD, MultipartUpload,
        PROMPT_FIELD, SubmissionDraft, encode_request,
    },
    response::{GenerationResponse, interpret_reply},
    transform::{BASE_IMAGE_FIELD, PayloadContext, PayloadTransform, apply_transform, transform_for},
    validation::{RejectReason, validate_draft},
};
pub use session::{
    entities::{Session, Settlement, SubmissionTicket, Turn, TurnState},
    turn_log::{Reconciliation, TurnLog},
    value_objects::{Attachment, TurnId},
};
