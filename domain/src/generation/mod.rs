//! Generation requests: validation, encoding and reply interpretation.
//!
//! - [`validation`]: gates a [`SubmissionDraft`](request::SubmissionDraft) before dispatch
//! - [`request`]: multipart vs. JSON encoding
//! - [`transform`]: per-model JSON body augmentation
//! - [`preset`]: base image catalog for illusion diffusion
//! - [`response`] / [`outcome`]: interpreting what came back

pub mod outcome;
pub mod preset;
pub mod request;
pub mod response;
pub mod transform;
pub mod validation;
