//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ImageModel`]: the fixed catalog of generation models
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
