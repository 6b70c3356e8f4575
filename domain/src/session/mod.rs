//! Generation session domain.
//!
//! - [`entities::Session`]: the aggregate: history, draft, single-flight flag
//! - [`entities::Turn`]: one submission and its eventual result
//! - [`turn_log::TurnLog`]: append-only, index-addressed turn history
//! - [`value_objects`]: [`TurnId`](value_objects::TurnId), [`Attachment`](value_objects::Attachment)

pub mod entities;
pub mod turn_log;
pub mod value_objects;
