//! Logging infrastructure: the JSONL session transcript.
//!
//! [`JsonlTurnLogger`] implements the
//! [`TurnEventLogger`](studio_application::TurnEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlTurnLogger;
