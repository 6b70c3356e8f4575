//! Port for structured turn logging.
//!
//! Defines the [`TurnEventLogger`] trait for recording session events
//! (submissions, settlements, rejections, resets) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the turn
//! transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured session event for logging.
pub struct TurnEvent {
    /// Event type identifier (e.g., "turn_submitted", "turn_resolved").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TurnEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging session events to a structured log.
///
/// The `log` method is synchronous and non-fallible so it never disturbs
/// the submission flow; logging failures are ignored.
pub trait TurnEventLogger: Send + Sync {
    /// Record a session event.
    fn log(&self, event: TurnEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTurnEventLogger;

impl TurnEventLogger for NoTurnEventLogger {
    fn log(&self, _event: TurnEvent) {}
}
