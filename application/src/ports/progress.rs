//! Submission progress port

use studio_domain::{GenerationOutcome, ImageModel, TurnId};

/// Callbacks around the one suspending step of a submission
///
/// Implementations live in the presentation layer (spinner, status line).
pub trait SubmissionProgress: Send + Sync {
    /// Called after the optimistic turn is appended, right before the request
    fn on_dispatch_start(&self, _turn: TurnId, _model: ImageModel) {}

    /// Called once the request has settled and the turn is reconciled
    fn on_settled(&self, _turn: TurnId, _outcome: &GenerationOutcome) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgress for NoProgress {}
