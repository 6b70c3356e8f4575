//! Settled result of one generation request

use serde::{Deserialize, Serialize};

/// How a dispatched request settled.
///
/// There is no partial success: either the service returned a result URL,
/// or the turn stays unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Success {
        result_url: String,
        /// Display name of the model the submission was made with
        model_label: String,
    },
    Failure {
        reason: String,
    },
}

impl GenerationOutcome {
    pub fn success(result_url: impl Into<String>, model_label: impl Into<String>) -> Self {
        Self::Success {
            result_url: result_url.into(),
            model_label: model_label.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn result_url(&self) -> Option<&str> {
        match self {
            Self::Success { result_url, .. } => Some(result_url),
            Self::Failure { .. } => None,
        }
    }
}
