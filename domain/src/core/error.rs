//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Unknown base image preset: index {index} (catalog has {available})")]
    UnknownBaseImage { index: usize, available: usize },

    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error("Turn {0} does not exist")]
    TurnNotFound(usize),
}

impl DomainError {
    /// Check if this error was caused by a bad user selection
    /// (model or preset) rather than bad input data.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownModel(_) | DomainError::UnknownBaseImage { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_base_image_display() {
        let error = DomainError::UnknownBaseImage {
            index: 9,
            available: 3,
        };
        assert_eq!(
            error.to_string(),
            "Unknown base image preset: index 9 (catalog has 3)"
        );
    }

    #[test]
    fn test_is_selection_error() {
        assert!(DomainError::UnknownModel("dalle".to_string()).is_selection_error());
        assert!(
            DomainError::UnknownBaseImage {
                index: 1,
                available: 0
            }
            .is_selection_error()
        );
        assert!(!DomainError::TurnNotFound(0).is_selection_error());
        assert!(!DomainError::InvalidAttachment("x".to_string()).is_selection_error());
    }
}
