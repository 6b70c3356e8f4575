//! Submission gating.
//!
//! Every check here runs before a turn is appended or a request is made.
//! A rejected submission leaves the session untouched.

use super::request::SubmissionDraft;
use crate::core::error::DomainError;
use crate::core::model::ImageModel;
use thiserror::Error;

/// Why a submission was not dispatched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("a request is already in flight")]
    Busy,

    #[error("{} needs an image; none is staged", .model.display_name())]
    MissingAttachment { model: ImageModel },

    #[error("{} needs a prompt", .model.display_name())]
    EmptyPrompt { model: ImageModel },

    #[error("request could not be encoded: {0}")]
    Unencodable(#[from] DomainError),
}

impl RejectReason {
    /// Single-flight rejections are dropped silently; the rest are logged.
    pub fn is_silent(&self) -> bool {
        matches!(self, RejectReason::Busy)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Busy => "busy",
            RejectReason::MissingAttachment { .. } => "missing_attachment",
            RejectReason::EmptyPrompt { .. } => "empty_prompt",
            RejectReason::Unencodable(_) => "unencodable",
        }
    }
}

/// Check a draft against its model's input requirements.
///
/// Attachment-only models need a staged attachment; text-driven models
/// need a non-blank prompt (even when an attachment is also staged).
pub fn validate_draft(draft: &SubmissionDraft) -> Result<(), RejectReason> {
    if draft.model.requires_attachment() {
        if draft.attachment.is_none() {
            return Err(RejectReason::MissingAttachment { model: draft.model });
        }
    } else if draft.prompt.trim().is_empty() {
        return Err(RejectReason::EmptyPrompt { model: draft.model });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::value_objects::Attachment;

    fn png() -> Attachment {
        Attachment::new("/tmp/a.png", "image/png").unwrap()
    }

    #[test]
    fn test_upscale_without_attachment_rejected() {
        let draft = SubmissionDraft::text("", ImageModel::Upscale);
        assert_eq!(
            validate_draft(&draft),
            Err(RejectReason::MissingAttachment {
                model: ImageModel::Upscale
            })
        );
    }

    #[test]
    fn test_upscale_with_attachment_and_no_prompt_ok() {
        let draft = SubmissionDraft::text("", ImageModel::Upscale).with_attachment(png());
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_text_model_with_empty_prompt_rejected() {
        for prompt in ["", "   \n"] {
            let draft = SubmissionDraft::text(prompt, ImageModel::FastImage);
            assert_eq!(
                validate_draft(&draft),
                Err(RejectReason::EmptyPrompt {
                    model: ImageModel::FastImage
                })
            );
        }
    }

    #[test]
    fn test_text_model_with_attachment_still_needs_prompt() {
        let draft = SubmissionDraft::text("", ImageModel::StableDiffusionXl).with_attachment(png());
        assert!(matches!(
            validate_draft(&draft),
            Err(RejectReason::EmptyPrompt { .. })
        ));
    }

    #[test]
    fn test_reason_display_and_silence() {
        let reason = RejectReason::MissingAttachment {
            model: ImageModel::RemoveBackground,
        };
        assert_eq!(reason.to_string(), "Remove Background needs an image; none is staged");
        assert!(!reason.is_silent());
        assert!(RejectReason::Busy.is_silent());
        assert_eq!(RejectReason::Busy.as_str(), "busy");
    }
}
