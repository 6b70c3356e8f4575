//! Session domain entities

use super::turn_log::{Reconciliation, TurnLog};
use super::value_objects::{Attachment, TurnId};
use crate::core::model::ImageModel;
use crate::generation::outcome::GenerationOutcome;
use crate::generation::request::SubmissionDraft;
use crate::generation::validation::RejectReason;
use serde::Serialize;

/// Lifecycle of a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    /// Request in flight
    Pending,
    Resolved,
    /// Request settled without a result
    Unresolved,
}

/// One exchange: what the user submitted plus the eventual result (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    prompt_text: Option<String>,
    attachment: Option<Attachment>,
    result_url: Option<String>,
    model_label: Option<String>,
    state: TurnState,
}

impl Turn {
    /// Create a pending turn with no result
    pub fn new(prompt_text: Option<String>, attachment: Option<Attachment>) -> Self {
        Self {
            prompt_text,
            attachment,
            result_url: None,
            model_label: None,
            state: TurnState::Pending,
        }
    }

    /// Build the optimistic turn for a submission.
    ///
    /// The prompt is only recorded for text-driven models.
    pub fn from_draft(draft: &SubmissionDraft) -> Self {
        let prompt_text = Some(draft.prompt.clone())
            .filter(|p| draft.model.is_text_driven() && !p.trim().is_empty());
        Self::new(prompt_text, draft.attachment.clone())
    }

    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt_text.as_deref()
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn result_url(&self) -> Option<&str> {
        self.result_url.as_deref()
    }

    pub fn model_label(&self) -> Option<&str> {
        self.model_label.as_deref()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == TurnState::Pending
    }

    pub(crate) fn settle(&mut self, outcome: &GenerationOutcome) -> Reconciliation {
        if !self.is_pending() {
            return Reconciliation::AlreadySettled;
        }
        match outcome {
            GenerationOutcome::Success {
                result_url,
                model_label,
            } => {
                self.result_url = Some(result_url.clone());
                self.model_label = Some(model_label.clone());
                self.state = TurnState::Resolved;
                Reconciliation::Resolved
            }
            GenerationOutcome::Failure { .. } => {
                self.state = TurnState::Unresolved;
                Reconciliation::Unresolved
            }
        }
    }
}

/// Handle for an in-flight submission.
///
/// Carries the turn address and the session epoch it was made in, so a
/// settlement arriving after a reset can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub turn: TurnId,
    pub epoch: u64,
    pub model: ImageModel,
}

/// Result of [`Session::settle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied(Reconciliation),
    /// The session was reset after the submission; nothing changed
    Stale,
}

/// One active generation context (Aggregate)
///
/// Holds the turn history, the unsent draft and the single-flight flag.
/// `selected_model` and `base_image` mirror selections made outside the
/// core (model and preset pickers).
#[derive(Debug, Clone, Default)]
pub struct Session {
    turns: TurnLog,
    draft_input: String,
    pending_attachment: Option<Attachment>,
    busy: bool,
    selected_model: ImageModel,
    base_image: usize,
    epoch: u64,
}

impl Session {
    pub fn new(selected_model: ImageModel) -> Self {
        Self {
            selected_model,
            ..Self::default()
        }
    }

    pub fn turns(&self) -> &TurnLog {
        &self.turns
    }

    pub fn draft_input(&self) -> &str {
        &self.draft_input
    }

    pub fn pending_attachment(&self) -> Option<&Attachment> {
        self.pending_attachment.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn selected_model(&self) -> ImageModel {
        self.selected_model
    }

    pub fn base_image(&self) -> usize {
        self.base_image
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether anything has been submitted since the last reset
    pub fn has_history(&self) -> bool {
        !self.turns.is_empty()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_input = text.into();
    }

    pub fn stage_attachment(&mut self, attachment: Attachment) {
        self.pending_attachment = Some(attachment);
    }

    pub fn clear_attachment(&mut self) -> Option<Attachment> {
        self.pending_attachment.take()
    }

    pub fn select_model(&mut self, model: ImageModel) {
        self.selected_model = model;
    }

    pub fn select_base_image(&mut self, index: usize) {
        self.base_image = index;
    }

    /// Fail with [`RejectReason::Busy`] while a request is in flight
    pub fn ensure_idle(&self) -> Result<(), RejectReason> {
        if self.busy {
            Err(RejectReason::Busy)
        } else {
            Ok(())
        }
    }

    /// Copy out the current draft and selections
    pub fn snapshot_draft(&self) -> SubmissionDraft {
        SubmissionDraft {
            prompt: self.draft_input.clone(),
            attachment: self.pending_attachment.clone(),
            model: self.selected_model,
            base_image: self.base_image,
        }
    }

    /// Record a validated submission: append the optimistic turn, clear the
    /// draft and staged attachment, and mark the session busy.
    pub fn commit(&mut self, draft: &SubmissionDraft) -> SubmissionTicket {
        let turn = self.turns.append(Turn::from_draft(draft));
        self.draft_input.clear();
        self.pending_attachment = None;
        self.busy = true;
        SubmissionTicket {
            turn,
            epoch: self.epoch,
            model: draft.model,
        }
    }

    /// Apply a settled request to its turn and leave the busy state.
    ///
    /// Tickets issued before the last [`Session::reset`] are stale: they
    /// neither touch the new history nor clear the busy flag of a newer
    /// submission. Only a ticket that settles its pending turn ends the
    /// busy state; a repeated settlement changes nothing.
    pub fn settle(&mut self, ticket: SubmissionTicket, outcome: &GenerationOutcome) -> Settlement {
        if ticket.epoch != self.epoch {
            return Settlement::Stale;
        }
        let reconciliation = self.turns.reconcile(ticket.turn, outcome);
        if reconciliation.applied() {
            self.busy = false;
        }
        Settlement::Applied(reconciliation)
    }

    /// Drop the history and draft and force the session idle.
    ///
    /// An in-flight request keeps running; its ticket becomes stale.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.draft_input.clear();
        self.pending_attachment = None;
        self.busy = false;
        self.epoch += 1;
    }
}
