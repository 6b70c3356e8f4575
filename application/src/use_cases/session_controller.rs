//! Session controller use case.
//!
//! Drives one [`Session`] through draft → optimistic append → dispatch →
//! reconcile, under the single-flight rule:
//!
//! ```text
//! Idle ──submit()──▶ Submitting ──settled──▶ Idle
//!   ▲                    │
//!   └──────reset()───────┘   (request keeps running; its ticket goes stale)
//! ```
//!
//! Everything before the request (busy check, validation, encoding, append,
//! draft clearing) happens under one lock, so it is atomic with respect to
//! other submissions. The lock is never held across the request itself.

use crate::config::SessionParams;
use crate::ports::progress::SubmissionProgress;
use crate::ports::turn_event_logger::{NoTurnEventLogger, TurnEvent, TurnEventLogger};
use crate::use_cases::dispatch::RequestDispatcher;
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard};
use studio_domain::{
    Attachment, DomainError, GenerationOutcome, ImageModel, Reconciliation, RejectReason, Session,
    Settlement, TurnId,
};
use tracing::{debug, info, warn};

/// What a completed submission did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub turn: TurnId,
    pub outcome: GenerationOutcome,
    pub settlement: Settlement,
}

impl SubmitReport {
    /// Whether the turn now carries a result
    pub fn resolved(&self) -> bool {
        self.settlement == Settlement::Applied(Reconciliation::Resolved)
    }
}

pub struct SessionController {
    session: Mutex<Session>,
    dispatcher: RequestDispatcher,
    event_logger: Arc<dyn TurnEventLogger>,
}

impl SessionController {
    pub fn new(dispatcher: RequestDispatcher, params: &SessionParams) -> Self {
        let mut session = Session::new(params.model);
        if dispatcher.catalog().get(params.base_image).is_some() {
            session.select_base_image(params.base_image);
        } else {
            warn!(
                "Base image preset {} not in catalog, using 0",
                params.base_image
            );
        }
        Self {
            session: Mutex::new(session),
            dispatcher,
            event_logger: Arc::new(NoTurnEventLogger),
        }
    }

    /// Create with a turn event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn TurnEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    // ==================== External Inputs ====================

    pub fn set_draft(&self, text: impl Into<String>) {
        self.session().set_draft(text);
    }

    pub fn stage_attachment(&self, attachment: Attachment) {
        self.session().stage_attachment(attachment);
    }

    pub fn clear_attachment(&self) -> Option<Attachment> {
        self.session().clear_attachment()
    }

    pub fn select_model(&self, model: ImageModel) {
        self.session().select_model(model);
    }

    /// Select a preset base image, rejecting indexes outside the catalog.
    pub fn select_base_image(&self, index: usize) -> Result<(), DomainError> {
        self.dispatcher.catalog().resolve(index)?;
        self.session().select_base_image(index);
        Ok(())
    }

    // ==================== Observation ====================

    /// Copy of the current session state, for rendering
    pub fn snapshot(&self) -> Session {
        self.session().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.session().is_busy()
    }

    // ==================== Transitions ====================

    /// Submit the current draft.
    ///
    /// Rejected submissions (busy, missing input, unencodable) change
    /// nothing and make no request. Accepted ones always settle: transport
    /// and service failures leave the turn unresolved and the session idle.
    pub async fn submit(&self, progress: &dyn SubmissionProgress) -> Result<SubmitReport, RejectReason> {
        let (ticket, request) = {
            let mut session = self.session();

            if let Err(reason) = session.ensure_idle() {
                debug!("Submission ignored: request already in flight");
                return Err(reason);
            }

            let draft = session.snapshot_draft();
            let request = match self.dispatcher.prepare(&draft) {
                Ok(request) => request,
                Err(reason) => {
                    warn!("Submission rejected: {}", reason);
                    self.event_logger.log(TurnEvent::new(
                        "submission_rejected",
                        json!({
                            "model": draft.model.as_str(),
                            "reason": reason.as_str(),
                            "message": reason.to_string(),
                        }),
                    ));
                    return Err(reason);
                }
            };

            let ticket = session.commit(&draft);
            self.event_logger.log(TurnEvent::new(
                "turn_submitted",
                json!({
                    "turn": ticket.turn.index(),
                    "model": draft.model.as_str(),
                    "prompt": draft.prompt,
                    "encoding": request.content_type(),
                    "attachment": draft.attachment.as_ref().map(Attachment::uri),
                }),
            ));
            (ticket, request)
        };

        info!("Dispatching turn {} with {}", ticket.turn, ticket.model);
        progress.on_dispatch_start(ticket.turn, ticket.model);

        let outcome = self.dispatcher.send(&request, ticket.model).await;

        let settlement = self.session().settle(ticket, &outcome);
        self.log_settlement(ticket.turn, &outcome, settlement);
        progress.on_settled(ticket.turn, &outcome);

        Ok(SubmitReport {
            turn: ticket.turn,
            outcome,
            settlement,
        })
    }

    fn log_settlement(&self, turn: TurnId, outcome: &GenerationOutcome, settlement: Settlement) {
        match (settlement, outcome) {
            (Settlement::Stale, _) => {
                info!("Turn {} settled after reset; dropped", turn);
                self.event_logger.log(TurnEvent::new(
                    "stale_settlement",
                    json!({ "turn": turn.index(), "success": outcome.is_success() }),
                ));
            }
            (Settlement::Applied(reconciliation), GenerationOutcome::Success { result_url, model_label })
                if reconciliation.applied() =>
            {
                info!("Turn {} resolved: {}", turn, result_url);
                self.event_logger.log(TurnEvent::new(
                    "turn_resolved",
                    json!({
                        "turn": turn.index(),
                        "result_url": result_url,
                        "model_label": model_label,
                    }),
                ));
            }
            (Settlement::Applied(reconciliation), GenerationOutcome::Failure { reason })
                if reconciliation.applied() =>
            {
                self.event_logger.log(TurnEvent::new(
                    "turn_unresolved",
                    json!({ "turn": turn.index(), "reason": reason }),
                ));
            }
            (Settlement::Applied(reconciliation), _) => {
                warn!("Turn {} not reconciled: {:?}", turn, reconciliation);
            }
        }
    }

    /// Clear the history and draft and force the session idle.
    ///
    /// Does not abort an in-flight request; when it settles, its result is
    /// dropped instead of being written into the new history.
    pub fn reset(&self) {
        let mut session = self.session();
        let cleared = session.turns().len();
        let was_busy = session.is_busy();
        session.reset();
        drop(session);

        info!("Session reset ({} turns cleared)", cleared);
        self.event_logger.log(TurnEvent::new(
            "session_reset",
            json!({ "cleared": cleared, "abandoned_in_flight": was_busy }),
        ));
    }
}
