//! Request dispatch use case.
//!
//! Turns one [`SubmissionDraft`] into exactly one gateway call and
//! interprets the reply. The dispatcher is stateless: it never touches the
//! session, and every failure is folded into a [`GenerationOutcome`].

use crate::ports::generation_gateway::GenerationGateway;
use std::sync::Arc;
use studio_domain::{
    BaseImageCatalog, GenerationOutcome, GenerationRequest, ImageModel, RejectReason,
    SubmissionDraft, encode_request, interpret_reply, validate_draft,
};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct RequestDispatcher {
    gateway: Arc<dyn GenerationGateway>,
    catalog: BaseImageCatalog,
}

impl RequestDispatcher {
    pub fn new(gateway: Arc<dyn GenerationGateway>) -> Self {
        Self {
            gateway,
            catalog: BaseImageCatalog::default(),
        }
    }

    /// Replace the preset base image catalog.
    pub fn with_catalog(mut self, catalog: BaseImageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &BaseImageCatalog {
        &self.catalog
    }

    /// Validate and encode a draft without sending anything.
    pub fn prepare(&self, draft: &SubmissionDraft) -> Result<GenerationRequest, RejectReason> {
        validate_draft(draft)?;
        let request = encode_request(draft, &self.catalog)?;
        debug!(
            "Prepared {} request for {}",
            request.content_type(),
            draft.model
        );
        Ok(request)
    }

    /// Send a prepared request and interpret the reply.
    ///
    /// Never fails: transport errors and replies without a result both
    /// become [`GenerationOutcome::Failure`].
    pub async fn send(&self, request: &GenerationRequest, model: ImageModel) -> GenerationOutcome {
        let outcome = match self.gateway.generate(request).await {
            Ok(reply) => interpret_reply(reply, model.display_name()),
            Err(e) => GenerationOutcome::failure(e.to_string()),
        };

        if let GenerationOutcome::Failure { reason } = &outcome {
            warn!("Error generating image with {}: {}", model, reason);
        }
        outcome
    }

    /// Validate, encode and send in one step.
    pub async fn dispatch(&self, draft: &SubmissionDraft) -> Result<GenerationOutcome, RejectReason> {
        let request = self.prepare(draft)?;
        Ok(self.send(&request, draft.model).await)
    }
}
