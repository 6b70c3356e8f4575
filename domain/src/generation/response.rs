//! Interpretation of the service's JSON reply

use super::outcome::GenerationOutcome;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Reply body of the generation endpoint.
///
/// Only `image` matters; any other fields are kept for diagnostics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GenerationResponse {
    /// Read a reply from parsed JSON.
    ///
    /// Returns `None` when the value is not an object of the expected shape
    /// (e.g. an array, or a non-string `image`).
    pub fn from_value(value: Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }

    /// The result URL as received, if the reply carries a non-empty one
    pub fn result_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }

    /// Turn this reply into an outcome for a submission made with `model_label`
    pub fn into_outcome(self, model_label: &str) -> GenerationOutcome {
        match self.result_url() {
            Some(url) => GenerationOutcome::success(url, model_label),
            None => GenerationOutcome::failure(format!(
                "response has no image: {}",
                Value::Object(self.extra)
            )),
        }
    }
}

/// Interpret a raw JSON reply
pub fn interpret_reply(value: Value, model_label: &str) -> GenerationOutcome {
    match GenerationResponse::from_value(value.clone()) {
        Some(response) => response.into_outcome(model_label),
        None => GenerationOutcome::failure(format!("unexpected response shape: {}", value)),
    }
}
