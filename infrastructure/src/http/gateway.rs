//! Generation gateway over HTTP.
//!
//! Every request is a single `POST` to one fixed endpoint. JSON requests send
//! the body as-is; multipart requests read the attachment from disk and send
//! it as the `file` part under its random name, next to the text fields.
//!
//! No retries and no timeout beyond the client default: a failed call is
//! terminal for its turn.

use super::error::HttpError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use studio_application::{GatewayError, GenerationGateway};
use studio_domain::{GenerationRequest, MultipartUpload};
use tracing::debug;

pub struct HttpGenerationGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create with a custom `User-Agent` header.
    pub fn with_user_agent(endpoint: impl Into<String>, user_agent: &str) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the outbound request without sending it.
    pub async fn build_request(&self, request: &GenerationRequest) -> Result<reqwest::Request, HttpError> {
        let builder = self.client.post(&self.endpoint);
        let builder = match request {
            GenerationRequest::Json(body) => builder.json(&body.to_value()),
            GenerationRequest::Multipart(upload) => builder.multipart(multipart_form(upload).await?),
        };
        Ok(builder.build()?)
    }

    async fn send(&self, request: &GenerationRequest) -> Result<Value, HttpError> {
        let http_request = self.build_request(request).await?;
        debug!(
            "POST {} ({})",
            http_request.url(),
            request.content_type()
        );

        let response = self.client.execute(http_request).await?;
        let status = response.status();
        let body = response.text().await?;

        // The reply shape decides success; a JSON error body is still a reply.
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(HttpError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(HttpError::Decode(e.to_string())),
        }
    }
}

async fn multipart_form(upload: &MultipartUpload) -> Result<Form, HttpError> {
    let file = &upload.file;
    let bytes = tokio::fs::read(&file.source)
        .await
        .map_err(|source| HttpError::Attachment {
            path: file.source.clone(),
            source,
        })?;

    let part = Part::bytes(bytes)
        .file_name(file.file_name.clone())
        .mime_str(&file.mime_type)
        .map_err(|_| HttpError::InvalidMime(file.mime_type.clone()))?;

    let form = upload
        .fields
        .iter()
        .fold(Form::new().part(file.field_name, part), |form, (name, value)| {
            form.text(name.clone(), value.clone())
        });
    Ok(form)
}

#[async_trait]
impl GenerationGateway for HttpGenerationGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GatewayError> {
        self.send(request).await.map_err(GatewayError::from)
    }
}
