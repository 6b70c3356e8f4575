//! Wire encoding of a submission.
//!
//! A submission becomes exactly one of two request shapes:
//!
//! | staged attachment | encoding | body |
//! |-------------------|----------|------|
//! | yes | [`GenerationRequest::Multipart`] | `file` part + `prompt`, `model` text parts |
//! | no  | [`GenerationRequest::Json`] | `{ prompt, model }` + per-model fields |
//!
//! The encoder is pure apart from drawing a random upload filename; the
//! HTTP adapter turns the result into an actual request.

use super::preset::BaseImageCatalog;
use super::transform::{PayloadContext, apply_transform};
use crate::core::error::DomainError;
use crate::core::model::ImageModel;
use crate::session::value_objects::Attachment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use uuid::Uuid;

/// Multipart field name the attachment is always sent under
pub const ATTACHMENT_FIELD: &str = "file";
pub const PROMPT_FIELD: &str = "prompt";
pub const MODEL_FIELD: &str = "model";

/// Snapshot of everything a submission is built from.
///
/// Taken from the session at submit time, so later edits to the draft
/// cannot leak into a request that is already in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub prompt: String,
    pub attachment: Option<Attachment>,
    pub model: ImageModel,
    /// Preset base image index (illusion diffusion only)
    pub base_image: usize,
}

impl SubmissionDraft {
    pub fn text(prompt: impl Into<String>, model: ImageModel) -> Self {
        Self {
            prompt: prompt.into(),
            attachment: None,
            model,
            base_image: 0,
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_base_image(mut self, index: usize) -> Self {
        self.base_image = index;
        self
    }
}

/// One outbound generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Json(JsonBody),
    Multipart(MultipartUpload),
}

impl GenerationRequest {
    pub fn is_multipart(&self) -> bool {
        matches!(self, GenerationRequest::Multipart(_))
    }

    /// Content type the request is sent with
    pub fn content_type(&self) -> &'static str {
        match self {
            GenerationRequest::Json(_) => "application/json",
            GenerationRequest::Multipart(_) => "multipart/form-data",
        }
    }
}

/// JSON request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody {
    fields: Map<String, Value>,
}

impl JsonBody {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// The uploaded file part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field_name: &'static str,
    /// Random identifier; the original file name is never sent
    pub file_name: String,
    pub mime_type: String,
    /// Where the adapter reads the bytes from
    pub source: PathBuf,
}

/// Multipart upload: one file part plus auxiliary text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartUpload {
    pub file: FilePart,
    pub fields: Vec<(String, String)>,
}

impl MultipartUpload {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Encode a submission.
///
/// Attachment present means multipart, otherwise JSON; the per-model
/// payload transform only ever touches the JSON body.
pub fn encode_request(
    draft: &SubmissionDraft,
    catalog: &BaseImageCatalog,
) -> Result<GenerationRequest, DomainError> {
    match &draft.attachment {
        Some(attachment) => Ok(GenerationRequest::Multipart(encode_multipart(draft, attachment))),
        None => encode_json(draft, catalog).map(GenerationRequest::Json),
    }
}

fn encode_multipart(draft: &SubmissionDraft, attachment: &Attachment) -> MultipartUpload {
    MultipartUpload {
        file: FilePart {
            field_name: ATTACHMENT_FIELD,
            file_name: Uuid::new_v4().to_string(),
            mime_type: attachment.mime_type().to_string(),
            source: attachment.local_path(),
        },
        fields: vec![
            (PROMPT_FIELD.to_string(), draft.prompt.clone()),
            (MODEL_FIELD.to_string(), draft.model.as_str().to_string()),
        ],
    }
}

fn encode_json(draft: &SubmissionDraft, catalog: &BaseImageCatalog) -> Result<JsonBody, DomainError> {
    let mut fields = Map::new();
    fields.insert(PROMPT_FIELD.to_string(), Value::String(draft.prompt.clone()));
    fields.insert(
        MODEL_FIELD.to_string(),
        Value::String(draft.model.as_str().to_string()),
    );

    let context = PayloadContext {
        catalog,
        base_image: draft.base_image,
    };
    apply_transform(draft.model, &mut fields, &context)?;

    Ok(JsonBody { fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::transform::BASE_IMAGE_FIELD;

    fn attachment() -> Attachment {
        Attachment::new("file:///photos/original-name.png", "image/png").unwrap()
    }

    #[test]
    fn test_text_submission_is_json() {
        let draft = SubmissionDraft::text("a red fox", ImageModel::FastImage);
        let request = encode_request(&draft, &BaseImageCatalog::default()).unwrap();

        let GenerationRequest::Json(body) = request else {
            panic!("expected JSON request");
        };
        assert_eq!(body.get(PROMPT_FIELD).unwrap(), "a red fox");
        assert_eq!(body.get(MODEL_FIELD).unwrap(), "fastImage");
        assert!(body.get(BASE_IMAGE_FIELD).is_none());
    }

    #[test]
    fn test_attachment_submission_is_multipart() {
        let draft = SubmissionDraft::text("", ImageModel::Upscale).with_attachment(attachment());
        let request = encode_request(&draft, &BaseImageCatalog::default()).unwrap();

        assert!(request.is_multipart());
        assert_eq!(request.content_type(), "multipart/form-data");
        let GenerationRequest::Multipart(upload) = request else {
            unreachable!()
        };
        assert_eq!(upload.file.field_name, "file");
        assert_eq!(upload.file.mime_type, "image/png");
        assert_eq!(upload.file.source, PathBuf::from("/photos/original-name.png"));
        assert!(!upload.file.file_name.contains("original-name"));
        assert!(Uuid::parse_str(&upload.file.file_name).is_ok());
        assert_eq!(upload.field(PROMPT_FIELD), Some(""));
        assert_eq!(upload.field(MODEL_FIELD), Some("upscale"));
    }

    #[test]
    fn test_upload_names_are_fresh() {
        let draft = SubmissionDraft::text("", ImageModel::RemoveBackground).with_attachment(attachment());
        let catalog = BaseImageCatalog::default();
        let name = |r: GenerationRequest| match r {
            GenerationRequest::Multipart(u) => u.file.file_name,
            GenerationRequest::Json(_) => panic!("expected multipart"),
        };
        let first = name(encode_request(&draft, &catalog).unwrap());
        let second = name(encode_request(&draft, &catalog).unwrap());
        assert_ne!(first, second);
    }

    #[test]
    fn test_illusion_json_gets_base_image() {
        let catalog = BaseImageCatalog::default();
        let draft = SubmissionDraft::text("a castle", ImageModel::IllusionDiffusion).with_base_image(2);
        let GenerationRequest::Json(body) = encode_request(&draft, &catalog).unwrap() else {
            panic!("expected JSON request");
        };
        assert_eq!(
            body.get(BASE_IMAGE_FIELD).and_then(Value::as_str),
            Some(catalog.get(2).unwrap().url.as_str())
        );
    }

    #[test]
    fn test_illusion_upload_never_gets_base_image() {
        let catalog = BaseImageCatalog::default();
        let draft = SubmissionDraft::text("a castle", ImageModel::IllusionDiffusion)
            .with_base_image(2)
            .with_attachment(attachment());
        let GenerationRequest::Multipart(upload) = encode_request(&draft, &catalog).unwrap() else {
            panic!("expected multipart request");
        };
        assert!(upload.field(BASE_IMAGE_FIELD).is_none());
        assert_eq!(upload.fields.len(), 2);
    }

    #[test]
    fn test_illusion_with_missing_preset_fails() {
        let draft = SubmissionDraft::text("a castle", ImageModel::IllusionDiffusion).with_base_image(99);
        let err = encode_request(&draft, &BaseImageCatalog::default()).unwrap_err();
        assert!(matches!(err, DomainError::UnknownBaseImage { index: 99, .. }));
    }
}
