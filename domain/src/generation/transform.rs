//! Per-model augmentation of JSON request bodies.
//!
//! The generic JSON body is `{ prompt, model }`. Some models need extra
//! fields; each such model registers a [`PayloadTransform`] here instead of
//! special-casing the encoder. Transforms only run on the JSON path.

use super::preset::BaseImageCatalog;
use crate::core::error::DomainError;
use crate::core::model::ImageModel;
use serde_json::{Map, Value};

/// Field carrying the preset base image URL for illusion diffusion
pub const BASE_IMAGE_FIELD: &str = "baseImage";

/// Selections a transform may read
#[derive(Debug, Clone, Copy)]
pub struct PayloadContext<'a> {
    pub catalog: &'a BaseImageCatalog,
    pub base_image: usize,
}

/// Mutates a JSON body in place for one model
pub type PayloadTransform = fn(&mut Map<String, Value>, &PayloadContext<'_>) -> Result<(), DomainError>;

/// Get the transform registered for a model, if any
pub fn transform_for(model: ImageModel) -> Option<PayloadTransform> {
    match model {
        ImageModel::IllusionDiffusion => Some(inject_base_image),
        _ => None,
    }
}

/// Apply the model's transform (no-op for models without one)
pub fn apply_transform(
    model: ImageModel,
    body: &mut Map<String, Value>,
    context: &PayloadContext<'_>,
) -> Result<(), DomainError> {
    match transform_for(model) {
        Some(transform) => transform(body, context),
        None => Ok(()),
    }
}

fn inject_base_image(
    body: &mut Map<String, Value>,
    context: &PayloadContext<'_>,
) -> Result<(), DomainError> {
    let preset = context.catalog.resolve(context.base_image)?;
    body.insert(BASE_IMAGE_FIELD.to_string(), Value::String(preset.url.clone()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::preset::BaseImage;

    fn catalog() -> BaseImageCatalog {
        BaseImageCatalog::new(vec![
            BaseImage::new("zero", "https://x/0.png"),
            BaseImage::new("one", "https://x/1.png"),
            BaseImage::new("two", "https://x/2.png"),
        ])
    }

    #[test]
    fn test_only_illusion_diffusion_has_transform() {
        for model in ImageModel::ALL {
            assert_eq!(
                transform_for(model).is_some(),
                model == ImageModel::IllusionDiffusion,
                "{model}"
            );
        }
    }

    #[test]
    fn test_illusion_injects_selected_preset() {
        let catalog = catalog();
        let context = PayloadContext {
            catalog: &catalog,
            base_image: 2,
        };
        let mut body = Map::new();
        apply_transform(ImageModel::IllusionDiffusion, &mut body, &context).unwrap();
        assert_eq!(body[BASE_IMAGE_FIELD], "https://x/2.png");
    }

    #[test]
    fn test_other_models_untouched() {
        let catalog = catalog();
        let context = PayloadContext {
            catalog: &catalog,
            base_image: 0,
        };
        let mut body = Map::new();
        body.insert("prompt".to_string(), Value::from("a fox"));
        apply_transform(ImageModel::FastImage, &mut body, &context).unwrap();
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_missing_preset_is_error() {
        let catalog = catalog();
        let context = PayloadContext {
            catalog: &catalog,
            base_image: 7,
        };
        let mut body = Map::new();
        let err = apply_transform(ImageModel::IllusionDiffusion, &mut body, &context).unwrap_err();
        assert!(matches!(err, DomainError::UnknownBaseImage { index: 7, .. }));
        assert!(body.is_empty());
    }
}
