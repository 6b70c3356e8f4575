//! Image model value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Image generation models offered by the service (Value Object)
///
/// The identifier returned by [`ImageModel::as_str`] is the value sent
/// in the `model` field of every request. The catalog is fixed: unknown
/// identifiers are rejected instead of being passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageModel {
    /// Latent consistency model, fast text-to-image
    #[default]
    FastImage,
    /// Stable Diffusion XL text-to-image
    StableDiffusionXl,
    /// Illusion diffusion: prompt rendered over a preset base image
    IllusionDiffusion,
    /// Background removal for an uploaded image
    RemoveBackground,
    /// Upscaling of an uploaded image
    Upscale,
}

impl ImageModel {
    /// Every model, in picker order
    pub const ALL: [ImageModel; 5] = [
        ImageModel::FastImage,
        ImageModel::StableDiffusionXl,
        ImageModel::IllusionDiffusion,
        ImageModel::RemoveBackground,
        ImageModel::Upscale,
    ];

    /// Get the wire identifier for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageModel::FastImage => "fastImage",
            ImageModel::StableDiffusionXl => "stableDiffusionXL",
            ImageModel::IllusionDiffusion => "illusionDiffusion",
            ImageModel::RemoveBackground => "removeBg",
            ImageModel::Upscale => "upscale",
        }
    }

    /// Human-readable name, recorded on a turn together with its result
    pub fn display_name(&self) -> &'static str {
        match self {
            ImageModel::FastImage => "Fast Image (LCM)",
            ImageModel::StableDiffusionXl => "Stable Diffusion XL",
            ImageModel::IllusionDiffusion => "Illusion Diffusion",
            ImageModel::RemoveBackground => "Remove Background",
            ImageModel::Upscale => "Upscale",
        }
    }

    /// Whether this model works on an uploaded image instead of a prompt.
    ///
    /// These models hide the text input: a submission without a staged
    /// attachment is rejected.
    pub fn requires_attachment(&self) -> bool {
        matches!(self, ImageModel::RemoveBackground | ImageModel::Upscale)
    }

    /// Whether generation is driven by the prompt text
    pub fn is_text_driven(&self) -> bool {
        !self.requires_attachment()
    }

    /// Label for the submit action
    pub fn action_label(&self) -> &'static str {
        match self {
            ImageModel::RemoveBackground => "Remove background",
            ImageModel::Upscale => "Upscale",
            _ => "Create",
        }
    }
}

impl std::fmt::Display for ImageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ImageModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageModel::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownModel(s.to_string()))
    }
}

impl Serialize for ImageModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ImageModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_model() {
        for model in ImageModel::ALL {
            let parsed: ImageModel = model.as_str().parse().unwrap();
            assert_eq!(parsed, model);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let model: ImageModel = "REMOVEBG".parse().unwrap();
        assert_eq!(model, ImageModel::RemoveBackground);
    }

    #[test]
    fn test_unknown_model_rejected() {
        let err = "dall-e-3".parse::<ImageModel>().unwrap_err();
        assert_eq!(err, DomainError::UnknownModel("dall-e-3".to_string()));
    }

    #[test]
    fn test_attachment_models() {
        assert!(ImageModel::RemoveBackground.requires_attachment());
        assert!(ImageModel::Upscale.requires_attachment());
        assert!(ImageModel::FastImage.is_text_driven());
        assert!(ImageModel::IllusionDiffusion.is_text_driven());
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(ImageModel::RemoveBackground.action_label(), "Remove background");
        assert_eq!(ImageModel::Upscale.action_label(), "Upscale");
        assert_eq!(ImageModel::StableDiffusionXl.action_label(), "Create");
    }

    #[test]
    fn test_serde_uses_wire_identifier() {
        let json = serde_json::to_string(&ImageModel::IllusionDiffusion).unwrap();
        assert_eq!(json, "\"illusionDiffusion\"");
        let back: ImageModel = serde_json::from_str("\"upscale\"").unwrap();
        assert_eq!(back, ImageModel::Upscale);
        assert!(serde_json::from_str::<ImageModel>("\"nope\"").is_err());
    }
}
