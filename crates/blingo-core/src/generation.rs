//! Request and response model for the hosted image model's
//! `generateContent` REST method.
//!
//! Only the fields this application reads or writes are modelled.
//! Everything else in a response is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::image_file::{GeneratedImage, ImageFile, ImageFileError};
use crate::prompt::ENHANCE_INSTRUCTION;

/// Finish reasons that mean the model refused to produce an image.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "IMAGE_SAFETY",
    "IMAGE_PROHIBITED_CONTENT",
    "IMAGE_RECITATION",
    "RECITATION",
    "PROHIBITED_CONTENT",
    "BLOCKLIST",
];

/// Errors building a request or interpreting a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Neither a prompt nor a base image was supplied.
    #[error("enter a prompt or upload an image")]
    EmptyRequest,

    /// The prompt or output was blocked by the service's safety filters.
    #[error("content blocked: {0}")]
    Blocked(String),

    /// The response contained no candidates.
    #[error("no candidates in the response")]
    NoCandidates,

    /// No candidate part carried inline image data.
    #[error("no image data found in the response")]
    NoImageData,

    /// Inline image data could not be decoded.
    #[error(transparent)]
    InvalidImage(#[from] ImageFileError),
}

/// Whether a generate request has anything to work from: a non-blank
/// prompt or a base image.
#[must_use]
pub fn has_input(prompt: &str, base: Option<&ImageFile>) -> bool {
    !prompt.trim().is_empty() || base.is_some()
}

/// Output modality requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Image output.
    Image,
    /// Text output.
    Text,
}

/// Base64 payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the decoded bytes.
    #[serde(default)]
    pub mime_type: String,
    /// Standard base64 of the bytes.
    pub data: String,
}

/// One part of a content turn: text, inline data, or (in responses)
/// something this application ignores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline image part carrying an uploaded file.
    #[must_use]
    pub fn image(file: &ImageFile) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: file.mime_type().to_owned(),
                data: file.base64(),
            }),
        }
    }
}

/// A content turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Ordered parts.
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Producer of the turn (`user` / `model`), if given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Modalities the model may answer with.
    pub response_modalities: Vec<Modality>,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; this application always sends exactly one.
    pub contents: Vec<Content>,
    /// Requested output modalities.
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn image_only(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { parts, role: None }],
            generation_config: GenerationConfig {
                response_modalities: vec![Modality::Image],
            },
        }
    }

    /// Ask the model to enhance a photo.
    #[must_use]
    pub fn enhance(photo: &ImageFile) -> Self {
        Self::image_only(vec![Part::image(photo), Part::text(ENHANCE_INSTRUCTION)])
    }

    /// Ask the model to generate an image from a prompt, optionally
    /// starting from a base image.
    ///
    /// The base image, when present, precedes the prompt text.  The prompt
    /// is sent as typed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyRequest`] if the prompt is blank and
    /// there is no base image.
    pub fn generate(prompt: &str, base: Option<&ImageFile>) -> Result<Self, GenerationError> {
        if !has_input(prompt, base) {
            return Err(GenerationError::EmptyRequest);
        }
        let mut parts = Vec::with_capacity(2);
        if let Some(file) = base {
            parts.push(Part::image(file));
        }
        parts.push(Part::text(prompt));
        Ok(Self::image_only(parts))
    }
}

/// Safety feedback on the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was blocked.
    #[serde(default)]
    pub block_reason: Option<String>,
    /// Human-readable explanation of the block.
    #[serde(default)]
    pub block_reason_message: Option<String>,
}

/// One answer from the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Answer content.
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped (`STOP`, `SAFETY`, ...).
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Body of a successful `generateContent` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Answers, best first.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Safety feedback on the prompt.
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Extract the first inline image of the first candidate.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Blocked`] if the prompt was blocked or the
    ///   candidate stopped for a safety reason
    /// - [`GenerationError::NoCandidates`] if there is no candidate
    /// - [`GenerationError::NoImageData`] if no part carries inline data
    /// - [`GenerationError::InvalidImage`] if the inline data is not valid
    ///   base64
    pub fn into_image(self) -> Result<GeneratedImage, GenerationError> {
        if let Some(feedback) = self.prompt_feedback
            && let Some(reason) = feedback.block_reason
        {
            return Err(GenerationError::Blocked(
                feedback
                    .block_reason_message
                    .unwrap_or_else(|| format!("prompt blocked: {reason}")),
            ));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(GenerationError::NoCandidates)?;

        if let Some(reason) = candidate.finish_reason.as_deref()
            && BLOCKING_FINISH_REASONS.contains(&reason)
        {
            return Err(GenerationError::Blocked(format!(
                "stopped by safety filter: {reason}"
            )));
        }

        let inline = candidate
            .content
            .into_iter()
            .flat_map(|c| c.parts)
            .find_map(|p| p.inline_data)
            .ok_or(GenerationError::NoImageData)?;

        Ok(GeneratedImage::from_inline(&inline.mime_type, &inline.data)?)
    }
}

/// Error body returned with a non-success HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorEnvelope {
    /// The error details.
    #[serde(default)]
    pub error: ApiErrorDetail,
}

/// Details inside an [`ApiErrorEnvelope`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// HTTP-like status code.
    #[serde(default)]
    pub code: u16,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Canonical status name, e.g. `INVALID_ARGUMENT`.
    #[serde(default)]
    pub status: String,
}
