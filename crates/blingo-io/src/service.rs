//! HTTP client for the hosted image model.
//!
//! Builds requests with [`blingo_core::generation`], posts them to the
//! configured `generateContent` endpoint, and turns the response into a
//! [`GeneratedImage`].

use blingo_core::generation::ApiErrorEnvelope;
use blingo_core::{
    ConfigError, GenerateContentRequest, GenerateContentResponse, GeneratedImage, GenerationError,
    ImageFile, ServiceConfig,
};
use dioxus::logger::tracing::{debug, info};

/// Errors from a service round trip.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The service is not configured (no API key).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request could not be built or the response had no usable image.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Transport failure or undecodable response body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, or the raw body if it did not parse.
        message: String,
    },
}

impl ServiceError {
    /// Text to show the user for this failure.
    ///
    /// Missing configuration and safety blocks are actionable, so they
    /// get their own message.  Everything else collapses to `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Config(e) => e.to_string(),
            Self::Generation(GenerationError::Blocked(reason)) => {
                format!("The request was blocked: {reason}")
            }
            Self::Generation(GenerationError::EmptyRequest) => {
                "Please enter a prompt or upload an image.".to_owned()
            }
            _ => fallback.to_owned(),
        }
    }
}

/// Client for the enhance and generate workflows.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl GenerationClient {
    /// Create a client for `config`.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Ask the model for an enhanced version of `photo`.
    ///
    /// # Errors
    ///
    /// See [`ServiceError`].
    #[allow(clippy::future_not_send)]
    pub async fn enhance(&self, photo: &ImageFile) -> Result<GeneratedImage, ServiceError> {
        info!(name = photo.name(), mime = photo.mime_type(), "enhance request");
        self.send(&GenerateContentRequest::enhance(photo)).await
    }

    /// Generate an image from `prompt`, optionally starting from `base`.
    ///
    /// # Errors
    ///
    /// [`GenerationError::EmptyRequest`] (wrapped) if the prompt is blank
    /// and there is no base image; otherwise see [`ServiceError`].
    #[allow(clippy::future_not_send)]
    pub async fn generate(
        &self,
        prompt: &str,
        base: Option<&ImageFile>,
    ) -> Result<GeneratedImage, ServiceError> {
        let request = GenerateContentRequest::generate(prompt, base)?;
        info!(
            prompt_len = prompt.len(),
            with_base = base.is_some(),
            "generate request"
        );
        self.send(&request).await
    }

    #[allow(clippy::future_not_send)]
    async fn send(&self, request: &GenerateContentRequest) -> Result<GeneratedImage, ServiceError> {
        let api_key = self.config.api_key()?;
        let url = self.config.generate_content_url();
        debug!(%url, "posting generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &text));
        }

        let body: GenerateContentResponse = response.json().await?;
        let image = body.into_image()?;
        info!(
            mime = image.mime_type(),
            bytes = image.bytes().len(),
            "image received"
        );
        Ok(image)
    }
}

/// Build [`ServiceError::Api`] from an error status and its body.
fn api_error(status: u16, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_owned());
    ServiceError::Api { status, message }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Failed to enhance image due to an API error.";

    #[test]
    fn api_error_prefers_structured_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        match api_error(400, body) {
            ServiceError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_raw_body() {
        match api_error(502, "  Bad Gateway\n") {
            ServiceError::Api { message, .. } => assert_eq!(message, "Bad Gateway"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_errors_show_the_generic_message() {
        let err = api_error(500, "boom");
        assert_eq!(err.user_message(FALLBACK), FALLBACK);
        let err = ServiceError::Generation(GenerationError::NoImageData);
        assert_eq!(err.user_message(FALLBACK), FALLBACK);
    }

    #[test]
    fn actionable_errors_get_specific_messages() {
        let err = ServiceError::Config(ConfigError::MissingApiKey);
        assert_eq!(err.user_message(FALLBACK), ConfigError::MissingApiKey.to_string());

        let err = ServiceError::Generation(GenerationError::Blocked("SAFETY".into()));
        assert!(err.user_message(FALLBACK).contains("SAFETY"));
    }

    #[test]
    fn missing_key_is_reported_by_the_client_config() {
        let client = GenerationClient::new(ServiceConfig::default());
        assert!(matches!(
            client.config().api_key(),
            Err(ConfigError::MissingApiKey)
        ));
    }
}
