//! Generation service configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// REST base URL used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Variables consulted by [`ServiceConfig::from_lookup`], in priority order
/// for the API key.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
/// Variable overriding [`DEFAULT_MODEL`].
pub const MODEL_VAR: &str = "BLINGO_MODEL";
/// Variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_VAR: &str = "BLINGO_ENDPOINT";

/// Errors in the service configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No API key was provided.
    #[error("API key not configured (set GEMINI_API_KEY at build time)")]
    MissingApiKey,
}

/// Where and how to reach the hosted image model.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// API key sent as `x-goog-api-key`.
    pub api_key: Option<String>,
    /// Model identifier, e.g. `gemini-2.5-flash-image`.
    pub model: String,
    /// REST base URL without a trailing slash.
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ServiceConfig {
    /// Build a config from named variables (environment, build-time
    /// constants, a test map).  Blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            api_key: API_KEY_VARS.iter().find_map(|&name| get(name)),
            model: get(MODEL_VAR).unwrap_or(defaults.model),
            endpoint: get(ENDPOINT_VAR)
                .map_or(defaults.endpoint, |e| e.trim_end_matches('/').to_owned()),
        }
    }

    /// The API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key is configured.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    /// URL of the `generateContent` method for the configured model.
    #[must_use]
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}
