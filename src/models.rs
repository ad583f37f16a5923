//! Data models and structures
//!
//! Defines the configuration and the uploaded-file reference shared between
//! the file storage and generation services.

use serde::Deserialize;

/// Reference to a file held by the Gemini File API.
///
/// Only the fields the workflow reads are modeled; everything else in the
/// upload response is ignored. Both fields are optional: a response missing
/// `uri` or `mimeType` is carried through as-is and left for the generation
/// endpoint to reject.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub uri: Option<String>,
    pub mime_type: Option<String>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    gemini_api_key: String,
}

impl Config {
    /// Build a config from an explicit API key. Empty keys are rejected.
    pub fn new(gemini_api_key: impl Into<String>) -> crate::Result<Self> {
        let gemini_api_key = gemini_api_key.into();
        if gemini_api_key.is_empty() {
            return Err(crate::Error::Config(
                "GEMINI_API_KEY must not be empty".to_string(),
            ));
        }
        Ok(Self { gemini_api_key })
    }

    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?;
        Self::new(key)
    }

    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }
}
