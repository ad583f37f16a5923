use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// REST version both the File API and generation endpoints are served under.
pub(crate) const API_VERSION: &str = "v1beta";

/// Subset of the discovery document the client reads.
///
/// The workflow only needs confirmation that the service answered; `name`
/// and `version` feed a diagnostic log and nothing else.
#[derive(Debug, Deserialize)]
pub struct ApiDescription {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Lightweight Gemini REST client shared by the file and generation modules.
pub struct GeminiHttpClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl GeminiHttpClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_client(api_key, Client::new())
    }

    pub fn new_with_client(api_key: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetch the service's discovery document.
    ///
    /// The credential travels as the `key` query parameter here; the data
    /// calls use the `x-goog-api-key` header instead.
    pub async fn discover(&self) -> Result<ApiDescription> {
        let url = format!("{}/$discovery/rest", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("version", API_VERSION), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach Gemini discovery endpoint: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Gemini discovery error (status {}): {}", status, error_text);
            return Err(Error::Api(format!(
                "Gemini discovery error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse discovery document: {}", e);
            Error::Api(format!("Failed to parse discovery document: {}", e))
        })
    }

    pub(crate) async fn post_to_url<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        url: String,
        request: &Req,
    ) -> Result<Resp> {
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(Error::Api(format!(
                "Gemini API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::Api(format!("Failed to parse Gemini response: {}", e))
        })
    }

    /// Calls Gemini's `generateContent` endpoint for the given model.
    ///
    /// `model` should be the bare model ID (for example `gemini-2.5-flash`),
    /// not a `models/...`-prefixed path segment.
    pub async fn generate_content<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        model: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, API_VERSION, model
        );
        self.post_to_url(url, request).await
    }
}
