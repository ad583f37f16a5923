use super::client::GeminiHttpClient;
use super::types::{Content, FileData, Part};
use crate::ai::GenerationService;
use crate::models::UploadedFile;
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// Content generation client bound to a single model.
pub struct GeminiGenerationClient {
    http: GeminiHttpClient,
    model: String,
}

impl GeminiGenerationClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            http: GeminiHttpClient::new_with_client(api_key, client),
            model,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl GenerationService for GeminiGenerationClient {
    async fn describe_file(&self, prompt: &str, file: &UploadedFile) -> Result<serde_json::Value> {
        tracing::debug!(
            "Requesting description of {} from {}",
            file.uri.as_deref().unwrap_or("<no uri>"),
            self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::FileData {
                        file_data: FileData::from(file),
                    },
                ],
            }],
        };

        // The response is passed through untouched, so it stays an opaque
        // JSON value rather than a typed envelope.
        self.http.generate_content(&self.model, &request).await
    }
}
