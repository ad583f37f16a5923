use super::client::{GeminiHttpClient, API_VERSION};
use crate::ai::FileStoreService;
use crate::models::UploadedFile;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const UPLOAD_URL_HEADER: &str = "x-goog-upload-url";

#[derive(Debug, Serialize)]
struct CreateFileRequest {
    file: FileMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileMetadata {
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct CreateFileResponse {
    file: Option<UploadedFile>,
}

/// File API client speaking the resumable upload protocol.
///
/// Uploads run in two calls: a metadata request that opens a session and
/// answers with a session URL, then a single body send that finalizes it.
pub struct GeminiFileClient {
    http: GeminiHttpClient,
}

impl GeminiFileClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_client(api_key, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, client),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    /// Open an upload session, declaring the size and type of the bytes
    /// that will follow.
    async fn begin_upload(&self, size: u64, mime_type: &str, display_name: &str) -> Result<String> {
        let url = format!("{}/upload/{}/files", self.http.base_url, API_VERSION);
        let metadata = CreateFileRequest {
            file: FileMetadata {
                display_name: display_name.to_string(),
            },
        };

        let response = self
            .http
            .client
            .post(&url)
            .header("x-goog-api-key", &self.http.api_key)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", size.to_string())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&metadata)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to start Gemini file upload: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!(
                "Gemini upload start error (status {}): {}",
                status,
                error_text
            );
            return Err(Error::Api(format!(
                "Gemini upload start error (status {}): {}",
                status, error_text
            )));
        }

        let session_url = response
            .headers()
            .get(UPLOAD_URL_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                Error::Api(format!(
                    "Upload start response missing {} header",
                    UPLOAD_URL_HEADER
                ))
            })?
            .to_string();

        Ok(session_url)
    }
}

#[async_trait]
impl FileStoreService for GeminiFileClient {
    async fn upload_file(
        &self,
        data: &[u8],
        mime_type: &str,
        display_name: &str,
    ) -> Result<UploadedFile> {
        tracing::debug!(
            "Uploading {} bytes ({}) as {:?}",
            data.len(),
            mime_type,
            display_name
        );

        let session_url = self
            .begin_upload(data.len() as u64, mime_type, display_name)
            .await?;

        let response = self
            .http
            .client
            .post(&session_url)
            .header("x-goog-api-key", &self.http.api_key)
            .header("X-Goog-Upload-Command", "upload, finalize")
            .header("X-Goog-Upload-Offset", "0")
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send file bytes to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Gemini upload error (status {}): {}", status, error_text);
            return Err(Error::Api(format!(
                "Gemini upload error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let created: CreateFileResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse upload response: {}\nBody: {}", e, body);
            Error::Api(format!("Failed to parse upload response: {}", e))
        })?;

        let file = created.file.unwrap_or_default();
        tracing::info!(
            "Uploaded {:?} to {}",
            display_name,
            file.uri.as_deref().unwrap_or("<no uri>")
        );

        Ok(file)
    }
}
