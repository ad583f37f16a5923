use super::{FileStoreService, GenerationService};
use crate::models::UploadedFile;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Arguments captured from an `upload_file` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUpload {
    pub bytes: usize,
    pub mime_type: String,
    pub display_name: String,
}

#[derive(Clone)]
pub struct MockFileStoreClient {
    response: Arc<Mutex<Option<UploadedFile>>>,
    failure: Arc<Mutex<Option<String>>>,
    uploads: Arc<Mutex<Vec<RecordedUpload>>>,
}

impl MockFileStoreClient {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            failure: Arc::new(Mutex::new(None)),
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_upload_response(self, file: UploadedFile) -> Self {
        *self.response.lock().unwrap() = Some(file);
        self
    }

    pub fn failing_with(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn recorded_uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

impl Default for MockFileStoreClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileStoreService for MockFileStoreClient {
    async fn upload_file(
        &self,
        data: &[u8],
        mime_type: &str,
        display_name: &str,
    ) -> Result<UploadedFile> {
        self.uploads.lock().unwrap().push(RecordedUpload {
            bytes: data.len(),
            mime_type: mime_type.to_string(),
            display_name: display_name.to_string(),
        });

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::Api(message));
        }

        let response = self.response.lock().unwrap().clone();
        Ok(response.unwrap_or_else(|| UploadedFile {
            uri: Some("https://mock-files.example.com/files/mock".to_string()),
            mime_type: Some(mime_type.to_string()),
        }))
    }
}

/// Arguments captured from a `describe_file` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedGeneration {
    pub prompt: String,
    pub file: UploadedFile,
}

#[derive(Clone)]
pub struct MockGenerationClient {
    response: Arc<Mutex<Option<serde_json::Value>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<RecordedGeneration>>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: serde_json::Value) -> Self {
        *self.response.lock().unwrap() = Some(response);
        self
    }

    pub fn failing_with(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn recorded_calls(&self) -> Vec<RecordedGeneration> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGenerationClient {
    async fn describe_file(&self, prompt: &str, file: &UploadedFile) -> Result<serde_json::Value> {
        self.calls.lock().unwrap().push(RecordedGeneration {
            prompt: prompt.to_string(),
            file: file.clone(),
        });

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::Api(message));
        }

        let response = self.response.lock().unwrap().clone();
        Ok(response.unwrap_or_else(|| {
            serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "A mock description" }]
                    }
                }]
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_file_store_default_response_echoes_mime_type() {
        let client = MockFileStoreClient::new();

        let file = client
            .upload_file(b"bytes", "image/png", "Gemini logo")
            .await
            .unwrap();

        assert!(file.uri.is_some());
        assert_eq!(file.mime_type.as_deref(), Some("image/png"));
    }

    #[tokio::test]
    async fn test_mock_file_store_records_uploads() {
        let client = MockFileStoreClient::new();

        client
            .upload_file(b"12345", "text/plain", "Notes")
            .await
            .unwrap();

        assert_eq!(client.get_call_count(), 1);
        assert_eq!(
            client.recorded_uploads(),
            vec![RecordedUpload {
                bytes: 5,
                mime_type: "text/plain".to_string(),
                display_name: "Notes".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_mock_file_store_configured_failure() {
        let client = MockFileStoreClient::new().failing_with("quota exceeded");

        let err = client
            .upload_file(b"bytes", "image/png", "Gemini logo")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(_)));
        assert_eq!(client.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_generation_custom_response_and_recording() {
        let response = serde_json::json!({ "candidates": [] });
        let client = MockGenerationClient::new().with_response(response.clone());

        let file = UploadedFile {
            uri: Some("https://example.com/files/1".to_string()),
            mime_type: Some("image/png".to_string()),
        };
        let result = client.describe_file("Describe this", &file).await.unwrap();

        assert_eq!(result, response);
        assert_eq!(client.recorded_calls()[0].prompt, "Describe this");
        assert_eq!(client.recorded_calls()[0].file, file);
    }

    #[tokio::test]
    async fn test_mock_generation_default_response_has_candidates() {
        let client = MockGenerationClient::new();

        let result = client
            .describe_file("Describe this", &UploadedFile::default())
            .await
            .unwrap();

        assert!(result.get("candidates").is_some());
    }

    #[tokio::test]
    async fn test_mock_generation_configured_failure() {
        let client = MockGenerationClient::new().failing_with("rate limit exceeded");

        let err = client
            .describe_file("Describe this", &UploadedFile::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(_)));
        assert_eq!(client.get_call_count(), 1);
    }
}
