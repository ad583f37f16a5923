//! Gemini service integration for file storage and content generation
//!
//! Defines the service traits the workflow depends on, with real clients
//! under `gemini` and in-memory mocks for tests.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{GeminiFileClient, GeminiGenerationClient};
pub use mock::{MockFileStoreClient, MockGenerationClient};

use crate::models::UploadedFile;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait FileStoreService: Send + Sync {
    async fn upload_file(
        &self,
        data: &[u8],
        mime_type: &str,
        display_name: &str,
    ) -> Result<UploadedFile>;
}

#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn describe_file(&self, prompt: &str, file: &UploadedFile) -> Result<serde_json::Value>;
}
