//! Application orchestration for uploading a file and describing it.

use crate::ai::gemini::GeminiHttpClient;
use crate::ai::{
    mime, FileStoreService, GeminiFileClient, GeminiGenerationClient, GenerationService,
};
use crate::models::Config;
use crate::output::{ConsoleSink, OutputSink};
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Model the description request is issued against.
pub const DESCRIBE_MODEL: &str = "models/gemini-2.5-flash";

/// Prompt sent alongside the uploaded file reference.
pub const DESCRIBE_PROMPT: &str = "Describe the image with a creative description.";

/// Coordinates the upload and generation calls for a single local file.
pub struct App {
    files: Box<dyn FileStoreService>,
    generation: Box<dyn GenerationService>,
    output: Box<dyn OutputSink>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub files: Box<dyn FileStoreService>,
    pub generation: Box<dyn GenerationService>,
    pub output: Box<dyn OutputSink>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses that
    /// need to inject mocks.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            files: services.files,
            generation: services.generation,
            output: services.output,
        }
    }

    /// Construct an app bound to the real Gemini service.
    ///
    /// The discovery document is fetched once up front, so an unreachable
    /// service or rejected key aborts before anything is uploaded.
    pub async fn new(config: Config) -> Result<Self> {
        // Reuse one HTTP connection pool across the discovery call and both
        // service clients.
        let http_client = reqwest::Client::new();

        let gemini = GeminiHttpClient::new_with_client(
            config.gemini_api_key().to_string(),
            http_client.clone(),
        );
        let description = gemini.discover().await?;
        info!(
            "Connected to {} ({})",
            description.name.as_deref().unwrap_or("generativelanguage"),
            description.version.as_deref().unwrap_or("unknown version")
        );

        let files = GeminiFileClient::new_with_client(
            config.gemini_api_key().to_string(),
            http_client.clone(),
        );
        let generation = GeminiGenerationClient::new_with_client(
            config.gemini_api_key().to_string(),
            DESCRIBE_MODEL.to_string(),
            http_client,
        );

        Ok(Self::with_services(AppServices {
            files: Box::new(files),
            generation: Box::new(generation),
            output: Box::new(ConsoleSink),
        }))
    }

    /// Upload `file_path` and print the model's description response.
    ///
    /// Emits two lines: the uploaded file URI, then the generation response
    /// serialized back to JSON exactly as received.
    pub async fn run(&self, file_path: &Path, display_name: &str) -> Result<()> {
        info!(
            "Describing {} (display name: {:?})",
            file_path.display(),
            display_name
        );

        let mime_type = mime::detect_mime_type(file_path);
        debug!("Inferred MIME type {} for upload", mime_type);

        let data = tokio::fs::read(file_path).await?;
        info!("Read {} bytes from {}", data.len(), file_path.display());

        let file = self
            .files
            .upload_file(&data, &mime_type, display_name)
            .await?;
        self.output.emit(&format!(
            "Uploaded file: {}",
            file.uri.as_deref().unwrap_or_default()
        ));

        let response = self.generation.describe_file(DESCRIBE_PROMPT, &file).await?;
        self.output.emit(&serde_json::to_string(&response)?);

        Ok(())
    }
}
