pub mod client;
pub mod files;
pub mod generate;
pub mod types;

pub use client::{ApiDescription, GeminiHttpClient};
pub use files::GeminiFileClient;
pub use generate::GeminiGenerationClient;
