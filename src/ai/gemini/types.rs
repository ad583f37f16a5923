//! Shared Gemini payload types used by the file and generation modules.

use crate::models::UploadedFile;
use serde::Serialize;

/// Gemini content container used in generation requests.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and file-reference content parts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    FileData {
        file_data: FileData,
    },
}

/// Reference to previously uploaded media, addressed by URI.
///
/// Fields absent from the upload response stay absent on the wire; the
/// service rejects an incomplete reference at generation time.
#[derive(Debug, Clone, Serialize)]
pub struct FileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl From<&UploadedFile> for FileData {
    fn from(file: &UploadedFile) -> Self {
        Self {
            file_uri: file.uri.clone(),
            mime_type: file.mime_type.clone(),
        }
    }
}
