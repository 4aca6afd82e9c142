//! Retrieval Data Types

use serde::Serialize;

/// Error payload for the download endpoint. Always paired with a 404 status;
/// the endpoint does not distinguish missing files from refused names.
#[derive(Debug, Serialize)]
pub struct DownloadError {
    pub error: String,
}

impl DownloadError {
    pub fn not_found() -> Self {
        Self {
            error: "file not found".to_string(),
        }
    }
}
