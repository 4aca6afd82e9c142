//! Ingestion Data Types
//!
//! Defines the Data Transfer Objects (DTOs) for the ingestion endpoint:
//! the success payload returned after a transcript is archived, and the
//! error payload shared by the 400 and 500 responses.

use serde::Serialize;

/// Response returned to the client once the transcript has been written.
///
/// `download_url` points at the retrieval endpoint for the stored file and is
/// the only handle the client keeps; the service never lists stored files.
#[derive(Debug, Serialize)]
pub struct CompleteWeekResponse {
    pub ok: bool,
    pub download_url: String,
}

/// Error payload for ingestion failures.
///
/// `error` is a short machine-readable reason. `detail` carries the underlying
/// I/O message on storage failures and is omitted from the JSON otherwise.
#[derive(Debug, Serialize)]
pub struct IngestError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IngestError {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            detail: None,
        }
    }

    pub fn with_detail(error: &str, detail: String) -> Self {
        Self {
            error: error.to_string(),
            detail: Some(detail),
        }
    }
}
