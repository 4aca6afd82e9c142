use super::types::{CompleteWeekResponse, IngestError};
use crate::storage::store::TranscriptStore;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde_json::Value;
use std::sync::Arc;

/// POST /api/complete_week
///
/// Accepts the body as raw bytes and parses it explicitly, so the declared
/// content type is irrelevant and a parse failure becomes a structured 400
/// instead of a transport-level rejection.
pub async fn handle_complete_week(
    Extension(store): Extension<Arc<TranscriptStore>>,
    body: Bytes,
) -> Response {
    let data: Value = match serde_json::from_slice(&body) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!("Rejected unparseable request body: {}", err);
            return (
                StatusCode::BAD_REQUEST,
                Json(IngestError::new("invalid JSON")),
            )
                .into_response();
        }
    };

    let transcript = match data.get("transcript") {
        Some(value) if !is_falsy(value) => value,
        _ => {
            tracing::warn!("Rejected request with missing or empty 'transcript' field");
            return (
                StatusCode::BAD_REQUEST,
                Json(IngestError::new("missing 'transcript' field")),
            )
                .into_response();
        }
    };

    let filename = match store.write_transcript(transcript).await {
        Ok(filename) => filename,
        Err(err) => {
            tracing::error!("Failed to write transcript: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(IngestError::with_detail(
                    "failed to write file",
                    err.to_string(),
                )),
            )
                .into_response();
        }
    };

    tracing::info!("Archived transcript as {}", filename);

    (
        StatusCode::OK,
        Json(CompleteWeekResponse {
            ok: true,
            download_url: format!("/download/{}", filename),
        }),
    )
        .into_response()
}

/// Python-style truthiness: null, false, zero, and empty strings/arrays/objects
/// all count as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
