use super::types::DownloadError;
use crate::storage::store::TranscriptStore;
use axum::extract::Path;
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// GET /download/*filename
///
/// Streams a stored transcript back with attachment headers. Any failure,
/// including names the store refuses to resolve, is reported as 404.
pub async fn handle_download(
    Path(filename): Path<String>,
    Extension(store): Extension<Arc<TranscriptStore>>,
) -> Response {
    let bytes = match store.read(&filename).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("Download of {} failed: {}", filename, err);
            return (StatusCode::NOT_FOUND, Json(DownloadError::not_found())).into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CONTENT_DISPOSITION, disposition_for(&filename));
    if let Ok(length) = HeaderValue::from_str(&bytes.len().to_string()) {
        headers.insert(header::CONTENT_LENGTH, length);
    }

    (StatusCode::OK, headers, bytes).into_response()
}

/// Attachment disposition naming the file by its final path segment. Double
/// quotes are stripped so the quoted-string stays well formed; anything else
/// that is not a valid header value falls back to a bare `attachment`.
fn disposition_for(filename: &str) -> HeaderValue {
    let basename = filename.rsplit('/').next().unwrap_or(filename);
    let basename = basename.replace('"', "");
    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", basename))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
