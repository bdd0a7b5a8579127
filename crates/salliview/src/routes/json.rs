//! JSON endpoint for preview links.
//!
//! Serves the embed and view URLs at `GET /preview/{id}.json` for scripts
//! and agents that want the links without the page.
//!
//! Format:
//! ```json
//! {
//!   "id": "...",
//!   "embed_url": "https://drive.google.com/file/d/.../preview",
//!   "view_url": "https://drive.google.com/file/d/.../view"
//! }
//! ```

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::preview::PAGE_CACHE_CONTROL;
use crate::error::PreviewError;
use crate::identifier::FileId;
use crate::state::AppState;

/// Inner handler called from the preview handler when `.json` suffix is detected.
pub fn json_handler_inner(state: &AppState, identifier: &str) -> Result<Response, PreviewError> {
    let file_id = FileId::parse(identifier)?;
    let host = &state.config.embed_host;

    let json_body = serde_json::json!({
        "id": file_id.as_str(),
        "embed_url": file_id.embed_url(host),
        "view_url": file_id.view_url(host),
    });

    let json_string =
        serde_json::to_string_pretty(&json_body).map_err(|e| PreviewError::Internal(e.into()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(PAGE_CACHE_CONTROL),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    Ok((StatusCode::OK, headers, json_string).into_response())
}
