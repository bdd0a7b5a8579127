//! Viewer route handler.
//!
//! Handles `GET /preview/{identifier}` where `identifier` is a hosted file
//! ID, optionally suffixed with `.json`.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::PreviewError;
use crate::headers::etag_for;
use crate::identifier::FileId;
use crate::render;
use crate::state::{AppState, CachedHtml};

/// Cache-Control for viewer pages: 5min browser, 1h CDN, 10min SWR.
pub(super) const PAGE_CACHE_CONTROL: &str =
    "public, max-age=300, s-maxage=3600, stale-while-revalidate=600";

/// Handle a viewer request for a file identifier.
///
/// 1. Detects `.json` suffix for JSON responses
/// 2. Validates the identifier (invalid ids, including segments that do not
///    decode to UTF-8, get the not-found page)
/// 3. Serves the cached page or renders and caches a new one
///
/// Security headers are added by [`crate::headers::html_security_headers`].
pub async fn preview_handler(
    State(state): State<AppState>,
    identifier: Result<Path<String>, PathRejection>,
) -> Result<Response, PreviewError> {
    let Path(identifier) =
        identifier.map_err(|rejection| PreviewError::InvalidIdentifier(rejection.body_text()))?;

    if let Some(bare) = identifier.strip_suffix(".json") {
        return super::json::json_handler_inner(&state, bare);
    }

    let file_id = FileId::parse(&identifier)?;

    if let Some(cached) = state.cache.get(file_id.as_str()).await {
        tracing::debug!(
            file_id = %file_id,
            age_secs = (chrono::Utc::now() - cached.cached_at).num_seconds(),
            "cache hit"
        );
        return Ok(build_response(&cached));
    }

    tracing::debug!(file_id = %file_id, "cache miss, rendering");

    let html = render::preview_page(&file_id, &state.config).into_string();
    let cached = CachedHtml {
        etag: etag_for(html.as_bytes()),
        html,
        cached_at: chrono::Utc::now(),
    };
    state
        .cache
        .insert(file_id.as_str().to_string(), cached.clone())
        .await;

    Ok(build_response(&cached))
}

/// `GET /preview` and `GET /preview/`: the identifier is missing.
pub async fn missing_identifier() -> PreviewError {
    PreviewError::InvalidIdentifier(String::new())
}

/// Build an HTTP response with HTML content and cache headers.
fn build_response(page: &CachedHtml) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    if let Ok(val) = HeaderValue::from_str(&page.etag) {
        headers.insert(header::ETAG, val);
    }
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(PAGE_CACHE_CONTROL),
    );

    (StatusCode::OK, headers, page.html.clone()).into_response()
}
