//! Error types for the viewer service.
//!
//! Errors are rendered as HTML status pages rather than JSON, since this is
//! a user-facing HTML service.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::render;

/// Viewer service error type.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The path segment is not a plausible file identifier.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// No route matches the requested path.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let (status, markup) = match &self {
            Self::InvalidIdentifier(raw) => {
                tracing::debug!(identifier = %raw, "rejected invalid identifier");
                (StatusCode::NOT_FOUND, render::invalid_id_page())
            }
            Self::NotFound(path) => {
                tracing::debug!(path = %path, "no route");
                (StatusCode::NOT_FOUND, render::not_found_page())
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, render::crash_page())
            }
        };

        let mut response = (status, markup).into_response();
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        response
    }
}
