//! Security and validator headers for HTML responses.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::PreviewError;
use crate::state::AppState;

/// Upper bound for buffering an HTML body to hash it. Pages are a few KB.
const MAX_HTML_BYTES: usize = 1024 * 1024;

/// Quoted hex xxh3-64 digest of a response body.
pub fn etag_for(body: &[u8]) -> String {
    let hash = xxhash_rust::xxh3::xxh3_64(body);
    format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()))
}

/// Middleware adding CSP, `nosniff`, `DENY`, `no-referrer` and an ETag to
/// every `text/html` response, including status and crash pages.
///
/// Responses that already carry an ETag (cached viewer pages) are passed
/// through without buffering. Cache-Control is left to the handler.
pub async fn html_security_headers(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, PreviewError> {
    let response = next.run(request).await;

    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));
    if !is_html {
        return Ok(response);
    }

    let (mut parts, body) = response.into_parts();

    let body = if parts.headers.contains_key(header::ETAG) {
        body
    } else {
        let bytes = axum::body::to_bytes(body, MAX_HTML_BYTES)
            .await
            .map_err(|e| PreviewError::Internal(e.into()))?;
        if let Ok(val) = HeaderValue::from_str(&etag_for(&bytes)) {
            parts.headers.insert(header::ETAG, val);
        }
        Body::from(bytes)
    };

    let headers = &mut parts.headers;
    headers.insert(header::CONTENT_SECURITY_POLICY, state.csp.clone());
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );

    Ok(Response::from_parts(parts, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_quoted_hex_and_stable() {
        let a = etag_for(b"<html></html>");
        let b = etag_for(b"<html></html>");
        assert_eq!(a, b);
        assert_eq!(a.len(), 18);
        assert!(a.starts_with('"') && a.ends_with('"'));
        assert!(a[1..17].chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, etag_for(b"<html> </html>"));
    }
}
