//! Route definitions for the viewer service.
//!
//! ## Routes
//!
//! - `GET /` - Home page
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /preview/{id}` - Viewer page (or `.json` for links)
//! - `GET /preview`, `GET /preview/` - Missing identifier page
//! - anything else - Not found page

mod health;
mod home;
pub mod json;
mod preview;

use std::any::Any;

use axum::Router;
use axum::http::Uri;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::PreviewError;
use crate::headers::html_security_headers;
use crate::state::AppState;

/// Build the complete viewer service router.
pub fn router(state: AppState) -> Router {
    with_service_layers(routes(), state)
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/preview", get(preview::missing_identifier))
        .route("/preview/", get(preview::missing_identifier))
        .route("/preview/{identifier}", get(preview::preview_handler))
}

/// Attach the fallback, the crash boundary and HTML security headers.
///
/// Panics inside handlers are caught and rendered as the crash page. The
/// header middleware sits outside the crash boundary so crash pages get the
/// same headers as every other HTML page.
fn with_service_layers(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .fallback(not_found)
        .with_state(state.clone())
        .layer(CatchPanicLayer::custom(crash_response))
        .layer(middleware::from_fn_with_state(state, html_security_headers))
}

/// Serve robots.txt.
///
/// Viewer pages wrap documents shared by link only, so keep them out of
/// search indexes.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nDisallow: /preview/\n",
    )
}

async fn not_found(uri: Uri) -> PreviewError {
    PreviewError::NotFound(uri.path().to_string())
}

/// Turn a caught handler panic into the crash page.
fn crash_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "non-string panic payload"
    };

    PreviewError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderMap, Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::config::Config;

    async fn send(app: Router, path: &str) -> (StatusCode, HeaderMap, String) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    fn app() -> Router {
        router(AppState::new(Config::default()).unwrap())
    }

    #[tokio::test]
    async fn valid_identifier_renders_viewer() {
        let (status, headers, body) = send(app(), "/preview/abc123_-XYZ90").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert!(body.contains("https://drive.google.com/file/d/abc123_-XYZ90/preview"));
        assert!(body.contains("https://drive.google.com/file/d/abc123_-XYZ90/view"));
        assert!(body.contains(r#"data-state="loading""#));
    }

    #[tokio::test]
    async fn viewer_sets_security_and_cache_headers() {
        let (_, headers, _) = send(app(), "/preview/abc123_-XYZ90").await;

        let csp = headers[header::CONTENT_SECURITY_POLICY].to_str().unwrap();
        assert!(csp.contains("frame-src https://drive.google.com"));
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
        assert!(headers.contains_key(header::ETAG));
        assert!(
            headers[header::CACHE_CONTROL]
                .to_str()
                .unwrap()
                .starts_with("public")
        );
    }

    #[tokio::test]
    async fn cached_page_is_identical() {
        let app = app();
        let (_, first_headers, first) = send(app.clone(), "/preview/abcdefghijklmnop").await;
        let (_, second_headers, second) = send(app, "/preview/abcdefghijklmnop").await;

        assert_eq!(first, second);
        assert_eq!(first_headers[header::ETAG], second_headers[header::ETAG]);
    }

    #[tokio::test]
    async fn short_identifier_is_not_found() {
        let (status, headers, body) = send(app(), "/preview/short1234").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Invalid File ID"));
        assert!(!body.contains("short1234"));
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn percent_encoded_slash_is_rejected() {
        let (status, _, body) = send(app(), "/preview/abcde%2Ffghijk").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Invalid File ID"));
    }

    #[tokio::test]
    async fn missing_identifier_is_not_found() {
        for path in ["/preview", "/preview/"] {
            let (status, _, body) = send(app(), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert!(body.contains("Invalid File ID"), "{path}");
        }
    }

    #[tokio::test]
    async fn json_suffix_returns_links() {
        let (status, headers, body) = send(app(), "/preview/abc123_-XYZ90.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["id"], "abc123_-XYZ90");
        assert_eq!(
            json["embed_url"],
            "https://drive.google.com/file/d/abc123_-XYZ90/preview"
        );
        assert_eq!(
            json["view_url"],
            "https://drive.google.com/file/d/abc123_-XYZ90/view"
        );
    }

    #[tokio::test]
    async fn json_suffix_with_invalid_identifier_is_not_found() {
        let (status, _, body) = send(app(), "/preview/short.json").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Invalid File ID"));
    }

    #[tokio::test]
    async fn unknown_path_is_generic_not_found() {
        let (status, _, body) = send(app(), "/nope/at/all").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn home_page_explains_url_pattern() {
        let (status, _, body) = send(app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/preview/"));
        assert!(body.contains("salliview"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, _, body) = send(app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "salliview");
    }

    #[tokio::test]
    async fn robots_disallows_previews() {
        let (status, _, body) = send(app(), "/robots.txt").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Disallow: /preview/"));
    }

    fn assert_html_security_headers(headers: &HeaderMap, path: &str) {
        let csp = headers[header::CONTENT_SECURITY_POLICY].to_str().unwrap();
        assert!(csp.contains("frame-ancestors 'none'"), "{path}");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY", "{path}");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff", "{path}");
        assert_eq!(headers[header::REFERRER_POLICY], "no-referrer", "{path}");
        assert!(headers.contains_key(header::ETAG), "{path}");
    }

    #[tokio::test]
    async fn status_pages_carry_security_headers() {
        for path in ["/preview/short1234", "/nope", "/preview/"] {
            let (status, headers, _) = send(app(), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert_html_security_headers(&headers, path);
            assert_eq!(headers[header::CACHE_CONTROL], "no-store", "{path}");
        }
    }

    #[tokio::test]
    async fn home_page_carries_security_headers() {
        let (status, headers, _) = send(app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_html_security_headers(&headers, "/");
    }

    #[tokio::test]
    async fn json_responses_skip_html_headers() {
        let (_, headers, _) = send(app(), "/preview/abc123_-XYZ90.json").await;

        assert!(!headers.contains_key(header::CONTENT_SECURITY_POLICY));
    }

    #[tokio::test]
    async fn invalid_utf8_identifier_is_not_found() {
        let (status, headers, body) = send(app(), "/preview/%FF%FEabcdefghij").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert!(body.contains("Invalid File ID"));
    }

    async fn boom() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn handler_panic_renders_crash_page() {
        let state = AppState::new(Config::default()).unwrap();
        let app = with_service_layers(routes().route("/boom", get(boom)), state);

        let (status, headers, body) = send(app, "/boom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Something Went Wrong"));
        assert!(body.contains("Try Again"));
        assert_html_security_headers(&headers, "/boom");
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    }
}
