//! Application state shared across all request handlers.

use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use moka::future::Cache;

use crate::config::Config;
use crate::render::components::content_security_policy;

/// Cached viewer page with metadata.
#[derive(Clone, Debug)]
pub struct CachedHtml {
    /// Rendered HTML string.
    pub html: String,
    /// Quoted hex xxh3 digest of `html`, used as the ETag.
    pub etag: String,
    /// When this entry was cached.
    pub cached_at: chrono::DateTime<chrono::Utc>,
}

/// Type alias for the viewer page cache, keyed by file identifier.
pub type HtmlCache = Cache<String, CachedHtml>;

/// Cache capacity (number of entries). Pages are ~8KB each.
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

const DEFAULT_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(3600);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// In-memory viewer page cache.
    pub cache: HtmlCache,

    /// Precomputed Content-Security-Policy header for HTML pages.
    pub csp: HeaderValue,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// Fails if the embed host cannot be placed in a header value.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let csp = HeaderValue::from_str(&content_security_policy(&config.embed_host))
            .with_context(|| format!("embed host is not header-safe: {}", config.embed_host))?;

        let cache = Cache::builder()
            .max_capacity(DEFAULT_CACHE_CAPACITY)
            .time_to_live(DEFAULT_CACHE_TTL)
            .build();

        tracing::info!(
            cache_capacity = DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs = DEFAULT_CACHE_TTL.as_secs(),
            "application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            cache,
            csp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_builds_csp_from_embed_host() {
        let state = AppState::new(Config::default()).unwrap();
        let csp = state.csp.to_str().unwrap();
        assert!(csp.contains("frame-src https://drive.google.com;"));
    }

    #[test]
    fn state_rejects_embed_host_with_newline() {
        let config = Config {
            embed_host: "https://evil.test\r\nx: y".to_string(),
            ..Config::default()
        };
        assert!(AppState::new(config).is_err());
    }
}
