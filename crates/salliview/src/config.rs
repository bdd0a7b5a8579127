//! Application configuration loaded from environment variables.

use std::env::VarError;
use std::time::Duration;

use anyhow::Context;

use crate::identifier::DEFAULT_EMBED_HOST;
use crate::viewer::DEFAULT_LOADING_TIMEOUT;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Site name shown in the page header and titles.
    pub site_name: String,

    /// Origin serving the embeddable previews, without trailing slash.
    pub embed_host: String,

    /// How long the loading overlay stays up without a frame event.
    pub loading_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            site_name: "salliview".to_string(),
            embed_host: DEFAULT_EMBED_HOST.to_string(),
            loading_timeout: DEFAULT_LOADING_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `SALLIVIEW_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `SALLIVIEW_SITE_NAME`: Site name (default: "salliview")
    /// - `SALLIVIEW_EMBED_HOST`: Preview host (default: "https://drive.google.com")
    /// - `SALLIVIEW_LOADING_TIMEOUT_MS`: Loading overlay fallback in ms (default: 3000)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = std::env::var("SALLIVIEW_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let site_name = std::env::var("SALLIVIEW_SITE_NAME").unwrap_or(defaults.site_name);

        let embed_host = std::env::var("SALLIVIEW_EMBED_HOST")
            .unwrap_or(defaults.embed_host)
            .trim_end_matches('/')
            .to_string();

        let loading_timeout = match std::env::var("SALLIVIEW_LOADING_TIMEOUT_MS") {
            Ok(raw) => parse_timeout_ms(&raw)?,
            Err(VarError::NotPresent) => defaults.loading_timeout,
            Err(err @ VarError::NotUnicode(_)) => {
                return Err(err).context("SALLIVIEW_LOADING_TIMEOUT_MS is not valid UTF-8");
            }
        };

        tracing::info!(
            bind_addr = %bind_addr,
            site_name = %site_name,
            embed_host = %embed_host,
            loading_timeout_ms = loading_timeout.as_millis() as u64,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            site_name,
            embed_host,
            loading_timeout,
        })
    }
}

fn parse_timeout_ms(raw: &str) -> anyhow::Result<Duration> {
    let ms: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("SALLIVIEW_LOADING_TIMEOUT_MS is not a number: {raw:?}"))?;
    anyhow::ensure!(ms > 0, "SALLIVIEW_LOADING_TIMEOUT_MS must be greater than zero");
    Ok(Duration::from_millis(ms))
}
