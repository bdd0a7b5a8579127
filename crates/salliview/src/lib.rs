//! salliview - read-only viewer pages for hosted document previews.
//!
//! This crate provides a small HTTP server that renders a viewer page for a
//! Google Drive file. The page embeds the hosted preview in a sandboxed
//! iframe; the server never fetches or processes the document itself.
//!
//! # Architecture
//!
//! - **Identifier**: Validates the `{id}` path segment and builds preview URLs
//! - **Viewer**: Loading/ready/failed state model and the inline script that
//!   drives it in the browser (frame events plus a fallback timer)
//! - **Render**: Generates HTML using maud (compile-time templates)
//! - **Cache**: In-process moka cache + Cache-Control headers for CDN caching
//!
//! # URL Pattern
//!
//! ```text
//! GET /preview/{id}        viewer page
//! GET /preview/{id}.json   embed and view URLs
//! ```
//!
//! `id` must be 10-100 characters from `[A-Za-z0-9_-]`; anything else gets
//! the "Invalid File ID" page with a 404.
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Content-Security-Policy allows frames from the embed host only, and is
//!   set on every HTML response by [`headers::html_security_headers`]
//! - X-Frame-Options: DENY prevents clickjacking

pub mod config;
pub mod error;
pub mod headers;
pub mod identifier;
pub mod render;
pub mod routes;
pub mod state;
pub mod viewer;

pub use config::Config;
pub use error::PreviewError;
pub use identifier::{FileId, is_valid_file_id};
pub use routes::router;
pub use state::AppState;
