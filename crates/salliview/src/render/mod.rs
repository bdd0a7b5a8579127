//! HTML rendering for viewer and status pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).

pub mod components;
pub mod preview;
pub mod status;

pub use preview::render as preview_page;
pub use status::{crash_page, invalid_id_page, not_found_page};
