//! Terminal status pages: invalid identifier, not found, crash.

use maud::{Markup, PreEscaped, html};

use super::components::{RELOAD_SCRIPT, badge, icons, page_shell, reload_button};
use crate::identifier::{MAX_LEN, MIN_LEN};

/// Page for a missing or malformed file identifier.
pub fn invalid_id_page() -> Markup {
    let body = html! {
        main class="status" {
            div class="card" {
                div {
                    (badge("warn", icons::DOCUMENT))
                    h1 { "Invalid File ID" }
                    p { "The file ID provided is not valid or is missing." }
                }
                div class="hint" {
                    h3 { "Expected format:" }
                    code { "/preview/[FILE_ID]" }
                    p {
                        "File IDs should be " (MIN_LEN) "-" (MAX_LEN)
                        " characters containing letters, numbers, underscores, or hyphens."
                    }
                }
                a class="btn" href="/" { "Go Home" }
            }
        }
    };

    page_shell("Invalid File ID", "The file ID is not valid", false, body)
}

/// Generic page for unknown routes.
pub fn not_found_page() -> Markup {
    let body = html! {
        main class="status" {
            div class="card" {
                div {
                    (badge("muted", icons::SAD_FACE))
                    h1 { "Page Not Found" }
                    p { "The page you're looking for doesn't exist." }
                }
                a class="btn" href="/" { "Go Home" }
            }
        }
    };

    page_shell("Page Not Found", "Page not found", false, body)
}

/// Application-level crash page.
pub fn crash_page() -> Markup {
    let body = html! {
        main class="status" {
            div class="card" {
                div {
                    (badge("danger", icons::ALERT_CIRCLE))
                    h1 { "Something Went Wrong" }
                    p { "An unexpected error occurred. We apologize for the inconvenience." }
                }
                div class="note" {
                    p { "Please try again or return home." }
                }
                div class="actions" {
                    (reload_button("Try Again", "btn"))
                    a class="link-muted" href="/" { "Go Home" }
                }
            }
        }
        script { (PreEscaped(RELOAD_SCRIPT)) }
    };

    page_shell("Something Went Wrong", "Unexpected error", false, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_page_explains_format() {
        let html = invalid_id_page().into_string();
        assert!(html.contains("Invalid File ID"));
        assert!(html.contains("/preview/[FILE_ID]"));
        assert!(html.contains("10-100 characters"));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn not_found_page_links_home() {
        let html = not_found_page().into_string();
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("Go Home"));
    }

    #[test]
    fn crash_page_offers_retry_and_home() {
        let html = crash_page().into_string();
        assert!(html.contains("Something Went Wrong"));
        assert!(html.contains(r#"data-action="reload""#));
        assert!(html.contains("window.location.reload()"));
        assert!(html.contains("Go Home"));
    }

    #[test]
    fn crash_page_wording_fits_any_route() {
        let html = crash_page().into_string();
        assert!(!html.to_lowercase().contains("preview"));
    }
}
