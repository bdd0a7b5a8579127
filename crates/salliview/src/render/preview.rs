//! Viewer page for a single hosted document.

use maud::{Markup, PreEscaped, html};

use super::components::{badge, icons, page_shell, reload_button};
use crate::config::Config;
use crate::identifier::FileId;
use crate::viewer::{ViewerState, viewer_script};

/// Sandbox flags for the preview frame. The hosted viewer needs its own
/// scripts and origin, and its "open in new window" control needs popups.
const FRAME_SANDBOX: &str =
    "allow-scripts allow-same-origin allow-popups allow-popups-to-escape-sandbox";

/// Render the complete viewer page for `file_id`.
pub fn render(file_id: &FileId, config: &Config) -> Markup {
    let embed_url = file_id.embed_url(&config.embed_host);
    let view_url = file_id.view_url(&config.embed_host);
    let state = ViewerState::initial();
    let title = format!("{} - Document Viewer", config.site_name);

    let body = html! {
        div class="shell" {
            (header(&config.site_name))
            div id="viewer" class="viewer" data-state=(state.as_str()) {
                (loading_overlay())
                (error_panel(file_id, &view_url))
                iframe id="viewer-frame"
                    src=(embed_url)
                    title="PDF Viewer"
                    sandbox=(FRAME_SANDBOX)
                    allow="fullscreen" {}
            }
        }
        script { (PreEscaped(viewer_script(config.loading_timeout))) }
    };

    page_shell(&title, "Read-only document viewer", false, body)
}

fn header(site_name: &str) -> Markup {
    html! {
        header class="topbar" {
            div class="topbar-left" {
                a href="/" aria-label="Go home" { (PreEscaped(icons::ARROW_LEFT)) }
                h1 { (site_name) }
            }
            div class="readonly" {
                span { "Read-only" }
                (PreEscaped(icons::LOCK))
            }
        }
    }
}

fn loading_overlay() -> Markup {
    html! {
        div class="overlay" {
            div {
                div class="spinner" {}
                p { "Loading document..." }
                button type="button" id="viewer-skip" { "Skip" }
            }
        }
    }
}

fn error_panel(file_id: &FileId, view_url: &str) -> Markup {
    html! {
        div class="frame-error" role="alert" {
            div class="card" {
                (badge("danger", icons::WARNING))
                div {
                    h2 { "Unable to Load Document" }
                    p { "Please ensure:" }
                }
                ul class="checklist" {
                    li { "• The file is " strong { "public" } " (Anyone with the link)" }
                    li { "• File ID: " code { (file_id.as_str()) } }
                    li { "• The file is a PDF" }
                }
                div class="actions" {
                    (reload_button("Try Again", "btn"))
                    a class="external" href=(view_url) target="_blank" rel="noopener noreferrer" {
                        "Open in Google Drive →"
                    }
                }
            }
        }
    }
}
