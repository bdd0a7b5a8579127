//! Home page: explains the URL pattern.

use axum::extract::State;
use axum::response::IntoResponse;
use maud::html;

use crate::identifier::{MAX_LEN, MIN_LEN};
use crate::render::components::page_shell;
use crate::state::AppState;

/// Render the home page.
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let site_name = state.config.site_name.as_str();

    let body = html! {
        main class="home" {
            h1 class="home-title" { (site_name) }
            p class="home-tagline" {
                "Read-only viewer for shared Google Drive PDFs."
            }
            div class="home-how" {
                p { "Put the file ID from a share link into the URL:" }
                code { "/preview/" span class="home-highlight" { "FILE_ID" } }
                p class="home-rule" {
                    "File IDs are " (MIN_LEN) "-" (MAX_LEN)
                    " characters: letters, numbers, underscores, or hyphens. "
                    "The file must be shared as \"Anyone with the link\"."
                }
            }
        }
    };

    page_shell(
        &format!("{site_name} - PDF Viewer"),
        "Simple Google Drive PDF viewer",
        true,
        body,
    )
}
