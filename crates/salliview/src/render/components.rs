//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Flat slate palette. Viewer overlay and error panel visibility are keyed
/// off the `data-state` attribute on `#viewer`.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f8fafc;--fg:#1e293b;--fg2:#475569;--fg3:#94a3b8;--accent:#2563eb;--accent-hover:#1d4ed8;--surface:#fff;--border:#e2e8f0;--danger:#dc2626;--danger-bg:#fee2e2;--warn:#b45309;--warn-bg:#fffbeb;--warn-border:#fde68a;--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);-webkit-font-smoothing:antialiased}
a{color:var(--accent);text-decoration:none}
a:hover{color:var(--accent-hover)}
svg.icon{width:24px;height:24px;vertical-align:middle;flex-shrink:0}

.status{min-height:100vh;display:flex;align-items:center;justify-content:center;padding:2rem}
.card{max-width:28rem;width:100%;background:var(--surface);border-radius:.5rem;box-shadow:0 10px 15px -3px rgba(0,0,0,.1);padding:2rem;text-align:center}
.card>*+*{margin-top:1.5rem}
.badge{display:inline-flex;align-items:center;justify-content:center;width:4rem;height:4rem;border-radius:50%}
.badge svg.icon{width:2rem;height:2rem}
.badge-danger{background:var(--danger-bg);color:var(--danger)}
.badge-warn{background:#fef3c7;color:#d97706}
.badge-muted{background:#f1f5f9;color:var(--fg3)}
.card h1{font-size:1.875rem;font-weight:700;color:var(--fg)}
.card h2{font-size:1.5rem;font-weight:700;color:var(--fg)}
.card p{color:var(--fg2)}
.hint{background:var(--warn-bg);border:1px solid var(--warn-border);border-radius:.5rem;padding:1rem;text-align:left}
.hint h3{font-weight:600;color:#78350f;margin-bottom:.5rem}
.hint code{font-size:.875rem;color:#92400e;word-break:break-all;display:block}
.hint p{font-size:.875rem;color:var(--warn);margin-top:.5rem}
.note{background:var(--bg);border-radius:.5rem;padding:1rem;font-size:.875rem}
.actions{display:flex;flex-direction:column;gap:.75rem}
.btn{display:inline-block;background:var(--accent);color:#fff;border:none;cursor:pointer;padding:.75rem 1.5rem;border-radius:.5rem;font:inherit;font-weight:500;transition:background .15s}
.btn:hover{background:var(--accent-hover);color:#fff}
.link-muted{color:var(--fg2);font-weight:500}
.link-muted:hover{color:var(--fg)}

.shell{height:100vh;width:100vw;display:flex;flex-direction:column}
.topbar{background:var(--surface);border-bottom:1px solid var(--border);box-shadow:0 1px 2px rgba(0,0,0,.05);display:flex;align-items:center;justify-content:space-between;padding:1rem 1.5rem}
.topbar-left{display:flex;align-items:center;gap:1rem}
.topbar-left a{color:var(--fg2)}
.topbar-left a:hover{color:var(--fg)}
.topbar h1{font-size:1.25rem;font-weight:600}
.readonly{display:flex;align-items:center;gap:.5rem;font-size:.875rem;color:#64748b}
.readonly svg.icon{width:1.25rem;height:1.25rem}
@media(max-width:640px){.readonly span{display:none}}

.viewer{position:relative;flex:1;overflow:hidden}
.viewer iframe{width:100%;height:100%;border:0;display:block}
.overlay{position:absolute;inset:0;display:none;align-items:center;justify-content:center;background:#f1f5f9;z-index:50;text-align:center}
.overlay>div>*+*{margin-top:1rem}
.overlay p{color:var(--fg2);font-weight:500}
.overlay button{background:none;border:none;cursor:pointer;color:var(--accent);font:inherit;font-size:.875rem;font-weight:500;text-decoration:underline}
.spinner{display:inline-block;width:3rem;height:3rem;border-radius:50%;border:4px solid var(--border);border-top-color:var(--accent);animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
.frame-error{position:absolute;inset:0;display:none;align-items:center;justify-content:center;padding:2rem;background:var(--bg)}
.checklist{list-style:none;text-align:left;font-size:.875rem;color:var(--fg2);background:var(--bg);border-radius:.5rem;padding:1rem}
.checklist li+li{margin-top:.25rem}
.checklist code{background:var(--surface);padding:0 .25rem;border-radius:.25rem;font-family:var(--mono);font-size:.75rem;word-break:break-all}
.external{display:block;font-size:.875rem;font-weight:500}
.viewer[data-state=loading] .overlay{display:flex}
.viewer[data-state=failed] .frame-error{display:flex}
.viewer[data-state=failed] iframe{visibility:hidden}

.home{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center;padding:2rem 1rem}
.home-title{font-size:3rem;font-weight:800;letter-spacing:-.04em}
.home-tagline{font-size:1.1rem;color:var(--fg2);margin-top:.5rem;max-width:420px}
.home-how{margin-top:2rem;width:100%;max-width:460px}
.home-how>p{color:var(--fg2);margin-bottom:1rem}
.home-how code{display:block;font-family:var(--mono);font-size:.85rem;padding:.5rem .75rem;border:1px solid var(--border);border-radius:6px;background:var(--surface);word-break:break-all}
.home-highlight{color:var(--accent);font-weight:600}
.home-rule{font-size:.85rem;color:var(--fg3);margin-top:.75rem}
"#;

/// Inline SVG icons (24x24 outline, stroke = currentColor).
pub mod icons {
    pub const ARROW_LEFT: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 19l-7-7m0 0l7-7m-7 7h18"/></svg>"#;

    pub const LOCK: &str = r#"<svg class="icon" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M5 9V7a5 5 0 0110 0v2a2 2 0 012 2v5a2 2 0 01-2 2H5a2 2 0 01-2-2v-5a2 2 0 012-2zm8-2v2H7V7a3 3 0 016 0z" clip-rule="evenodd"/></svg>"#;

    pub const WARNING: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"/></svg>"#;

    pub const ALERT_CIRCLE: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;

    pub const DOCUMENT: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"/></svg>"#;

    pub const SAD_FACE: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.172 16.172a4 4 0 015.656 0M9 10h.01M15 10h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;
}

/// Build the Content-Security-Policy header value.
///
/// Inline styles and the inline viewer script only. Frames may load from
/// the embed host and nowhere else, and this page may not itself be framed.
pub fn content_security_policy(embed_host: &str) -> String {
    format!(
        "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; \
         img-src 'self' data:; frame-src {embed_host}; form-action 'none'; \
         base-uri 'none'; frame-ancestors 'none'"
    )
}

/// Render the full HTML page shell with `<head>` and the given body.
///
/// Pages with `indexable = false` carry `robots=noindex`.
pub fn page_shell(title: &str, description: &str, indexable: bool, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                @if !indexable {
                    meta name="robots" content="noindex";
                }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body { (body) }
        }
    }
}

/// Round icon badge shown at the top of status cards.
pub fn badge(variant: &str, icon: &str) -> Markup {
    html! {
        div class={"badge badge-" (variant)} { (PreEscaped(icon)) }
    }
}

/// Button that reloads the current page when clicked.
///
/// The click handler is attached by the page script; markup only carries
/// the `data-action` marker.
pub fn reload_button(label: &str, class: &str) -> Markup {
    html! {
        button type="button" class=(class) data-action="reload" { (label) }
    }
}

/// Inline script wiring `[data-action=reload]` buttons on status pages.
pub const RELOAD_SCRIPT: &str = r#"document.querySelectorAll("[data-action=reload]").forEach(function(b){b.addEventListener("click",function(){window.location.reload();});});"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csp_limits_frames_to_embed_host() {
        let csp = content_security_policy("https://drive.google.com");
        assert!(csp.contains("frame-src https://drive.google.com;"));
        assert!(csp.contains("frame-ancestors 'none'"));
        assert!(csp.starts_with("default-src 'none';"));
    }

    #[test]
    fn shell_escapes_title_and_marks_noindex() {
        let page = page_shell("<b>x</b>", "desc", false, html! { p { "hi" } }).into_string();
        assert!(page.contains("<title>&lt;b&gt;x&lt;/b&gt;</title>"));
        assert!(page.contains(r#"<meta name="robots" content="noindex">"#));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn shell_indexable_has_no_robots_meta() {
        let page = page_shell("t", "d", true, html! {}).into_string();
        assert!(!page.contains("noindex"));
    }

    #[test]
    fn reload_button_is_marked() {
        let markup = reload_button("Try Again", "btn").into_string();
        assert!(markup.contains(r#"data-action="reload""#));
        assert!(markup.contains("Try Again"));
    }
}
