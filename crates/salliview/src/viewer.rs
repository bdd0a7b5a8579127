//! Viewer state model for the embedded document frame.
//!
//! The page is rendered in [`ViewerState::Loading`]. From there the browser
//! moves it along according to frame events, a single fallback timer and a
//! manual skip control. [`ViewerState::apply`] is the only definition of the
//! transitions: [`viewer_script`] ships them to the browser as a lookup table
//! generated from it, so the script has no transition logic of its own.

use std::time::Duration;

/// Default time the loading overlay stays up without a frame event.
pub const DEFAULT_LOADING_TIMEOUT: Duration = Duration::from_millis(3000);

/// Visible state of the viewer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    /// Loading overlay shown over the frame.
    Loading,
    /// Frame visible, no overlay.
    Ready,
    /// Error panel shown. Terminal until the page is reloaded.
    Failed,
}

/// Something that happened to the viewer after mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// The frame fired `load`.
    Loaded,
    /// The frame fired `error`.
    Failed,
    /// The fallback timer fired.
    TimerElapsed,
    /// The user pressed Skip on the loading overlay.
    Skipped,
}

impl FrameEvent {
    pub const ALL: [FrameEvent; 4] = [
        Self::Loaded,
        Self::Failed,
        Self::TimerElapsed,
        Self::Skipped,
    ];

    /// Event name passed to the script's dispatcher.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loaded => "load",
            Self::Failed => "error",
            Self::TimerElapsed => "timeout",
            Self::Skipped => "skip",
        }
    }
}

impl ViewerState {
    pub const ALL: [ViewerState; 3] = [Self::Loading, Self::Ready, Self::Failed];

    /// State at mount time.
    pub const fn initial() -> Self {
        Self::Loading
    }

    /// Apply an event and return the resulting state.
    pub fn apply(self, event: FrameEvent) -> Self {
        match (self, event) {
            (Self::Failed, _) => Self::Failed,
            (_, FrameEvent::Failed) => Self::Failed,
            (Self::Loading, FrameEvent::Loaded)
            | (Self::Loading, FrameEvent::TimerElapsed)
            | (Self::Loading, FrameEvent::Skipped) => Self::Ready,
            (Self::Ready, _) => Self::Ready,
        }
    }

    /// Whether the fallback timer is still armed in this state.
    ///
    /// The timer only runs while loading; the script clears it on entering
    /// any state where this is false.
    pub fn timer_armed(self) -> bool {
        self == Self::Loading
    }

    pub fn shows_overlay(self) -> bool {
        self == Self::Loading
    }

    pub fn shows_error_panel(self) -> bool {
        self == Self::Failed
    }

    /// Value used for the `data-state` attribute on the viewer container.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

/// Every `(state, event)` pair mapped through [`ViewerState::apply`], as a
/// JSON object `{state: {event: next_state}}`.
pub fn transition_table() -> serde_json::Value {
    let table: serde_json::Map<String, serde_json::Value> = ViewerState::ALL
        .iter()
        .map(|state| {
            let row: serde_json::Map<String, serde_json::Value> = FrameEvent::ALL
                .iter()
                .map(|event| {
                    (
                        event.as_str().to_string(),
                        state.apply(*event).as_str().into(),
                    )
                })
                .collect();
            (state.as_str().to_string(), row.into())
        })
        .collect();

    table.into()
}

/// States in which the fallback timer stays armed, as a JSON array.
fn armed_states() -> serde_json::Value {
    ViewerState::ALL
        .iter()
        .filter(|state| state.timer_armed())
        .map(|state| serde_json::Value::from(state.as_str()))
        .collect()
}

/// Build the inline script driving the viewer in the browser.
///
/// Expects a container `#viewer` carrying `data-state`, an iframe
/// `#viewer-frame`, a `#viewer-skip` button and any number of
/// `[data-action=reload]` buttons. CSS keys overlay and error panel
/// visibility off `data-state`.
pub fn viewer_script(timeout: Duration) -> String {
    let timeout_ms = timeout.as_millis();
    let table = transition_table();
    let armed = armed_states();
    let load = FrameEvent::Loaded.as_str();
    let error = FrameEvent::Failed.as_str();
    let elapsed = FrameEvent::TimerElapsed.as_str();
    let skip = FrameEvent::Skipped.as_str();

    format!(
        r#"(function(){{
var T={table},A={armed};
var v=document.getElementById("viewer"),f=document.getElementById("viewer-frame"),s=document.getElementById("viewer-skip"),t=null;
if(!v||!f)return;
function clear(){{if(t!==null){{clearTimeout(t);t=null;}}}}
function on(e){{var r=T[v.getAttribute("data-state")],n=r&&r[e];if(!n)return;v.setAttribute("data-state",n);if(A.indexOf(n)<0)clear();}}
t=setTimeout(function(){{t=null;on("{elapsed}");}},{timeout_ms});
f.addEventListener("load",function(){{on("{load}");}});
f.addEventListener("error",function(){{on("{error}");}});
if(s)s.addEventListener("click",function(){{on("{skip}");}});
document.querySelectorAll("[data-action=reload]").forEach(function(b){{b.addEventListener("click",function(){{window.location.reload();}});}});
window.addEventListener("pagehide",clear);
}})();"#
    )
}
