//! WASM-facing entry points for the Heming site.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `*_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let rendered = heming_wasm::render_content_internal(None);
//! assert!(rendered.error.is_some());
//! assert!(rendered.html.contains("无法加载内容"));
//! ```

use config::constants::{CONTENT_CONTAINER_ID, CULTURE_DATA_GLOBAL};
use culture_parser::{render_error_panel, LoadError};
use wasm_bindgen::prelude::*;

mod chat_session;
mod report;
mod script_toggle;
mod speech;

pub use chat_session::{render_bot_text, ChatSession};
pub use report::{
    heatmap_options_json_internal, heatmap_points_json_internal, heatmap_stats_json_internal,
};
pub use script_toggle::ScriptPreference;
pub use speech::{PlaybackFeedback, SpeechRequest};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "heming_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Outcome of rendering the knowledge base: the HTML to insert and, when
/// the source was missing, the error that replaced it with the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedContent {
    pub html: String,
    pub error: Option<LoadError>,
}

/// Reads the page's `CULTURE_DATA` global and renders it into the content
/// container (default `content-area`).
///
/// A missing or non-string global renders the static error panel and logs
/// to the console. Returns whether real content was rendered.
///
/// # Errors
/// Returns a JavaScript error when there is no window, document, or
/// container element.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // document.addEventListener("DOMContentLoaded", () => render_culture_content());
/// ```
#[wasm_bindgen]
pub fn render_culture_content(container_id: Option<String>) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let id = container_id.as_deref().unwrap_or(CONTENT_CONTAINER_ID);
    let container = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing container #{id}")))?;

    let data = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CULTURE_DATA_GLOBAL))?;
    let rendered = render_content_internal(data.as_string());
    if let Some(err) = &rendered.error {
        web_sys::console::error_1(&JsValue::from_str(&format!("Failed to load content: {err}")));
    }
    tracing::debug!(container = id, bytes = rendered.html.len(), "rendered culture content");
    container.set_inner_html(&rendered.html);
    Ok(rendered.error.is_none())
}

/// Host-only helper behind [`render_culture_content`].
///
/// # Examples
/// ```
/// let rendered = heming_wasm::render_content_internal(Some("💼 工作篇 (Work)\n#01 标题".into()));
/// assert!(rendered.error.is_none());
/// assert!(rendered.html.contains("card-title"));
/// ```
pub fn render_content_internal(source: Option<String>) -> RenderedContent {
    match culture_parser::render_content(source.as_deref()) {
        Ok(html) => RenderedContent { html, error: None },
        Err(err) => RenderedContent {
            html: render_error_panel(),
            error: Some(err),
        },
    }
}

/// Parses knowledge-base text and returns the catalog as JSON.
///
/// # Errors
/// Returns a JavaScript error if serialization fails.
#[wasm_bindgen]
pub fn parse_culture_json(text: &str) -> Result<String, JsValue> {
    parse_culture_json_internal(text).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`parse_culture_json`].
pub fn parse_culture_json_internal(text: &str) -> serde_json::Result<String> {
    serde_json::to_string(&culture_parser::parse(text))
}
