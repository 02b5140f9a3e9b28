//! # Chat Session
//!
//! Holds the chat state between JavaScript calls. Each call returns the
//! resulting effects as a JSON array; the page performs them and, for
//! `schedule` effects, calls [`ChatSession::fire`] with the embedded event
//! after the delay.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! const chat = new ChatSession();
//! run(chat.open());
//!
//! function run(json) {
//!   for (const effect of JSON.parse(json)) {
//!     if (effect.type === "schedule") {
//!       setTimeout(() => run(chat.fire(JSON.stringify(effect.event))), effect.delayMs);
//!     } else {
//!       apply(effect);
//!     }
//!   }
//! }
//! ```

use chat_script::{step, ChatEvent, ChatState, Effect};
use culture_parser::render::escape_html;
use std::mem;
use wasm_bindgen::prelude::*;

/// Chat widget state owned by the page.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct ChatSession {
    state: ChatState,
}

#[wasm_bindgen]
impl ChatSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChatSession {
        ChatSession::default()
    }

    /// The widget became visible.
    pub fn open(&mut self) -> Result<String, JsValue> {
        self.dispatch(ChatEvent::Opened)
    }

    /// The user pressed send or Enter.
    pub fn submit(&mut self, text: &str) -> Result<String, JsValue> {
        self.dispatch(ChatEvent::Submitted(text.to_string()))
    }

    /// The user clicked an option button.
    pub fn choose_option(&mut self, option: &str) -> Result<String, JsValue> {
        self.dispatch(ChatEvent::OptionChosen(option.to_string()))
    }

    /// A scheduled event's timer fired.
    pub fn fire(&mut self, event_json: &str) -> Result<String, JsValue> {
        let event: ChatEvent = serde_json::from_str(event_json).map_err(|err| {
            tracing::warn!(%err, "rejected chat event");
            JsValue::from_str(&format!("invalid chat event: {err}"))
        })?;
        self.dispatch(event)
    }

    /// Name of the current state, for debugging.
    pub fn state_name(&self) -> String {
        self.state.name().to_string()
    }
}

impl ChatSession {
    fn dispatch(&mut self, event: ChatEvent) -> Result<String, JsValue> {
        let effects = self.dispatch_internal(event);
        serde_json::to_string(&effects).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Host-only: advance the state and return the effects.
    pub fn dispatch_internal(&mut self, event: ChatEvent) -> Vec<Effect> {
        let transition = step(mem::take(&mut self.state), event);
        self.state = transition.state;
        transition.effects
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }
}

/// HTML for a bot bubble: escaped text with line breaks kept.
///
/// # Examples
/// ```
/// assert_eq!(heming_wasm::render_bot_text("a<b\nc"), "a&lt;b<br>c");
/// ```
#[wasm_bindgen]
pub fn render_bot_text(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}
