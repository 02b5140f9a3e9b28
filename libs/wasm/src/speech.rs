//! # Phrase Playback
//!
//! Text-to-speech for the Dutch phrase cards. The request values are plain
//! Rust; only [`speak`] touches the browser's speech synthesis.

use config::constants::{PLAYBACK_FEEDBACK_MS, SPEECH_LOCALE, SPEECH_PITCH, SPEECH_RATE};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::SpeechSynthesisUtterance;

/// Alert shown when the browser has no speech synthesis.
const UNSUPPORTED_MESSAGE: &str = "您的浏览器不支持语音播放功能。";

/// Label a playback button shows while speaking.
const PLAYING_LABEL: &str = "🔊 播放中...";

/// What to say and how.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub text: String,
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
}

impl SpeechRequest {
    /// Build a request; blank text yields `None`.
    ///
    /// # Examples
    /// ```
    /// use heming_wasm::SpeechRequest;
    /// let request = SpeechRequest::new("Dank je wel", None).unwrap();
    /// assert_eq!(request.locale, "nl-NL");
    /// assert!(SpeechRequest::new("  ", None).is_none());
    /// ```
    pub fn new(text: &str, locale: Option<&str>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            locale: locale.unwrap_or(SPEECH_LOCALE).to_string(),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
        })
    }
}

/// Temporary button state while a phrase plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackFeedback {
    pub label: &'static str,
    /// How long before the original label is restored.
    pub duration_ms: u32,
}

impl Default for PlaybackFeedback {
    fn default() -> Self {
        Self {
            label: PLAYING_LABEL,
            duration_ms: PLAYBACK_FEEDBACK_MS,
        }
    }
}

/// Label shown on a playback button while speaking.
#[wasm_bindgen]
pub fn playback_label() -> String {
    PlaybackFeedback::default().label.to_string()
}

/// Milliseconds before a playback button reverts.
#[wasm_bindgen]
pub fn playback_feedback_ms() -> u32 {
    PlaybackFeedback::default().duration_ms
}

/// Speak `text`, cancelling anything already playing.
///
/// Returns `false` without speaking for blank text or when the browser has
/// no speech synthesis (the user is alerted in that case).
///
/// # Errors
/// Returns a JavaScript error when there is no window or the utterance
/// cannot be created.
#[wasm_bindgen]
pub fn speak(text: &str, lang: Option<String>) -> Result<bool, JsValue> {
    let Some(request) = SpeechRequest::new(text, lang.as_deref()) else {
        return Ok(false);
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let supported = js_sys::Reflect::has(&window, &JsValue::from_str("speechSynthesis"))?;
    if !supported {
        window.alert_with_message(UNSUPPORTED_MESSAGE)?;
        return Ok(false);
    }

    let synthesis = window.speech_synthesis()?;
    synthesis.cancel();

    let utterance = SpeechSynthesisUtterance::new_with_text(&request.text)?;
    utterance.set_lang(&request.locale);
    utterance.set_rate(request.rate);
    utterance.set_pitch(request.pitch);
    synthesis.speak(&utterance);
    Ok(true)
}
