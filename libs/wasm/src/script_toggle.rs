//! Simplified/traditional script preference.
//!
//! Only the toggle state lives here. The character conversion itself is
//! done in JavaScript by a third-party converter.

use config::constants::SCRIPT_PREFERENCE_KEY;
use wasm_bindgen::prelude::*;

/// Which Chinese script the page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScriptPreference {
    /// The authored script.
    #[default]
    Simplified,
    Traditional,
}

impl ScriptPreference {
    /// Read the stored value; anything but `tw` is simplified.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("tw") => ScriptPreference::Traditional,
            _ => ScriptPreference::Simplified,
        }
    }

    /// Value written to local storage.
    pub fn as_stored(self) -> &'static str {
        match self {
            ScriptPreference::Simplified => "cn",
            ScriptPreference::Traditional => "tw",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ScriptPreference::Simplified => ScriptPreference::Traditional,
            ScriptPreference::Traditional => ScriptPreference::Simplified,
        }
    }

    /// Toggle button text: the script the button switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            ScriptPreference::Simplified => "繁",
            ScriptPreference::Traditional => "简",
        }
    }

    /// Converter `(from, to)` locales for switching away from `self`.
    pub fn conversion(self) -> (&'static str, &'static str) {
        (self.as_stored(), self.toggle().as_stored())
    }
}

/// Local storage key holding the preference.
#[wasm_bindgen]
pub fn script_preference_key() -> String {
    SCRIPT_PREFERENCE_KEY.to_string()
}

/// New stored value after the toggle button is pressed.
#[wasm_bindgen]
pub fn toggle_script_preference(stored: Option<String>) -> String {
    ScriptPreference::from_stored(stored.as_deref())
        .toggle()
        .as_stored()
        .to_string()
}

/// Toggle button text for the stored preference.
#[wasm_bindgen]
pub fn script_button_label(stored: Option<String>) -> String {
    ScriptPreference::from_stored(stored.as_deref())
        .button_label()
        .to_string()
}
