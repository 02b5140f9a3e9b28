//! # Configuration Constants
//!
//! Centralized constants for the Heming site. Content markers, chat pacing,
//! speech defaults, and heatmap defaults are defined here.
//!
//! ## Categories
//!
//! - **Content Markers**: Glyphs and prefixes recognized by the card parser
//! - **Page Wiring**: Element ids and page globals
//! - **Chat Pacing**: Delays used by the scripted chat
//! - **Speech**: Defaults for phrase playback
//! - **Heatmap**: Map centre, zoom bounds, and layer styling

use thiserror::Error;

// =============================================================================
// CONTENT MARKERS
// =============================================================================

/// Glyph that marks a category header line (e.g. `💼 工作篇 (Work)`).
///
/// The text before this glyph becomes the category id.
///
/// # Example
///
/// ```rust
/// use config::constants::CATEGORY_MARKER;
///
/// let name = "工作篇 (Work)";
/// assert_eq!(name.split(CATEGORY_MARKER).next(), Some("工作"));
/// ```
pub const CATEGORY_MARKER: char = '篇';

/// Character that must also appear on a category header, opening the
/// parenthetical English translation.
pub const BILINGUAL_MARKER: char = '(';

/// Leading character of a topic header line (e.g. `#04 越级沟通`).
///
/// # Example
///
/// ```rust
/// use config::constants::TOPIC_MARKER;
///
/// assert!("#04 越级沟通".starts_with(TOPIC_MARKER));
/// ```
pub const TOPIC_MARKER: char = '#';

/// Prefix of the scenario field line.
pub const SCENARIO_PREFIX: &str = "场景：";

/// Prefix of the core-concept field line.
pub const CORE_PREFIX: &str = "文化内核：";

/// Prefix of the acceptable-difference field line.
pub const CHECK_YES_PREFIX: &str = "✅ 文化差异：";

/// Prefix of the discriminatory-conduct field line.
pub const CHECK_NO_PREFIX: &str = "❌ 涉嫌歧视：";

/// Prefix of the one-line tip.
pub const TIP_PREFIX: &str = "一句话攻略：";

/// Heading that introduces the check list. Never treated as continuation text.
pub const DISTINGUISH_HEADING: &str = "如何辨别";

/// Sentence-ending mark splitting the core label from its description.
///
/// # Example
///
/// ```rust
/// use config::constants::CORE_SENTENCE_END;
///
/// let (label, desc) = "直接性。荷兰人习惯直言。".split_once(CORE_SENTENCE_END).unwrap();
/// assert_eq!(label, "直接性");
/// assert_eq!(desc, "荷兰人习惯直言。");
/// ```
pub const CORE_SENTENCE_END: char = '。';

/// Category id used when the text before the category marker is empty.
pub const FALLBACK_CATEGORY_ID: &str = "other";

// =============================================================================
// PAGE WIRING
// =============================================================================

/// Id of the element that receives the rendered category sections.
pub const CONTENT_CONTAINER_ID: &str = "content-area";

/// Name of the page-level global holding the knowledge-base text.
pub const CULTURE_DATA_GLOBAL: &str = "CULTURE_DATA";

/// Page the chat navigates to when the user asks for the legal guide.
pub const LEGAL_GUIDE_URL: &str = "legal.html";

/// Local storage key for the simplified/traditional script preference.
pub const SCRIPT_PREFERENCE_KEY: &str = "heming_lang_pref";

// =============================================================================
// CHAT PACING (milliseconds)
// =============================================================================

/// Delay before the greeting appears after the chat opens.
pub const CHAT_GREETING_DELAY_MS: u32 = 500;

/// Delay between the greeting and the location question.
pub const CHAT_QUESTION_DELAY_MS: u32 = 800;

/// Typing-indicator time before the bot answers a typed message.
pub const CHAT_TYPING_DELAY_MS: u32 = 1500;

/// Simulated analysis time before the verdict.
pub const CHAT_ANALYSIS_DELAY_MS: u32 = 2000;

/// Delay before the follow-up question after the verdict.
pub const CHAT_FOLLOW_UP_DELAY_MS: u32 = 1000;

/// Typing-indicator time before acknowledging a clicked option.
pub const CHAT_OPTION_DELAY_MS: u32 = 1000;

// =============================================================================
// SPEECH
// =============================================================================

/// Locale used for phrase playback.
pub const SPEECH_LOCALE: &str = "nl-NL";

/// Speaking rate, slightly slower than normal.
pub const SPEECH_RATE: f32 = 0.9;

/// Speaking pitch.
pub const SPEECH_PITCH: f32 = 1.0;

/// How long a playback button shows its "playing" label.
pub const PLAYBACK_FEEDBACK_MS: u32 = 2000;

// =============================================================================
// HEATMAP
// =============================================================================

/// Map centre (latitude, longitude) of the Netherlands.
pub const MAP_CENTER: (f64, f64) = (52.1326, 5.2913);

/// Initial zoom level.
pub const MAP_ZOOM: u8 = 7;

/// Minimum zoom level.
pub const MAP_MIN_ZOOM: u8 = 6;

/// Maximum zoom level.
pub const MAP_MAX_ZOOM: u8 = 10;

/// Heat layer point radius in pixels.
pub const HEAT_RADIUS: u32 = 35;

/// Heat layer blur in pixels.
pub const HEAT_BLUR: u32 = 25;

/// Intensity mapped to the hottest gradient stop.
pub const HEAT_MAX_INTENSITY: f64 = 1.0;

/// Multiplier turning a 0..1 intensity into the 1..5 severity scale.
pub const SEVERITY_SCALE: f64 = 5.0;

// =============================================================================
// MARKER CONFIG
// =============================================================================

/// The full set of markers the card parser recognizes.
///
/// # Examples
/// ```
/// use config::constants::MarkerConfig;
/// let markers = MarkerConfig::default();
/// assert_eq!(markers.topic_marker, '#');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerConfig {
    /// Glyph preceding the category suffix in a header.
    pub category_marker: char,
    /// Second character required on a category header.
    pub bilingual_marker: char,
    /// Leading character of a topic header.
    pub topic_marker: char,
    pub scenario_prefix: String,
    pub core_prefix: String,
    pub check_yes_prefix: String,
    pub check_no_prefix: String,
    pub tip_prefix: String,
    /// Heading excluded from continuation text.
    pub distinguish_heading: String,
    /// Mark splitting the core label from its description.
    pub core_sentence_end: char,
    /// Id used when a category header has nothing before the marker.
    pub fallback_category_id: String,
}

impl MarkerConfig {
    /// Builds a marker set, rejecting whitespace markers and empty prefixes.
    ///
    /// Field prefixes are given in the order scenario, core, check-yes,
    /// check-no, tip.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{MarkerConfig, ConfigError};
    /// let err = MarkerConfig::new('篇', '(', ' ', ["场景：", "内核：", "是：", "否：", "攻略："])
    ///     .unwrap_err();
    /// assert_eq!(err, ConfigError::WhitespaceMarker(' '));
    /// ```
    pub fn new(
        category_marker: char,
        bilingual_marker: char,
        topic_marker: char,
        field_prefixes: [&str; 5],
    ) -> Result<Self, ConfigError> {
        for marker in [category_marker, bilingual_marker, topic_marker] {
            if marker.is_whitespace() {
                return Err(ConfigError::WhitespaceMarker(marker));
            }
        }
        if let Some(index) = field_prefixes.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::EmptyPrefix(index));
        }
        let [scenario, core, check_yes, check_no, tip] = field_prefixes;
        Ok(Self {
            category_marker,
            bilingual_marker,
            topic_marker,
            scenario_prefix: scenario.to_string(),
            core_prefix: core.to_string(),
            check_yes_prefix: check_yes.to_string(),
            check_no_prefix: check_no.to_string(),
            tip_prefix: tip.to_string(),
            ..Self::default()
        })
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            category_marker: CATEGORY_MARKER,
            bilingual_marker: BILINGUAL_MARKER,
            topic_marker: TOPIC_MARKER,
            scenario_prefix: SCENARIO_PREFIX.to_string(),
            core_prefix: CORE_PREFIX.to_string(),
            check_yes_prefix: CHECK_YES_PREFIX.to_string(),
            check_no_prefix: CHECK_NO_PREFIX.to_string(),
            tip_prefix: TIP_PREFIX.to_string(),
            distinguish_heading: DISTINGUISH_HEADING.to_string(),
            core_sentence_end: CORE_SENTENCE_END,
            fallback_category_id: FALLBACK_CATEGORY_ID.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A line marker would match every indented line.
    #[error("marker must not be whitespace: {0:?}")]
    WhitespaceMarker(char),
    /// A field prefix at the given position (scenario = 0) is blank.
    #[error("field prefix #{0} must not be empty")]
    EmptyPrefix(usize),
}
