//! # Chat State Machine
//!
//! The chat is a linear script: `Init → Describing → Analyzing → End`.
//! [`step`] is pure. It consumes the current state and one event and returns
//! the next state plus the effects the page must perform. Delays are not
//! waited for here: they come back as [`Effect::Schedule`] and the host
//! feeds the scheduled event back in when its timer fires.

use crate::assess::assess;
use crate::script::{
    describe_prompt, ANALYZING_NOTICE, FAREWELL, FOLLOW_UP_OPTIONS, FOLLOW_UP_QUESTION, GREETING,
    LEGAL_KEYWORD, LOCATION_OPTIONS, LOCATION_QUESTION,
};
use config::constants::{
    CHAT_ANALYSIS_DELAY_MS, CHAT_FOLLOW_UP_DELAY_MS, CHAT_GREETING_DELAY_MS,
    CHAT_OPTION_DELAY_MS, CHAT_QUESTION_DELAY_MS, CHAT_TYPING_DELAY_MS, LEGAL_GUIDE_URL,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// STATE
// =============================================================================

/// Where the conversation is in the script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChatState {
    /// Waiting for the user to say where the incident happened.
    #[default]
    Init,
    /// Waiting for a description of the incident.
    Describing { scenario: String },
    /// The simulated analysis is running.
    Analyzing { scenario: String },
    /// Verdict given; only the follow-up options remain.
    End,
}

impl ChatState {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ChatState::Init => "init",
            ChatState::Describing { .. } => "describing",
            ChatState::Analyzing { .. } => "analyzing",
            ChatState::End => "end",
        }
    }

    /// Scenario chosen or typed by the user, once known.
    pub fn scenario(&self) -> Option<&str> {
        match self {
            ChatState::Describing { scenario } | ChatState::Analyzing { scenario } => {
                Some(scenario.as_str())
            }
            ChatState::Init | ChatState::End => None,
        }
    }
}

// =============================================================================
// EVENTS AND EFFECTS
// =============================================================================

/// Input to the state machine: user actions and fired timers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "camelCase")]
pub enum ChatEvent {
    /// The chat widget was shown.
    Opened,
    /// Timer: show the greeting.
    Greet,
    /// Timer: ask where it happened.
    AskLocation,
    /// The user pressed send (raw input text).
    Submitted(String),
    /// Timer: answer a submitted message.
    ReplyDue(String),
    /// Timer: deliver the verdict for a description.
    AnalysisDue(String),
    /// Timer: offer the follow-up options.
    FollowUp,
    /// The user clicked an option button.
    OptionChosen(String),
    /// Timer: acknowledge a clicked option.
    OptionAcknowledged(String),
}

/// A bot chat bubble, with optional quick-answer buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMessage {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl BotMessage {
    /// A message without buttons.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// A message with quick-answer buttons.
    pub fn with_options(text: impl Into<String>, options: &[&str]) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Something the page must do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Append a user bubble.
    UserMessage { text: String },
    /// Append a bot bubble.
    BotMessage(BotMessage),
    /// Empty the input box.
    ClearInput,
    ShowTyping,
    HideTyping,
    /// Leave the chat for another page.
    Navigate { url: String },
    /// Feed `event` back into [`step`] after `delay_ms`.
    #[serde(rename_all = "camelCase")]
    Schedule { delay_ms: u32, event: ChatEvent },
}

impl Effect {
    fn bot(text: impl Into<String>) -> Self {
        Effect::BotMessage(BotMessage::text(text))
    }

    fn schedule(delay_ms: u32, event: ChatEvent) -> Self {
        Effect::Schedule { delay_ms, event }
    }
}

/// Result of one [`step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ChatState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: ChatState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }
}

// =============================================================================
// TRANSITIONS
// =============================================================================

/// Advance the chat by one event.
///
/// # Examples
/// ```
/// use chat_script::{step, ChatEvent, ChatState, Effect};
///
/// let t = step(ChatState::Init, ChatEvent::Submitted("  ".into()));
/// assert_eq!(t.state, ChatState::Init);
/// assert!(t.effects.is_empty());
/// ```
pub fn step(state: ChatState, event: ChatEvent) -> Transition {
    let from = state.name();
    let transition = match event {
        ChatEvent::Opened => Transition::to(
            state,
            vec![Effect::schedule(CHAT_GREETING_DELAY_MS, ChatEvent::Greet)],
        ),
        ChatEvent::Greet => Transition::to(
            state,
            vec![
                Effect::bot(GREETING),
                Effect::schedule(CHAT_QUESTION_DELAY_MS, ChatEvent::AskLocation),
            ],
        ),
        ChatEvent::AskLocation => Transition::to(
            state,
            vec![Effect::BotMessage(BotMessage::with_options(
                LOCATION_QUESTION,
                &LOCATION_OPTIONS,
            ))],
        ),
        ChatEvent::Submitted(raw) => submit(state, raw.trim()),
        ChatEvent::ReplyDue(text) => reply(state, text),
        ChatEvent::AnalysisDue(text) => analyze(state, &text),
        ChatEvent::FollowUp => Transition::to(
            state,
            vec![Effect::BotMessage(BotMessage::with_options(
                FOLLOW_UP_QUESTION,
                &FOLLOW_UP_OPTIONS,
            ))],
        ),
        ChatEvent::OptionChosen(option) => choose(state, option),
        ChatEvent::OptionAcknowledged(option) => Transition::to(
            state,
            vec![Effect::HideTyping, Effect::bot(describe_prompt(&option, false))],
        ),
    };
    if transition.state.name() != from {
        tracing::debug!(from, to = transition.state.name(), "chat transition");
    }
    transition
}

fn submit(state: ChatState, text: &str) -> Transition {
    if text.is_empty() {
        return Transition::to(state, Vec::new());
    }
    Transition::to(
        state,
        vec![
            Effect::UserMessage {
                text: text.to_string(),
            },
            Effect::ClearInput,
            Effect::ShowTyping,
            Effect::schedule(CHAT_TYPING_DELAY_MS, ChatEvent::ReplyDue(text.to_string())),
        ],
    )
}

fn reply(state: ChatState, text: String) -> Transition {
    match state {
        ChatState::Init => {
            let prompt = describe_prompt(&text, true);
            Transition::to(
                ChatState::Describing { scenario: text },
                vec![Effect::HideTyping, Effect::bot(prompt)],
            )
        }
        ChatState::Describing { scenario } => Transition::to(
            ChatState::Analyzing { scenario },
            vec![
                Effect::HideTyping,
                Effect::bot(ANALYZING_NOTICE),
                Effect::schedule(CHAT_ANALYSIS_DELAY_MS, ChatEvent::AnalysisDue(text)),
            ],
        ),
        // Messages typed during or after analysis get no scripted answer
        other => Transition::to(other, vec![Effect::HideTyping]),
    }
}

fn analyze(state: ChatState, description: &str) -> Transition {
    if !matches!(state, ChatState::Analyzing { .. }) {
        return Transition::to(state, Vec::new());
    }
    let assessment = assess(description);
    tracing::debug!(?assessment, "chat analysis");
    Transition::to(
        ChatState::End,
        vec![
            Effect::bot(assessment.verdict()),
            Effect::bot(assessment.advice()),
            Effect::schedule(CHAT_FOLLOW_UP_DELAY_MS, ChatEvent::FollowUp),
        ],
    )
}

fn choose(state: ChatState, option: String) -> Transition {
    if state == ChatState::End {
        let effect = if option.contains(LEGAL_KEYWORD) {
            Effect::Navigate {
                url: LEGAL_GUIDE_URL.to_string(),
            }
        } else {
            Effect::bot(FAREWELL)
        };
        return Transition::to(ChatState::End, vec![effect]);
    }

    Transition::to(
        ChatState::Describing {
            scenario: option.clone(),
        },
        vec![
            Effect::UserMessage {
                text: option.clone(),
            },
            Effect::ShowTyping,
            Effect::schedule(CHAT_OPTION_DELAY_MS, ChatEvent::OptionAcknowledged(option)),
        ],
    )
}
