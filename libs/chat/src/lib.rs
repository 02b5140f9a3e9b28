//! # Chat Script
//!
//! The scripted "AI assistant" chat, without any DOM or timers. The widget
//! state is an explicit [`ChatState`] value and every user action or fired
//! timer goes through the pure [`step`] function.
//!
//! ## Flow
//!
//! ```text
//! Opened → Greet → AskLocation
//! Init ──reply──▶ Describing ──reply──▶ Analyzing ──AnalysisDue──▶ End
//!   └──option──▶ Describing                                 End ──option──▶ Navigate / farewell
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chat_script::{step, ChatEvent, ChatState, Effect};
//!
//! let t = step(ChatState::Init, ChatEvent::ReplyDue("职场".into()));
//! assert_eq!(t.state.scenario(), Some("职场"));
//! assert!(matches!(t.effects[0], Effect::HideTyping));
//! ```

pub mod assess;
pub mod script;
pub mod state;

pub use assess::{assess, Assessment};
pub use state::{step, BotMessage, ChatEvent, ChatState, Effect, Transition};

#[cfg(test)]
mod tests;
