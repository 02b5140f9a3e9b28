//! Script walk-throughs for the chat state machine.

use super::*;
use crate::script::{FAREWELL, FOLLOW_UP_OPTIONS, GREETING, LOCATION_OPTIONS};
use config::constants::{
    CHAT_ANALYSIS_DELAY_MS, CHAT_GREETING_DELAY_MS, CHAT_OPTION_DELAY_MS, CHAT_TYPING_DELAY_MS,
    LEGAL_GUIDE_URL,
};

/// Pull the single scheduled event out of a transition.
fn scheduled(t: &Transition) -> (u32, ChatEvent) {
    t.effects
        .iter()
        .find_map(|e| match e {
            Effect::Schedule { delay_ms, event } => Some((*delay_ms, event.clone())),
            _ => None,
        })
        .expect("transition schedules an event")
}

fn bot_texts(t: &Transition) -> Vec<&str> {
    t.effects
        .iter()
        .filter_map(|e| match e {
            Effect::BotMessage(m) => Some(m.text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn opening_greets_then_asks_location() {
    let t = step(ChatState::Init, ChatEvent::Opened);
    assert_eq!(scheduled(&t), (CHAT_GREETING_DELAY_MS, ChatEvent::Greet));

    let t = step(t.state, ChatEvent::Greet);
    assert_eq!(bot_texts(&t), [GREETING]);
    let (_, next) = scheduled(&t);

    let t = step(t.state, next);
    match &t.effects[..] {
        [Effect::BotMessage(m)] => assert_eq!(m.options, LOCATION_OPTIONS),
        other => panic!("unexpected effects {other:?}"),
    }
    assert_eq!(t.state, ChatState::Init);
}

#[test]
fn submitted_text_is_echoed_and_delayed() {
    let t = step(ChatState::Init, ChatEvent::Submitted("  职场  ".into()));
    assert_eq!(
        t.effects[..3],
        [
            Effect::UserMessage { text: "职场".into() },
            Effect::ClearInput,
            Effect::ShowTyping
        ]
    );
    assert_eq!(
        scheduled(&t),
        (CHAT_TYPING_DELAY_MS, ChatEvent::ReplyDue("职场".into()))
    );
    assert_eq!(t.state, ChatState::Init);
}

#[test]
fn full_typed_conversation() {
    let t = step(ChatState::Init, ChatEvent::ReplyDue("学校".into()));
    assert_eq!(t.state, ChatState::Describing { scenario: "学校".into() });
    assert!(bot_texts(&t)[0].contains("【学校】"));
    assert!(bot_texts(&t)[0].contains("例如"));

    let t = step(t.state, ChatEvent::ReplyDue("同学叫我 ni hao".into()));
    assert_eq!(t.state, ChatState::Analyzing { scenario: "学校".into() });
    let (delay, event) = scheduled(&t);
    assert_eq!(delay, CHAT_ANALYSIS_DELAY_MS);

    let t = step(t.state, event);
    assert_eq!(t.state, ChatState::End);
    let texts = bot_texts(&t);
    assert_eq!(texts.len(), 2);
    assert!(texts[0].contains("Microaggression"));

    let (_, follow_up) = scheduled(&t);
    let t = step(t.state, follow_up);
    match &t.effects[..] {
        [Effect::BotMessage(m)] => assert_eq!(m.options, FOLLOW_UP_OPTIONS),
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn option_click_skips_example() {
    let t = step(ChatState::Init, ChatEvent::OptionChosen("租房 / 邻里".into()));
    assert_eq!(t.state.scenario(), Some("租房 / 邻里"));
    let (delay, event) = scheduled(&t);
    assert_eq!(delay, CHAT_OPTION_DELAY_MS);

    let t = step(t.state, event);
    assert_eq!(t.effects[0], Effect::HideTyping);
    let texts = bot_texts(&t);
    assert!(texts[0].contains("【租房 / 邻里】"));
    assert!(!texts[0].contains("例如"));
}

#[test]
fn end_options_navigate_or_farewell() {
    let t = step(ChatState::End, ChatEvent::OptionChosen("查看法律指南".into()));
    assert_eq!(t.effects, [Effect::Navigate { url: LEGAL_GUIDE_URL.into() }]);

    let t = step(ChatState::End, ChatEvent::OptionChosen("结束对话".into()));
    assert_eq!(bot_texts(&t), [FAREWELL]);
    assert_eq!(t.state, ChatState::End);
}

#[test]
fn late_timers_are_ignored() {
    let t = step(ChatState::End, ChatEvent::AnalysisDue("kanker".into()));
    assert_eq!(t.state, ChatState::End);
    assert!(t.effects.is_empty());

    let t = step(ChatState::End, ChatEvent::ReplyDue("还有问题".into()));
    assert_eq!(t.effects, [Effect::HideTyping]);
}

#[test]
fn effects_serialize_for_the_page() {
    let effect = Effect::Schedule {
        delay_ms: 1500,
        event: ChatEvent::ReplyDue("职场".into()),
    };
    let json = serde_json::to_value(&effect).expect("serializable");
    assert_eq!(json["type"], "schedule");
    assert_eq!(json["delayMs"], 1500);
    assert_eq!(json["event"]["type"], "replyDue");
    assert_eq!(json["event"]["text"], "职场");

    let back: Effect = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, effect);
}

#[test]
fn unit_events_parse_from_json() {
    let event: ChatEvent = serde_json::from_str(r#"{"type":"followUp"}"#).expect("valid event");
    assert_eq!(event, ChatEvent::FollowUp);
}
