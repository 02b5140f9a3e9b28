//! Canned bot lines. The chat never generates text; every reply is one of
//! these strings, optionally with the user's scenario spliced in.

/// First line shown when the chat opens.
pub const GREETING: &str =
    "您好，我是荷鸣 AI 助手。我可以帮您分析您遇到的情况是否属于歧视，并提供建议。";

/// Question asking where the incident happened.
pub const LOCATION_QUESTION: &str = "请告诉我，这件事发生在哪里？";

/// Quick answers offered with [`LOCATION_QUESTION`].
pub const LOCATION_OPTIONS: [&str; 5] = [
    "职场 / 公司",
    "学校 / 校园",
    "公共交通 / 街道",
    "租房 / 邻里",
    "商店 / 餐厅",
];

/// Shown while the simulated analysis runs.
pub const ANALYZING_NOTICE: &str = "正在分析语义和荷兰法律背景...";

/// Question offered after the verdict.
pub const FOLLOW_UP_QUESTION: &str = "您需要查看具体的法律投诉渠道吗？";

/// Answers offered with [`FOLLOW_UP_QUESTION`].
pub const FOLLOW_UP_OPTIONS: [&str; 2] = ["查看法律指南", "结束对话"];

/// An option containing this word leads to the legal guide.
pub const LEGAL_KEYWORD: &str = "法律";

/// Reply to any non-legal option after the verdict.
pub const FAREWELL: &str = "好的，希望这些建议对您有帮助。加油！💪";

const DESCRIBE_EXAMPLE: &str = "\n\n例如：“同事叫我...”，“老板说...”";

/// Ask the user to describe what happened at `scenario`.
///
/// Typed scenarios also get an example; clicked options do not.
pub fn describe_prompt(scenario: &str, with_example: bool) -> String {
    let mut prompt =
        format!("明白了。在【{scenario}】发生的事件往往比较复杂。请简单描述一下发生了什么？");
    if with_example {
        prompt.push_str(DESCRIBE_EXAMPLE);
    }
    prompt
}
