//! Keyword assessment of an incident description.
//!
//! This is plain substring matching on the lowercased text, not language
//! understanding. Severe keywords win over microaggression keywords.

use serde::{Deserialize, Serialize};

/// Phrases that mark hate speech or harassment.
pub const SEVERE_KEYWORDS: [&str; 4] = ["滚", "cancer", "kanker", "go back"];

/// Phrases typical of microaggressions.
pub const MICRO_KEYWORDS: [&str; 3] = ["where are you from", "ni hao", "sambal"];

/// Verdict of the scripted analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Assessment {
    HighRisk,
    Microaggression,
    NeedsMoreInfo,
}

impl Assessment {
    /// Verdict message.
    pub fn verdict(self) -> &'static str {
        match self {
            Assessment::HighRisk => "⚠️ **评估结果：高风险 (High Risk)**\n\n这段经历不仅涉及种族歧视，甚至可能构成【仇恨言论】或【骚扰】。\n\n根据荷兰法律，这是不可接受的。",
            Assessment::Microaggression => "ℹ️ **评估结果：微侵犯 (Microaggression)**\n\n这属于隐性歧视。对方可能辩解是“玩笑”，但这对您造成了冒犯。\n\n文化背景：荷兰人以“直接”著称，但常常缺乏界限感。",
            Assessment::NeedsMoreInfo => "📋 **评估结果：需要更多信息**\n\n这听起来确实令人不适。根据目前的描述，这可能源于文化误解或职场霸凌，也可能含有隐性偏见。",
        }
    }

    /// Advice message following the verdict.
    pub fn advice(self) -> &'static str {
        match self {
            Assessment::HighRisk => "建议行动：\n1. 立即保存证据（录音、邮件）。\n2. 您可以向 discriminatie.nl 匿名举报。\n3. 如感到威胁，请联系警方 (0900-8844)。",
            Assessment::Microaggression => "建议应对：\n使用严肃的反问句阻断对话。例如：“Why is that funny?” (这哪里好笑？)",
            Assessment::NeedsMoreInfo => "建议：\n您可以尝试记录下来，并咨询我们的【反击百科】查看类似案例。",
        }
    }
}

/// Classify a description by keyword.
pub fn assess(description: &str) -> Assessment {
    let lower = description.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if contains_any(&SEVERE_KEYWORDS[..]) {
        Assessment::HighRisk
    } else if contains_any(&MICRO_KEYWORDS[..]) {
        Assessment::Microaggression
    } else {
        Assessment::NeedsMoreInfo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severe_keywords_are_high_risk() {
        assert_eq!(assess("他对我说：滚回去"), Assessment::HighRisk);
        assert_eq!(assess("Someone shouted KANKER at me"), Assessment::HighRisk);
        assert_eq!(assess("they told me to Go Back home"), Assessment::HighRisk);
    }

    #[test]
    fn micro_keywords_are_microaggressions() {
        assert_eq!(assess("A colleague keeps saying Ni Hao"), Assessment::Microaggression);
        assert_eq!(assess("Where are you from, really?"), Assessment::Microaggression);
    }

    #[test]
    fn severe_wins_over_micro() {
        assert_eq!(assess("ni hao, now go back"), Assessment::HighRisk);
    }

    #[test]
    fn anything_else_needs_more_info() {
        assert_eq!(assess("老板总是不回复我的邮件"), Assessment::NeedsMoreInfo);
        assert_eq!(assess(""), Assessment::NeedsMoreInfo);
    }

    #[test]
    fn every_verdict_has_advice() {
        for a in [Assessment::HighRisk, Assessment::Microaggression, Assessment::NeedsMoreInfo] {
            assert!(a.verdict().contains("评估结果"));
            assert!(!a.advice().is_empty());
        }
    }
}
