//! # Line Lexer
//!
//! Classifies knowledge-base lines into categories, topics, fields, and
//! free text. Classification is pure: it looks at one line and the marker
//! set, never at parser state.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::MarkerConfig;
//! use culture_parser::lexer::{classify, Line};
//!
//! let markers = MarkerConfig::default();
//! let line = classify("#04 越级沟通", &markers);
//! assert_eq!(line, Line::Topic { number: "#04", title: "越级沟通" });
//! ```

mod line;

pub use line::{Field, FieldKind, Line};

use crate::model::Category;
use config::constants::MarkerConfig;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify a single trimmed, non-empty line.
///
/// Checks run in priority order: category header, topic header, field
/// prefix, distinguish heading, then plain text.
///
/// ## Example
///
/// ```rust
/// use config::constants::MarkerConfig;
/// use culture_parser::lexer::{classify, Line};
///
/// let markers = MarkerConfig::default();
/// match classify("💼 工作篇 (Work)", &markers) {
///     Line::Category(category) => assert_eq!(category.id, "工作"),
///     other => panic!("expected category, got {other:?}"),
/// }
/// ```
pub fn classify<'a>(line: &'a str, markers: &MarkerConfig) -> Line<'a> {
    if line.contains(markers.category_marker) && line.contains(markers.bilingual_marker) {
        return Line::Category(category_header(line, markers));
    }

    if line.starts_with(markers.topic_marker) {
        let (number, title) = split_first_token(line);
        return Line::Topic { number, title };
    }

    for kind in FieldKind::ALL {
        if let Some(rest) = line.strip_prefix(prefix_for(kind, markers)) {
            return Line::Field(Field::new(kind, rest.trim()));
        }
    }

    if line.starts_with(markers.distinguish_heading.as_str()) {
        return Line::DistinguishHeading;
    }

    Line::Text(line)
}

/// Line prefix configured for a field kind.
pub fn prefix_for(kind: FieldKind, markers: &MarkerConfig) -> &str {
    match kind {
        FieldKind::Scenario => markers.scenario_prefix.as_str(),
        FieldKind::Core => markers.core_prefix.as_str(),
        FieldKind::CheckYes => markers.check_yes_prefix.as_str(),
        FieldKind::CheckNo => markers.check_no_prefix.as_str(),
        FieldKind::Tip => markers.tip_prefix.as_str(),
    }
}

/// Derive icon, name, and id from a category header line.
fn category_header(line: &str, markers: &MarkerConfig) -> Category {
    let (icon, name) = split_first_token(line);
    let id = name
        .split(markers.category_marker)
        .next()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(markers.fallback_category_id.as_str());

    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

/// Split off the first whitespace-delimited token; the remainder is trimmed.
fn split_first_token(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> MarkerConfig {
        MarkerConfig::default()
    }

    #[test]
    fn test_category_header_fields() {
        let line = classify("💼 工作篇 (Work)", &markers());
        let Line::Category(category) = line else {
            panic!("expected category header");
        };
        assert_eq!(category.icon, "💼");
        assert_eq!(category.name, "工作篇 (Work)");
        assert_eq!(category.id, "工作");
    }

    #[test]
    fn test_category_requires_both_markers() {
        // Marker glyph without the parenthesis is plain text
        assert_eq!(classify("生活篇", &markers()), Line::Text("生活篇"));
        assert_eq!(classify("(Work)", &markers()), Line::Text("(Work)"));
    }

    #[test]
    fn test_category_without_name_falls_back() {
        let Line::Category(category) = classify("篇(x)", &markers()) else {
            panic!("expected category header");
        };
        assert_eq!(category.icon, "篇(x)");
        assert_eq!(category.name, "");
        assert_eq!(category.id, "other");
    }

    #[test]
    fn test_category_with_empty_prefix_falls_back() {
        let Line::Category(category) = classify("🏠 篇 (Home)", &markers()) else {
            panic!("expected category header");
        };
        assert_eq!(category.id, "other");
        assert_eq!(category.name, "篇 (Home)");
    }

    #[test]
    fn test_category_beats_topic() {
        let line = classify("#05 学校篇 (School)", &markers());
        assert!(matches!(line, Line::Category(_)));
    }

    #[test]
    fn test_topic_header() {
        assert_eq!(
            classify("#04 越级沟通 与 汇报", &markers()),
            Line::Topic { number: "#04", title: "越级沟通 与 汇报" }
        );
        assert_eq!(
            classify("#07", &markers()),
            Line::Topic { number: "#07", title: "" }
        );
    }

    #[test]
    fn test_field_prefixes() {
        let cases = [
            ("场景：同事嘲笑口音", FieldKind::Scenario, "同事嘲笑口音"),
            ("文化内核： 直接性。", FieldKind::Core, "直接性。"),
            ("✅ 文化差异：觉得直接是坦诚", FieldKind::CheckYes, "觉得直接是坦诚"),
            ("❌ 涉嫌歧视：针对口音的嘲笑 ", FieldKind::CheckNo, "针对口音的嘲笑"),
            ("一句话攻略：严肃回应", FieldKind::Tip, "严肃回应"),
        ];
        for (input, kind, value) in cases {
            assert_eq!(classify(input, &markers()), Line::Field(Field::new(kind, value)));
        }
    }

    #[test]
    fn test_distinguish_heading() {
        assert_eq!(classify("如何辨别：", &markers()), Line::DistinguishHeading);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(classify("荷兰人习惯直言。", &markers()), Line::Text("荷兰人习惯直言。"));
        assert!(!classify("随便一行", &markers()).is_header());
    }
}
