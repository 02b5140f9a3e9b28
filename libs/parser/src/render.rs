//! # Card Renderer
//!
//! Pure HTML rendering of a parsed [`Catalog`]. No parser state is needed:
//! every section and card is a function of the model alone. All text is
//! escaped before it is placed in markup.
//!
//! ## Example
//!
//! ```rust
//! use culture_parser::{parse, render::render_catalog};
//!
//! let html = render_catalog(&parse("💼 工作篇 (Work)\n#01 标题"));
//! assert!(html.contains(r#"id="cat-工作""#));
//! assert!(html.contains(r#"<h3 class="card-title">标题</h3>"#));
//! ```

use crate::model::{Catalog, CategorySection, Topic};
use std::fmt::Write;

/// Label prefixed to the scenario line.
const SCENARIO_LABEL: &str = "场景：";

/// Label prefixed to the emphasized core concept.
const CORE_LABEL: &str = "💡 文化内核：";

/// Static panel shown when the knowledge-base text is missing.
const ERROR_PANEL: &str = concat!(
    r#"<div class="load-error" style="text-align:center; padding: 2rem; color: #aa0000;">"#,
    "<h3>无法加载内容</h3>",
    "<p>请确保 <code>Content/culture_data.js</code> 文件存在且未被损坏。</p>",
    "</div>",
);

/// Render every section in catalog order.
pub fn render_catalog(catalog: &Catalog) -> String {
    catalog.sections.iter().map(render_section).collect()
}

/// Render one category section: header, then its cards in a grid.
pub fn render_section(section: &CategorySection) -> String {
    let id = escape_html(&section.category.id);
    let mut html = String::new();
    // Writing into a String cannot fail
    let _ = write!(
        html,
        r#"<div class="category-section" id="cat-{id}"><h2 class="category-title"><span class="category-icon">{icon}</span> {name}</h2><div class="topic-grid" id="grid-{id}">"#,
        icon = escape_html(&section.category.icon),
        name = escape_html(&section.category.name),
    );
    for topic in &section.topics {
        html.push_str(&render_card(topic));
    }
    html.push_str("</div></div>");
    html
}

/// Render one topic card.
pub fn render_card(topic: &Topic) -> String {
    format!(
        concat!(
            r#"<div class="culture-card">"#,
            r#"<div class="card-header"><h3 class="card-title">{title}</h3><span class="card-number">{number}</span></div>"#,
            r#"<div class="scenario-box">{scenario_label}{scenario}</div>"#,
            r#"<div class="core-concept"><strong>{core_label}{core}</strong><br>{core_desc}</div>"#,
            r#"<div class="check-list">"#,
            r#"<div class="check-item"><span class="check-icon is-culture">✅</span><span>{check_yes}</span></div>"#,
            r#"<div class="check-item"><span class="check-icon is-racism">❌</span><span>{check_no}</span></div>"#,
            r#"</div>"#,
            r#"<div class="pro-tip">{tip}</div>"#,
            r#"</div>"#,
        ),
        title = escape_html(&topic.title),
        number = escape_html(&topic.number),
        scenario_label = SCENARIO_LABEL,
        scenario = escape_html(&topic.scenario),
        core_label = CORE_LABEL,
        core = escape_html(&topic.core),
        core_desc = escape_html(&topic.core_desc),
        check_yes = escape_html(&topic.check_yes),
        check_no = escape_html(&topic.check_no),
        tip = escape_html(&topic.tip),
    )
}

/// The static missing-content panel.
pub fn render_error_panel() -> String {
    ERROR_PANEL.to_string()
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn section() -> CategorySection {
        CategorySection {
            category: Category {
                id: "工作".to_string(),
                name: "工作篇 (Work)".to_string(),
                icon: "💼".to_string(),
            },
            topics: vec![Topic {
                scenario: "同事嘲笑口音".to_string(),
                core: "直接性".to_string(),
                core_desc: "荷兰人习惯直言。".to_string(),
                check_yes: "觉得直接是坦诚".to_string(),
                check_no: "针对口音的嘲笑".to_string(),
                tip: "严肃回应".to_string(),
                ..Topic::new("#01", "标题")
            }],
        }
    }

    #[test]
    fn test_section_header_and_grid() {
        let html = render_section(&section());
        assert!(html.starts_with(r#"<div class="category-section" id="cat-工作">"#));
        assert!(html.contains(r#"<span class="category-icon">💼</span> 工作篇 (Work)</h2>"#));
        assert!(html.contains(r#"<div class="topic-grid" id="grid-工作">"#));
        assert!(html.ends_with("</div></div>"));
    }

    #[test]
    fn test_card_contents() {
        let html = render_card(&section().topics[0]);
        assert!(html.contains(r#"<span class="card-number">#01</span>"#));
        assert!(html.contains("场景：同事嘲笑口音"));
        assert!(html.contains("<strong>💡 文化内核：直接性</strong><br>荷兰人习惯直言。"));
        assert!(html.contains(r#"is-culture">✅</span><span>觉得直接是坦诚</span>"#));
        assert!(html.contains(r#"is-racism">❌</span><span>针对口音的嘲笑</span>"#));
        assert!(html.contains(r#"<div class="pro-tip">严肃回应</div>"#));
    }

    #[test]
    fn test_empty_topic_still_renders() {
        let html = render_card(&Topic::new("#09", ""));
        assert!(html.contains(r#"<h3 class="card-title"></h3>"#));
        assert!(html.contains(r#"<div class="pro-tip"></div>"#));
    }

    #[test]
    fn test_cards_keep_topic_order() {
        let mut s = section();
        s.topics.push(Topic::new("#02", "第二"));
        let html = render_section(&s);
        let first = html.find("#01").expect("first card");
        let second = html.find("#02").expect("second card");
        assert!(first < second);
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_card(&Topic::new("#1", "<script>alert('x')</script> & \"q\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;q&quot;"));
    }

    #[test]
    fn test_error_panel() {
        let html = render_error_panel();
        assert!(html.contains("无法加载内容"));
        assert!(html.contains("culture_data.js"));
    }
}
