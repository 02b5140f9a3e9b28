//! # Culture Parser (Pure Rust)
//!
//! Turns the semi-structured culture knowledge base into category sections
//! of topic cards. No DOM access, no I/O: the text blob is passed in and
//! HTML comes out.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Line Lexer → Parser (ParseState) → Catalog → Renderer → HTML
//! ```
//!
//! ## Example
//!
//! ```rust
//! use culture_parser::parse;
//!
//! let catalog = parse("💼 工作篇 (Work)\n#01 标题\n一句话攻略：严肃回应");
//! assert_eq!(catalog.sections[0].topics[0].tip, "严肃回应");
//! ```
//!
//! ## Text Format
//!
//! ```text
//! 💼 工作篇 (Work)                 category header: icon, name, id "工作"
//! #01 标题                         topic header: number, title
//! 场景：...                        scenario
//! 文化内核：label。description      core concept
//! 如何辨别                          ignored heading
//! ✅ 文化差异：...                  acceptable difference
//! ❌ 涉嫌歧视：...                  discriminatory conduct
//! 一句话攻略：...                   tip
//! ```

pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod render;

// Re-export public API
pub use error::LoadError;
pub use model::{Catalog, Category, CategorySection, Topic};
pub use parser::{parse_with, ParseState};
pub use render::{render_card, render_catalog, render_error_panel, render_section};

use config::constants::MarkerConfig;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse knowledge-base text with the default markers.
///
/// Never fails: unrecognized lines are ignored and topics without a
/// category are dropped.
///
/// ## Example
///
/// ```rust
/// use culture_parser::parse;
///
/// let catalog = parse("#00 孤立\n💼 工作篇 (Work)\n#01 标题");
/// assert_eq!(catalog.topic_count(), 1);
/// ```
pub fn parse(text: &str) -> Catalog {
    parse_with(text, &MarkerConfig::default())
}

/// Parse the knowledge base if it was supplied.
///
/// ## Errors
///
/// `LoadError::MissingInput` when `source` is `None`.
///
/// ## Example
///
/// ```rust
/// use culture_parser::load_culture_content;
///
/// let catalog = load_culture_content(Some("💼 工作篇 (Work)")).unwrap();
/// assert_eq!(catalog.sections.len(), 1);
/// ```
pub fn load_culture_content(source: Option<&str>) -> Result<Catalog, LoadError> {
    match source {
        Some(text) => Ok(parse(text)),
        None => {
            tracing::error!("failed to load content: {}", LoadError::MissingInput);
            Err(LoadError::MissingInput)
        }
    }
}

/// Load and render the knowledge base to HTML.
///
/// On error nothing is rendered; callers show [`render_error_panel`].
pub fn render_content(source: Option<&str>) -> Result<String, LoadError> {
    load_culture_content(source).map(|catalog| render_catalog(&catalog))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_topic() {
        let catalog = parse("💼 工作篇 (Work)\n#01 标题");
        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.sections[0].topics[0].title, "标题");
    }

    #[test]
    fn test_render_content_missing() {
        assert_eq!(render_content(None), Err(LoadError::MissingInput));
    }

    #[test]
    fn test_render_content_empty_text() {
        assert_eq!(render_content(Some("")), Ok(String::new()));
    }
}
