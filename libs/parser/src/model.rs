//! # Catalog Model
//!
//! The nested model built by the parser: categories holding topic cards.
//! The whole catalog is built once per text blob and never mutated after
//! rendering.
//!
//! ## Example
//!
//! ```rust
//! use culture_parser::parse;
//!
//! let catalog = parse("💼 工作篇 (Work)\n#01 标题");
//! assert_eq!(catalog.sections.len(), 1);
//! assert_eq!(catalog.topic_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// CATEGORY
// =============================================================================

/// A category header such as `💼 工作篇 (Work)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Key derived from the text before the category marker (`工作`).
    pub id: String,
    /// Full display label including the translation (`工作篇 (Work)`).
    pub name: String,
    /// Leading glyph of the header line (`💼`).
    pub icon: String,
}

// =============================================================================
// TOPIC
// =============================================================================

/// One topic card. Every field defaults to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Label token from the header line, verbatim (`#01`).
    pub number: String,
    pub title: String,
    /// Situational example.
    pub scenario: String,
    /// Short label of the underlying concept.
    pub core: String,
    /// Extended description of the concept.
    pub core_desc: String,
    /// What counts as acceptable cultural difference.
    pub check_yes: String,
    /// What counts as discriminatory conduct.
    pub check_no: String,
    /// One-line actionable suggestion.
    pub tip: String,
}

impl Topic {
    /// Create a topic with only its header fields set.
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// A category together with its topics, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: Category,
    pub topics: Vec<Topic>,
}

impl CategorySection {
    /// Create an empty section for a category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            topics: Vec::new(),
        }
    }
}

/// The parsed knowledge base.
///
/// Sections appear in the order their category id was first introduced;
/// each id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<CategorySection>,
}

impl Catalog {
    /// Check if the catalog has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of topics across all sections.
    pub fn topic_count(&self) -> usize {
        self.sections.iter().map(|s| s.topics.len()).sum()
    }

    /// Find the section for a category id.
    pub fn section(&self, id: &str) -> Option<&CategorySection> {
        self.sections.iter().find(|s| s.category.id == id)
    }

    /// Iterate all topics in render order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.sections.iter().flat_map(|s| s.topics.iter())
    }
}
