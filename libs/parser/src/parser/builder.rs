//! Section accumulator keyed by category id.

use crate::model::{Catalog, Category, CategorySection, Topic};
use std::collections::HashMap;

/// Collects sections in first-introduced order and routes flushed topics to
/// the open category.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    sections: Vec<CategorySection>,
    /// Category id to index in `sections`.
    index: HashMap<String, usize>,
    /// Section of the most recent category header.
    current: Option<usize>,
    dropped: usize,
}

impl CatalogBuilder {
    /// Make `category` the owner of subsequent topics.
    ///
    /// A repeated id reuses the existing section; its first name and icon
    /// are kept.
    pub fn open_category(&mut self, category: Category) {
        let slot = match self.index.get(&category.id) {
            Some(&slot) => slot,
            None => {
                let slot = self.sections.len();
                self.index.insert(category.id.clone(), slot);
                self.sections.push(CategorySection::new(category));
                slot
            }
        };
        self.current = Some(slot);
    }

    /// Append a completed topic to the open category.
    ///
    /// Topics seen before any category header have no owner and are dropped.
    pub fn push_topic(&mut self, topic: Topic) {
        match self.current {
            Some(slot) => self.sections[slot].topics.push(topic),
            None => {
                self.dropped += 1;
                tracing::debug!(number = %topic.number, "dropped topic without category");
            }
        }
    }

    /// Number of topics dropped for lack of a category.
    pub fn dropped_topics(&self) -> usize {
        self.dropped
    }

    pub fn build(self) -> Catalog {
        Catalog {
            sections: self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: "💼".to_string(),
        }
    }

    #[test]
    fn repeated_id_merges_sections() {
        let mut builder = CatalogBuilder::default();
        builder.open_category(category("工作", "工作篇 (Work)"));
        builder.push_topic(Topic::new("#01", "a"));
        builder.open_category(category("生活", "生活篇 (Life)"));
        builder.push_topic(Topic::new("#02", "b"));
        builder.open_category(category("工作", "工作篇 (Work II)"));
        builder.push_topic(Topic::new("#03", "c"));

        let catalog = builder.build();
        assert_eq!(catalog.sections.len(), 2);
        let work = &catalog.sections[0];
        assert_eq!(work.category.name, "工作篇 (Work)");
        let numbers: Vec<_> = work.topics.iter().map(|t| t.number.as_str()).collect();
        assert_eq!(numbers, ["#01", "#03"]);
    }

    #[test]
    fn orphan_topic_is_dropped() {
        let mut builder = CatalogBuilder::default();
        builder.push_topic(Topic::new("#00", "orphan"));
        assert_eq!(builder.dropped_topics(), 1);
        assert!(builder.build().is_empty());
    }
}
