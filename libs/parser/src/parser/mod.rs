//! # Catalog Parser
//!
//! Single forward pass over classified lines. The only state is the open
//! category and the open topic, held explicitly in [`Parser`] and
//! [`ParseState`].
//!
//! ## Example
//!
//! ```rust
//! use config::constants::MarkerConfig;
//! use culture_parser::parser::Parser;
//!
//! let markers = MarkerConfig::default();
//! let mut parser = Parser::new(&markers);
//! parser.feed("💼 工作篇 (Work)");
//! parser.feed("#01 标题");
//! let catalog = parser.finish();
//! assert_eq!(catalog.topic_count(), 1);
//! ```

mod builder;
mod fields;

pub use builder::CatalogBuilder;

use crate::lexer::{classify, Line};
use crate::model::{Catalog, Topic};
use config::constants::MarkerConfig;
use std::mem;

// =============================================================================
// PARSE STATE
// =============================================================================

/// Whether a topic is currently accumulating fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParseState {
    #[default]
    NoOpenTopic,
    OpenTopic(Topic),
}

impl ParseState {
    /// Close the open topic, if any, leaving `NoOpenTopic` behind.
    pub fn take(&mut self) -> Option<Topic> {
        match mem::take(self) {
            ParseState::OpenTopic(topic) => Some(topic),
            ParseState::NoOpenTopic => None,
        }
    }

    /// Mutable access to the open topic.
    pub fn open_topic_mut(&mut self) -> Option<&mut Topic> {
        match self {
            ParseState::OpenTopic(topic) => Some(topic),
            ParseState::NoOpenTopic => None,
        }
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Line-at-a-time catalog parser.
pub struct Parser<'m> {
    /// Marker set used for classification.
    markers: &'m MarkerConfig,
    /// Open-topic accumulator.
    state: ParseState,
    /// Sections built so far, plus the open category.
    builder: CatalogBuilder,
    /// Lines that matched nothing usable.
    ignored_lines: usize,
}

impl<'m> Parser<'m> {
    /// Create a parser for a marker set.
    pub fn new(markers: &'m MarkerConfig) -> Self {
        Self {
            markers,
            state: ParseState::NoOpenTopic,
            builder: CatalogBuilder::default(),
            ignored_lines: 0,
        }
    }

    /// Current open-topic state.
    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Feed one raw line. Blank lines are skipped.
    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        match classify(line, self.markers) {
            Line::Category(category) => {
                self.flush();
                self.builder.open_category(category);
            }
            Line::Topic { number, title } => {
                self.flush();
                self.state = ParseState::OpenTopic(Topic::new(number, title));
            }
            Line::Field(field) => match self.state.open_topic_mut() {
                Some(topic) => topic.apply_field(field, self.markers.core_sentence_end),
                None => self.ignore(line),
            },
            Line::DistinguishHeading => {}
            Line::Text(text) => {
                let absorbed = self
                    .state
                    .open_topic_mut()
                    .map_or(false, |topic| topic.absorb_continuation(text));
                if !absorbed {
                    self.ignore(line);
                }
            }
        }
    }

    /// Flush the last open topic and return the catalog.
    pub fn finish(mut self) -> Catalog {
        self.flush();
        let dropped = self.builder.dropped_topics();
        let catalog = self.builder.build();
        tracing::debug!(
            sections = catalog.sections.len(),
            topics = catalog.topic_count(),
            dropped_topics = dropped,
            ignored_lines = self.ignored_lines,
            "parsed culture catalog"
        );
        catalog
    }

    fn flush(&mut self) {
        if let Some(topic) = self.state.take() {
            self.builder.push_topic(topic);
        }
    }

    fn ignore(&mut self, line: &str) {
        self.ignored_lines += 1;
        tracing::trace!(line, "ignored line");
    }
}

/// Parse a whole text blob with the given markers.
pub fn parse_with(text: &str, markers: &MarkerConfig) -> Catalog {
    let mut parser = Parser::new(markers);
    for line in text.lines() {
        parser.feed(line);
    }
    parser.finish()
}

// =============================================================================
// TESTS
// =============================================================================
