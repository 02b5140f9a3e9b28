//! # Lines
//!
//! Classified line types produced by the line lexer.
//!
//! ## Example
//!
//! ```rust
//! use culture_parser::lexer::{Field, FieldKind};
//!
//! let field = Field::new(FieldKind::Tip, "严肃回应");
//! assert_eq!(field.kind, FieldKind::Tip);
//! ```

use crate::model::Category;

// =============================================================================
// LINE
// =============================================================================

/// One non-empty source line after classification.
///
/// Variants are listed in the priority order the lexer checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Category header such as `💼 工作篇 (Work)`.
    Category(Category),

    /// Topic header such as `#04 越级沟通`.
    Topic {
        /// First whitespace-delimited token, verbatim.
        number: &'a str,
        /// Remainder of the line.
        title: &'a str,
    },

    /// Recognized field line.
    Field(Field<'a>),

    /// The "how to distinguish" heading; carries no content.
    DistinguishHeading,

    /// Anything else. May continue the core description.
    Text(&'a str),
}

impl Line<'_> {
    /// Check if line opens a new block (category or topic).
    pub fn is_header(&self) -> bool {
        matches!(self, Line::Category(_) | Line::Topic { .. })
    }
}

// =============================================================================
// FIELD
// =============================================================================

/// A field line with its prefix stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// Which topic field the line fills.
    pub kind: FieldKind,
    /// Trimmed text after the prefix.
    pub value: &'a str,
}

impl<'a> Field<'a> {
    /// Create a new field line.
    pub fn new(kind: FieldKind, value: &'a str) -> Self {
        Self { kind, value }
    }
}

/// Topic fields that have a literal line prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Scenario,
    /// Core concept; split into label and description.
    Core,
    CheckYes,
    CheckNo,
    Tip,
}

impl FieldKind {
    /// All field kinds in the order their prefixes are tested.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Scenario,
        FieldKind::Core,
        FieldKind::CheckYes,
        FieldKind::CheckNo,
        FieldKind::Tip,
    ];
}
