//! # Config Crate
//!
//! Centralized configuration constants for the Heming site crates.
//! Every marker glyph, field prefix, pacing delay, and collaborator default
//! lives here so the parser, chat script, and report crates never scatter
//! literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MarkerConfig, CATEGORY_MARKER, TOPIC_MARKER};
//!
//! let markers = MarkerConfig::default();
//! assert_eq!(markers.category_marker, CATEGORY_MARKER);
//! assert!("#01 标题".starts_with(TOPIC_MARKER));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Content Compatible**: Markers match the knowledge-base text format

pub mod constants;
