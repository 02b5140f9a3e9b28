//! # Load Errors
//!
//! Error types for loading the knowledge base.
//!
//! Only a missing source is an error. Malformed lines and orphan topics are
//! absorbed by the parser and never surface here.
//!
//! ## Example
//!
//! ```rust
//! use culture_parser::{load_culture_content, LoadError};
//!
//! assert_eq!(load_culture_content(None).unwrap_err(), LoadError::MissingInput);
//! ```

use thiserror::Error;

/// Failure to obtain the knowledge-base text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The page global is absent or not a string.
    #[error("culture data not found")]
    MissingInput,
}
