//! Report form errors.

use thiserror::Error;

/// Why a report cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// No star was clicked.
    #[error("请选择严重程度等级")]
    MissingSeverity,
    /// The rating is not a whole number from 1 to 5.
    #[error("invalid severity rating: {0:?}")]
    InvalidSeverity(String),
}
