//! Star rating and report form state.
//!
//! Hovering previews a rating without committing it; clicking commits.
//! Submitting requires a committed rating.

use crate::error::ReportError;
use crate::severity::Severity;

/// Star widget state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarRating {
    committed: Option<Severity>,
    hovered: Option<Severity>,
}

impl StarRating {
    /// Preview a rating while the pointer is over a star.
    pub fn hover(self, severity: Severity) -> Self {
        Self {
            hovered: Some(severity),
            ..self
        }
    }

    /// Pointer left the stars: fall back to the committed rating.
    pub fn leave(self) -> Self {
        Self {
            hovered: None,
            ..self
        }
    }

    /// Commit a rating.
    pub fn click(self, severity: Severity) -> Self {
        Self {
            committed: Some(severity),
            hovered: Some(severity),
        }
    }

    pub fn committed(&self) -> Option<Severity> {
        self.committed
    }

    /// Number of highlighted stars.
    pub fn displayed(&self) -> u8 {
        self.hovered
            .or(self.committed)
            .map_or(0, Severity::stars)
    }

    /// Description to show, or `None` to hide it.
    pub fn description(&self) -> Option<&'static str> {
        self.hovered.or(self.committed).map(Severity::description)
    }
}

/// Check the hidden severity input before submitting.
///
/// Empty and `"0"` mean no star was clicked.
pub fn validate_submission(raw: &str) -> Result<Severity, ReportError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ReportError::MissingSeverity);
    }
    raw.parse::<u8>()
        .map_err(|_| ReportError::InvalidSeverity(raw.to_string()))
        .and_then(Severity::try_from)
}

/// Report page state: the rating plus the confirmation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub rating: StarRating,
    pub confirmation_visible: bool,
}

impl ReportForm {
    /// Submit the form.
    ///
    /// On success the confirmation is shown and the rating reset. On error
    /// the form is unchanged and the caller alerts the message.
    pub fn submit(self) -> Result<(Self, Severity), ReportError> {
        let severity = self.rating.committed().ok_or(ReportError::MissingSeverity)?;
        tracing::debug!(%severity, "report submitted");
        let next = Self {
            rating: StarRating::default(),
            confirmation_visible: true,
        };
        Ok((next, severity))
    }

    /// Close the confirmation overlay.
    pub fn dismiss(self) -> Self {
        Self {
            confirmation_visible: false,
            ..self
        }
    }
}
