//! # Incident Report
//!
//! Logic behind the report page: the five-star severity scale, the form's
//! rating and confirmation state, and the static heatmap data with its
//! summary statistics. Nothing is submitted anywhere; the page only shows a
//! confirmation.
//!
//! ## Example
//!
//! ```rust
//! use incident_report::{validate_submission, HeatmapStats, SAMPLE_INCIDENTS};
//!
//! assert!(validate_submission("0").is_err());
//! let stats = HeatmapStats::from_incidents(&SAMPLE_INCIDENTS);
//! assert_eq!(stats.total, SAMPLE_INCIDENTS.len());
//! ```

pub mod error;
pub mod form;
pub mod heatmap;
pub mod severity;

pub use error::ReportError;
pub use form::{validate_submission, ReportForm, StarRating};
pub use heatmap::{HeatmapOptions, HeatmapStats, Incident, SAMPLE_INCIDENTS};
pub use severity::Severity;
