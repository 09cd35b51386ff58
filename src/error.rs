//! Error types for the himekuri core.

use chrono::NaiveDate;

/// Failure to render a date through the Japanese era calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The date precedes the earliest era in the table. Rendering it
    /// would misattribute an era, so it is rejected instead.
    #[error("date {date} precedes the era table (Meiji epoch 1868-01-25)")]
    BeforeEraTable {
        /// The unsupported date.
        date: NaiveDate,
    },

    /// A stored date string did not parse as a calendar date.
    #[error("invalid calendar date {input:?} (expected %Y-%m-%d)")]
    InvalidDate {
        /// The raw input that failed to parse.
        input: String,
    },
}

/// Interval computation received an end date before its start date.
///
/// Intervals are decomposed into non-negative years/months/days, which
/// only makes sense for `start <= end`; reversed ranges are rejected
/// rather than given a signed meaning.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("interval end {end} precedes start {start}")]
pub struct InvalidRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Failure to build a display row from a stored special day.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Range(#[from] InvalidRangeError),
}

/// Failure surfaced by a content source at the fetch boundary.
///
/// The pure core never produces these; they belong to the external
/// content API contract (pending / failed / ready).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("content not found: {key}")]
    NotFound { key: String },

    #[error("content source unavailable: {reason}")]
    Unavailable { reason: String },
}
