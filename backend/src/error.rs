//! Error types for calendar operations.
//!
//! Business-rule rejections (past dates, inverted or too-short ranges) are not
//! errors; they are reported as [`ValidationOutcome`](crate::services::validation::ValidationOutcome)
//! values. The variants here cover malformed input that should never come out
//! of the rendering layer's constrained controls, plus configuration problems.

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error type for calendar operations
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A time-of-day string did not match `HH:MM` (24-hour).
    #[error("Invalid time of day: '{0}' (expected HH:MM)")]
    InvalidTimeOfDay(String),

    /// A date key was not a zero-padded, real `YYYY-MM-DD` date.
    #[error("Invalid date key: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateKey(String),

    /// An availability field name other than `start` or `end`.
    #[error("Invalid availability field: '{0}' (expected 'start' or 'end')")]
    InvalidField(String),

    /// A navigation direction other than `prev` or `next`.
    #[error("Invalid navigation direction: '{0}' (expected 'prev' or 'next')")]
    InvalidDirection(String),

    /// A month outside `0..=11` or a year outside `0..=9999`.
    #[error("Invalid month: year={year}, month={month} (month is 0-based, 0..=11)")]
    InvalidMonth { year: i32, month: u32 },

    /// Configuration file or environment could not be read or was out of range.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The calendar view could not be serialized for the rendering layer.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
