//! Availability validation outcomes and the window rule.
//!
//! Every outcome is recoverable: a rejection clears the offending field and
//! the user simply edits again. None of these are errors.

use serde::{Deserialize, Serialize};

use crate::models::{CalendarDate, TimeOfDay};
use crate::ports::Notification;

/// Result of one field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// No rule violated; the value was stored.
    Accepted { date: CalendarDate },
    /// A value was set on a date before today; the field was reverted.
    PastDateRejected { date: CalendarDate },
    /// End was at or before start; end was cleared.
    EndBeforeStart {
        date: CalendarDate,
        start: TimeOfDay,
        end: TimeOfDay,
    },
    /// End was after start but by less than the minimum; end was cleared.
    TooShort {
        date: CalendarDate,
        min_duration_minutes: u16,
    },
}

impl ValidationOutcome {
    pub fn date(&self) -> CalendarDate {
        match self {
            ValidationOutcome::Accepted { date }
            | ValidationOutcome::PastDateRejected { date }
            | ValidationOutcome::EndBeforeStart { date, .. }
            | ValidationOutcome::TooShort { date, .. } => *date,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted { .. })
    }

    pub fn is_rejection(&self) -> bool {
        !self.is_accepted()
    }

    /// Short machine-readable name of the outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationOutcome::Accepted { .. } => "accepted",
            ValidationOutcome::PastDateRejected { .. } => "past_date_rejected",
            ValidationOutcome::EndBeforeStart { .. } => "end_before_start",
            ValidationOutcome::TooShort { .. } => "too_short",
        }
    }

    /// Human-readable explanation of a rejection; `None` when accepted.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationOutcome::Accepted { .. } => None,
            ValidationOutcome::PastDateRejected { date } => Some(format!(
                "Cannot set availability in the past for {}.",
                date
            )),
            ValidationOutcome::EndBeforeStart { date, start, end } => Some(format!(
                "End time ({}) must be after start time ({}) for {}.",
                end, start, date
            )),
            ValidationOutcome::TooShort {
                date,
                min_duration_minutes,
            } => Some(format!(
                "Availability must be at least {} minutes for {}.",
                min_duration_minutes, date
            )),
        }
    }

    /// Error notification for a rejection; `None` when accepted.
    pub fn notification(&self) -> Option<Notification> {
        self.message().map(Notification::error)
    }
}

/// Why a complete start/end window is not acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowViolation {
    EndNotAfterStart,
    TooShort,
}

/// Check a complete window: end strictly after start, by at least `min_duration_minutes`.
pub fn check_window(
    start: TimeOfDay,
    end: TimeOfDay,
    min_duration_minutes: u16,
) -> Result<(), WindowViolation> {
    let span = start.minutes_until(end);
    if span <= 0 {
        Err(WindowViolation::EndNotAfterStart)
    } else if span < min_duration_minutes as i32 {
        Err(WindowViolation::TooShort)
    } else {
        Ok(())
    }
}
