//! External collaborator interfaces.
//!
//! The calendar core reads "today" from a [`Clock`] and reports outcomes
//! through a [`Notifier`]. Both are injected so the core performs no I/O of
//! its own and tests can pin the date.

use chrono::{FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ClockSettings;
use crate::error::{CalendarError, CalendarResult};
use crate::models::CalendarDate;

/// Source of the current date, at day precision.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Wall-clock date in either a fixed UTC offset or the host's local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    /// Use the host's local time zone.
    pub fn local() -> Self {
        Self { offset: None }
    }

    /// Use a fixed offset from UTC.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    pub fn from_settings(settings: &ClockSettings) -> CalendarResult<Self> {
        match settings.utc_offset_minutes {
            None => Ok(Self::local()),
            Some(minutes) => FixedOffset::east_opt(minutes * 60)
                .map(Self::with_offset)
                .ok_or_else(|| {
                    CalendarError::Configuration(format!(
                        "utc_offset_minutes out of range: {}",
                        minutes
                    ))
                }),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let date = match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        };
        CalendarDate::from_naive(date)
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Success,
}

/// A user-facing message; delivery is fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.into(),
            severity: Severity::Success,
        }
    }
}

/// Surfaces notifications to a human.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Forwards notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Error => log::warn!("{}: {}", notification.title, notification.message),
            Severity::Success => log::info!("{}: {}", notification.title, notification.message),
        }
    }
}

/// Keeps every notification in memory, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date: CalendarDate = "2030-01-01".parse().unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_from_settings() {
        let local = SystemClock::from_settings(&ClockSettings::default()).unwrap();
        assert!(local.offset.is_none());

        let sydney = SystemClock::from_settings(&ClockSettings {
            utc_offset_minutes: Some(600),
        })
        .unwrap();
        assert_eq!(sydney.offset, FixedOffset::east_opt(36_000));

        let bad = SystemClock::from_settings(&ClockSettings {
            utc_offset_minutes: Some(24 * 60),
        });
        assert!(matches!(bad, Err(CalendarError::Configuration(_))));
    }

    #[test]
    fn test_system_clock_offsets_disagree_by_at_most_one_day() {
        let east = SystemClock::with_offset(FixedOffset::east_opt(14 * 3600).unwrap()).today();
        let west = SystemClock::with_offset(FixedOffset::west_opt(12 * 3600).unwrap()).today();
        let gap = (east.naive() - west.naive()).num_days();
        assert!((0..=2).contains(&gap));
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let mut notifier = RecordingNotifier::new();
        notifier.notify(Notification::error("first"));
        notifier.notify(Notification::success("second"));

        assert_eq!(notifier.notifications.len(), 2);
        assert_eq!(notifier.notifications[0].severity, Severity::Error);
        assert_eq!(notifier.last().unwrap().title, "Success");
    }
}
