//! Owned availability state and its mutation rules.
//!
//! [`AvailabilityStore`] is the only writer of the availability map. Each
//! mutation either stores a valid state or repairs the violating field before
//! returning, so the map never holds an inverted or too-short window.

use crate::config::AvailabilitySettings;
use crate::models::{
    AvailabilityEntry, AvailabilityMap, CalendarDate, CalendarMonth, Field, TimeOfDay,
};
use crate::ports::{Clock, SystemClock};
use crate::services::validation::{check_window, ValidationOutcome, WindowViolation};

/// Sparse date → start/end store with past-date and window validation.
///
/// # Examples
///
/// ```
/// use availability_calendar::models::{CalendarDate, Field};
/// use availability_calendar::ports::FixedClock;
/// use availability_calendar::services::availability::AvailabilityStore;
///
/// let today: CalendarDate = "2026-10-16".parse().unwrap();
/// let mut store = AvailabilityStore::new(FixedClock(today));
///
/// let date: CalendarDate = "2026-10-17".parse().unwrap();
/// let outcome = store.set_field(date, Field::Start, Some("09:00".parse().unwrap()));
/// assert!(outcome.is_accepted());
///
/// let outcome = store.set_field(date, Field::End, Some("09:10".parse().unwrap()));
/// assert!(outcome.is_rejection());
/// assert_eq!(store.get(&date).unwrap().end, None);
/// ```
#[derive(Debug, Clone)]
pub struct AvailabilityStore<C: Clock = SystemClock> {
    entries: AvailabilityMap,
    clock: C,
    settings: AvailabilitySettings,
}

impl<C: Clock> AvailabilityStore<C> {
    /// Empty store with default rules (15 minute minimum, empty entries kept).
    pub fn new(clock: C) -> Self {
        Self::with_settings(clock, AvailabilitySettings::default())
    }

    pub fn with_settings(clock: C, settings: AvailabilitySettings) -> Self {
        Self {
            entries: AvailabilityMap::new(),
            clock,
            settings,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn settings(&self) -> &AvailabilitySettings {
        &self.settings
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    pub fn get(&self, date: &CalendarDate) -> Option<&AvailabilityEntry> {
        self.entries.get(date)
    }

    /// Read-only view of every stored entry.
    pub fn entries(&self) -> &AvailabilityMap {
        &self.entries
    }

    /// Entries whose date falls within `month`, in date order.
    pub fn entries_in_month(
        &self,
        month: CalendarMonth,
    ) -> impl Iterator<Item = (&CalendarDate, &AvailabilityEntry)> {
        self.entries
            .range(month.first_day()..)
            .take_while(move |(date, _)| month.contains(date))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set one side of `date`'s window, creating the entry if needed.
    ///
    /// Rules, in order:
    /// 1. Setting a value on a date before today reverts the field and
    ///    returns [`ValidationOutcome::PastDateRejected`]; nothing else is checked.
    /// 2. If both sides are now present and end is not after start, end is
    ///    cleared and [`ValidationOutcome::EndBeforeStart`] is returned.
    /// 3. If end is after start by less than the minimum duration, end is
    ///    cleared and [`ValidationOutcome::TooShort`] is returned.
    ///
    /// Anything else, including clearing a field, is accepted.
    pub fn set_field(
        &mut self,
        date: CalendarDate,
        field: Field,
        value: Option<TimeOfDay>,
    ) -> ValidationOutcome {
        let today = self.clock.today();
        let min_duration_minutes = self.settings.min_duration_minutes;

        let entry = self.entries.entry(date).or_default();
        entry.set(field, value);

        let outcome = if date < today && value.is_some() {
            entry.set(field, None);
            ValidationOutcome::PastDateRejected { date }
        } else if let Some((start, end)) = entry.window() {
            match check_window(start, end, min_duration_minutes) {
                Ok(()) => ValidationOutcome::Accepted { date },
                Err(WindowViolation::EndNotAfterStart) => {
                    entry.end = None;
                    ValidationOutcome::EndBeforeStart { date, start, end }
                }
                Err(WindowViolation::TooShort) => {
                    entry.end = None;
                    ValidationOutcome::TooShort {
                        date,
                        min_duration_minutes,
                    }
                }
            }
        } else {
            ValidationOutcome::Accepted { date }
        };

        if self.settings.prune_empty_entries && entry.is_empty() {
            self.entries.remove(&date);
        }

        log::debug!("set {} {} -> {}", date, field, outcome.kind());
        outcome
    }

    /// Remove `date`'s entry. Returns whether one existed.
    pub fn clear_date(&mut self, date: &CalendarDate) -> bool {
        self.entries.remove(date).is_some()
    }

    /// Remove every entry in `month`, leaving other months untouched.
    /// Returns how many entries were removed.
    pub fn clear_month(&mut self, month: CalendarMonth) -> usize {
        let before = self.entries.len();
        self.entries.retain(|date, _| !month.contains(date));
        let cleared = before - self.entries.len();
        log::debug!("cleared {} entries for {}", cleared, month);
        cleared
    }
}
