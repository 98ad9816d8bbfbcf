//! Month navigation and edit handling on top of the store and grid builder.
//!
//! Every transition succeeds at this level: rejected edits are reported
//! through the notifier, and the grid is rebuilt after every state change.

use crate::api::{CalendarGrid, CalendarView};
use crate::config::CalendarConfig;
use crate::error::CalendarResult;
use crate::models::{CalendarDate, CalendarMonth, Direction, Field, TimeOfDay};
use crate::ports::{Clock, LogNotifier, Notification, Notifier, SystemClock};
use crate::services::availability::AvailabilityStore;
use crate::services::grid::{month_year_label, CalendarGridBuilder, DAY_HEADERS};
use crate::services::validation::ValidationOutcome;

/// Message sent after a successful month reset.
pub const RESET_MESSAGE: &str = "Availability reset for this month.";

/// Single-month availability calendar.
pub struct CalendarController<C: Clock = SystemClock, N: Notifier = LogNotifier> {
    store: AvailabilityStore<C>,
    notifier: N,
    month: CalendarMonth,
    grid: CalendarGrid,
}

impl CalendarController<SystemClock, LogNotifier> {
    /// Controller wired from configuration: system clock, log notifications.
    pub fn from_config(config: &CalendarConfig) -> CalendarResult<Self> {
        config.validate()?;
        let clock = SystemClock::from_settings(&config.clock)?;
        let store = AvailabilityStore::with_settings(clock, config.availability.clone());
        Ok(Self::new(store, LogNotifier))
    }
}

impl<C: Clock, N: Notifier> CalendarController<C, N> {
    /// Start on the month containing today.
    pub fn new(store: AvailabilityStore<C>, notifier: N) -> Self {
        let month = store.today().calendar_month();
        Self::starting_at(store, notifier, month)
    }

    /// Start on a specific month.
    pub fn starting_at(store: AvailabilityStore<C>, notifier: N, month: CalendarMonth) -> Self {
        let grid = CalendarGridBuilder::build(month, store.entries());
        Self {
            store,
            notifier,
            month,
            grid,
        }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    /// `(year, 0-based month)` currently displayed.
    pub fn current(&self) -> (i32, u32) {
        (self.month.year(), self.month.month())
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn store(&self) -> &AvailabilityStore<C> {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Grid plus labels for the rendering layer.
    pub fn view(&self) -> CalendarView {
        CalendarView {
            month_year_label: month_year_label(self.month),
            day_headers: DAY_HEADERS,
            weeks: self.grid.weeks.clone(),
        }
    }

    /// Move one month back or forward, rolling the year as needed.
    pub fn navigate(&mut self, direction: Direction) {
        match self.month.step(direction) {
            Some(month) => {
                log::info!("navigate {}: {} -> {}", direction, self.month, month);
                self.month = month;
            }
            None => log::warn!(
                "navigate {} from {} leaves the supported date range; staying put",
                direction,
                self.month
            ),
        }
        self.rebuild();
    }

    /// Apply a raw edit from the rendering layer.
    ///
    /// `value` is `HH:MM` or the empty string to clear the field. Malformed
    /// input is returned as an error without touching any state.
    pub fn edit_field(
        &mut self,
        date: &str,
        field: &str,
        value: &str,
    ) -> CalendarResult<ValidationOutcome> {
        let date: CalendarDate = date.parse()?;
        let field: Field = field.parse()?;
        let value = if value.is_empty() {
            None
        } else {
            Some(value.parse::<TimeOfDay>()?)
        };
        Ok(self.apply_edit(date, field, value))
    }

    /// Apply a typed edit, notify on rejection, and rebuild the grid.
    pub fn apply_edit(
        &mut self,
        date: CalendarDate,
        field: Field,
        value: Option<TimeOfDay>,
    ) -> ValidationOutcome {
        let outcome = self.store.set_field(date, field, value);
        if let Some(notification) = outcome.notification() {
            log::warn!("rejected {} edit on {}: {}", field, outcome.date(), outcome.kind());
            self.notifier.notify(notification);
        }
        self.rebuild();
        outcome
    }

    /// Clear every entry in the displayed month. Returns how many were removed.
    pub fn reset_month(&mut self) -> usize {
        let cleared = self.store.clear_month(self.month);
        log::info!("reset {}: {} entries cleared", self.month, cleared);
        self.rebuild();
        self.notifier.notify(Notification::success(RESET_MESSAGE));
        cleared
    }

    fn rebuild(&mut self) {
        self.grid = CalendarGridBuilder::build(self.month, self.store.entries());
        log::debug!("rebuilt grid for {} ({} weeks)", self.month, self.grid.weeks().len());
    }
}
