//! Month grid derivation.
//!
//! The grid is a pure function of `(month, availability)`: it is recomputed
//! from scratch after every mutation instead of being patched, so its shape
//! invariants hold by construction.

use crate::api::{CalendarGrid, CalendarView, DayCell, WeekRow};
use crate::models::{AvailabilityMap, CalendarMonth};

/// Column headers, Sunday first, matching the grid's column order.
pub const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Builds padded week grids for a month.
///
/// # Examples
///
/// ```
/// use availability_calendar::models::{AvailabilityMap, CalendarMonth};
/// use availability_calendar::services::grid::CalendarGridBuilder;
///
/// let feb = CalendarMonth::new(2024, 1).unwrap();
/// let grid = CalendarGridBuilder::build(feb, &AvailabilityMap::new());
/// assert_eq!(grid.day_cells().count(), 29);
/// assert_eq!(grid.cells().count() % 7, 0);
/// ```
pub struct CalendarGridBuilder;

impl CalendarGridBuilder {
    /// Lay out `month` as whole weeks.
    ///
    /// Emits one padding cell per weekday before the 1st, one cell per day
    /// populated from `availability` (missing dates render blank), then
    /// trailing padding up to `ceil((first_weekday + days) / 7) * 7` cells.
    /// Rows are numbered 0, 1, 2, ... in order.
    pub fn build(month: CalendarMonth, availability: &AvailabilityMap) -> CalendarGrid {
        let leading = month.first_weekday() as usize;
        let days_in_month = month.days_in_month() as usize;
        let total_slots = (leading + days_in_month).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

        let mut cells = Vec::with_capacity(total_slots);
        cells.extend(std::iter::repeat_with(DayCell::padding).take(leading));
        cells.extend(
            month
                .dates()
                .map(|date| DayCell::for_date(date, availability.get(&date))),
        );
        cells.resize_with(total_slots, DayCell::padding);

        let weeks = cells
            .chunks(DAYS_PER_WEEK)
            .enumerate()
            .map(|(week_id, days)| WeekRow {
                week_id,
                days: days.to_vec(),
            })
            .collect();

        CalendarGrid { weeks }
    }

    /// Grid plus labels for the rendering layer.
    pub fn view(month: CalendarMonth, availability: &AvailabilityMap) -> CalendarView {
        CalendarView {
            month_year_label: month_year_label(month),
            day_headers: DAY_HEADERS,
            weeks: Self::build(month, availability).weeks,
        }
    }
}

/// Long month name followed by the year, e.g. `February 2024`.
pub fn month_year_label(month: CalendarMonth) -> String {
    month.first_day().naive().format("%B %Y").to_string()
}
