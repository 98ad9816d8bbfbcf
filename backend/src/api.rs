//! Data Transfer Objects handed to the rendering layer.
//!
//! A [`CalendarGrid`] is rebuilt wholesale after every state change and is
//! never patched in place. Field names serialize in camelCase (`weekId`,
//! `monthYearLabel`, `dayHeaders`) and empty times are omitted.

use serde::{Deserialize, Serialize};

use crate::error::CalendarResult;
use crate::models::{AvailabilityEntry, CalendarDate, TimeOfDay};

/// One cell of the week grid.
///
/// `day: None` marks a padding cell belonging to the previous or next month;
/// padding cells carry no date and are not interactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<TimeOfDay>,
}

impl DayCell {
    pub fn padding() -> Self {
        Self::default()
    }

    /// A cell for `date`, populated from its entry if one exists.
    pub fn for_date(date: CalendarDate, entry: Option<&AvailabilityEntry>) -> Self {
        let entry = entry.copied().unwrap_or_default();
        Self {
            day: Some(date.day()),
            date: Some(date),
            start: entry.start,
            end: entry.end,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day.is_none()
    }
}

/// Seven consecutive cells, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRow {
    /// 0-based, sequential within the grid.
    pub week_id: usize,
    pub days: Vec<DayCell>,
}

/// Full month grid: whole weeks only, padded at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub weeks: Vec<WeekRow>,
}

impl CalendarGrid {
    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// Every cell, padding included, in display order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Only the cells that belong to the month.
    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells().filter(|cell| !cell.is_padding())
    }

    pub fn cell(&self, date: &CalendarDate) -> Option<&DayCell> {
        self.day_cells().find(|cell| cell.date.as_ref() == Some(date))
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

/// Everything the rendering layer needs to draw one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    /// Long month name and year, e.g. `October 2026`.
    pub month_year_label: String,
    pub day_headers: [&'static str; 7],
    pub weeks: Vec<WeekRow>,
}

impl CalendarView {
    pub fn to_json(&self) -> CalendarResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_cell_serializes_as_null_day() {
        let json = serde_json::to_string(&DayCell::padding()).unwrap();
        assert_eq!(json, r#"{"day":null}"#);
    }

    #[test]
    fn test_day_cell_from_entry() {
        let date: CalendarDate = "2026-10-20".parse().unwrap();
        let entry = AvailabilityEntry::new(Some("09:00".parse().unwrap()), None);
        let cell = DayCell::for_date(date, Some(&entry));

        assert_eq!(cell.day, Some(20));
        assert!(!cell.is_padding());
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"day":20,"date":"2026-10-20","start":"09:00"}"#);
    }

    #[test]
    fn test_day_cell_without_entry_is_blank() {
        let date: CalendarDate = "2026-10-21".parse().unwrap();
        let cell = DayCell::for_date(date, None);
        assert_eq!(cell.start, None);
        assert_eq!(cell.end, None);
    }

    #[test]
    fn test_week_row_uses_camel_case() {
        let row = WeekRow {
            week_id: 3,
            days: vec![DayCell::padding(); 7],
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["weekId"], 3);
        assert_eq!(value["days"].as_array().unwrap().len(), 7);
    }
}
