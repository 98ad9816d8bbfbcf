//! Calendar dates, month cursors, and navigation direction.
//!
//! [`CalendarDate`] is the key of the availability map. Its textual form is the
//! zero-padded ISO `YYYY-MM-DD` string, and its ordering is chronological, so
//! comparing two dates is the same as comparing their keys lexicographically
//! for four-digit years.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, CalendarResult};

/// A single calendar day, keyed as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create from a 1-based month and day. Returns `None` for dates that do not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 0-based (January = 0).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The month this date belongs to.
    pub fn calendar_month(&self) -> CalendarMonth {
        CalendarMonth {
            first: self.0.with_day(1).unwrap_or(self.0),
        }
    }

    /// ISO key string (`YYYY-MM-DD`).
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parse a strict, zero-padded `YYYY-MM-DD` key naming a real date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidDateKey(s.to_string());

        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Earliest displayable year.
pub const MIN_YEAR: i32 = 0;
/// Latest displayable year.
pub const MAX_YEAR: i32 = 9999;

/// A `(year, month)` pair the calendar can display.
///
/// Months are 0-based (`0..=11`) to match the controller's navigation
/// arithmetic. Years are limited to [`MIN_YEAR`]`..=`[`MAX_YEAR`] so every
/// date in the month has a four-digit `YYYY-MM-DD` key that parses back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Create from a year and 0-based month.
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        if month > 11 || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(|first| Self { first })
            .ok_or(CalendarError::InvalidMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month, 0-based (January = 0).
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    /// The 1st of the month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate(self.first)
    }

    /// Weekday of the 1st, counted from Sunday (0 = Sun .. 6 = Sat).
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Number of days in the month, leap years included.
    ///
    /// Computed as the distance to the 1st of the following month, i.e. the
    /// day before it ("day 0 of next month").
    pub fn days_in_month(&self) -> u32 {
        match self.next() {
            Some(next) => (next.first - self.first).num_days() as u32,
            // Only December of MAX_YEAR lands here.
            None => 31,
        }
    }

    /// The given 1-based day of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<CalendarDate> {
        self.first.with_day(day).map(CalendarDate)
    }

    /// Iterate over every date of the month in order.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        (1..=self.days_in_month()).filter_map(move |day| self.date(day))
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.year() == self.year() && date.month0() == self.month()
    }

    /// The following month, rolling December over into January of the next year.
    pub fn next(&self) -> Option<Self> {
        let (year, month) = if self.month() == 11 {
            (self.year().checked_add(1)?, 0)
        } else {
            (self.year(), self.month() + 1)
        };
        Self::new(year, month).ok()
    }

    /// The preceding month, rolling January back into December of the previous year.
    pub fn prev(&self) -> Option<Self> {
        let (year, month) = if self.month() == 0 {
            (self.year().checked_sub(1)?, 11)
        } else {
            (self.year(), self.month() - 1)
        };
        Self::new(year, month).ok()
    }

    pub fn step(&self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Prev => self.prev(),
            Direction::Next => self.next(),
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

/// Month navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

impl FromStr for Direction {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Direction::Prev),
            "next" => Ok(Direction::Next),
            other => Err(CalendarError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prev => write!(f, "prev"),
            Direction::Next => write!(f, "next"),
        }
    }
}
