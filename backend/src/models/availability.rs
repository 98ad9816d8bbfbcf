use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::date::CalendarDate;
use super::time::TimeOfDay;
use crate::error::CalendarError;

/// Which side of an availability window is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Start,
    End,
}

impl FromStr for Field {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Field::Start),
            "end" => Ok(Field::End),
            other => Err(CalendarError::InvalidField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Start => write!(f, "start"),
            Field::End => write!(f, "end"),
        }
    }
}

/// Start/end time declared for one date. Either side may be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<TimeOfDay>,
}

impl AvailabilityEntry {
    pub fn new(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Self {
        Self { start, end }
    }

    pub fn get(&self, field: Field) -> Option<TimeOfDay> {
        match field {
            Field::Start => self.start,
            Field::End => self.end,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<TimeOfDay>) {
        match field {
            Field::Start => self.start = value,
            Field::End => self.end = value,
        }
    }

    /// Both sides present.
    pub fn window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        self.start.zip(self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Sparse date → entry map, ordered by date so a month is a contiguous range.
pub type AvailabilityMap = BTreeMap<CalendarDate, AvailabilityEntry>;
