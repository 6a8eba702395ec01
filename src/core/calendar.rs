//! Calendar dates for history stamps
//!
//! History entries carry a user-local calendar date rendered as text.
//! The text form is what gets exported, so it round-trips unchanged
//! whatever format produced it.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rendered calendar date attached to a validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateStamp(String);

impl DateStamp {
    /// Render a specific date with a chrono format string
    pub fn from_date(date: NaiveDate, format: &str) -> Self {
        Self(date.format(format).to_string())
    }

    /// Today's date in the local timezone
    pub fn today(format: &str) -> Self {
        Self::from_date(Local::now().date_naive(), format)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse back into a date, if it was written with `format`
    pub fn to_date(&self, format: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, format).ok()
    }
}

impl From<&str> for DateStamp {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
