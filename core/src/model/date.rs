use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ActivityError;

/// A local calendar date with no time-of-day or timezone component.
///
/// Months are 0-based (0 = January) to match the grid builder's API.
/// The derived `Ord` is lexicographic by (year, month, day) thanks to
/// the field order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Parses a `YYYY-MM-DD` store key. Calendar validity (month range,
    /// day-of-month, leap years) comes from chrono; the formatted
    /// round-trip check rejects lenient spellings like `2025-9-1`.
    pub fn parse_key(key: &str) -> Result<Self, ActivityError> {
        let date = NaiveDate::parse_from_str(key, "%Y-%m-%d")
            .map_err(|_| ActivityError::MalformedDate(key.to_string()))?;
        if date.format("%Y-%m-%d").to_string() != key {
            return Err(ActivityError::MalformedDate(key.to_string()));
        }
        Ok(Self::from_naive(date))
    }

    /// Validated construction from a 0-based month.
    pub fn from_ymd0(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, day).map(Self::from_naive)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    pub fn to_naive(self) -> NaiveDate {
        // Dates are constructed through parse_key/from_ymd0 or with a
        // day-1 literal, so the triple is always calendar-valid.
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day).unwrap()
    }

    /// The store key spelling of this date.
    pub fn key(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }

    /// Weekday in Monday-first numbering (Monday=1 .. Sunday=7),
    /// computed from chrono's proleptic Gregorian calendar.
    pub fn weekday_monday_first(self) -> u32 {
        self.to_naive().weekday().number_from_monday()
    }
}

/// Gregorian day count of the given (year, 0-based month). `None`
/// when the year is outside chrono's representable range, so a wild
/// year surfaces as an error instead of a panic.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    // The largest constructible day is the month length. Probing down
    // from 31 also keeps December of the maximum year representable,
    // which first-of-next-month arithmetic would not.
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month + 1, day).is_some())
}
