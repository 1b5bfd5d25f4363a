//! Date type for time-based metrics.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MetricError, MetricResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` that parses and
/// prints ISO 8601 (`YYYY-MM-DD`) and reports failures as [`MetricError`].
///
/// # Example
///
/// ```rust
/// use bizmetrics_core::types::Date;
///
/// let start = Date::parse("2022-01-01").unwrap();
/// let launch = Date::from_ymd(2022, 1, 30).unwrap();
/// assert_eq!(start.days_between(&launch), 29);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `MetricError::InvalidInput` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> MetricResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                MetricError::invalid_input("date", format!("{year}-{month:02}-{day:02} does not exist"))
            })
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `MetricError::InvalidInput` if the string is not a valid date.
    pub fn parse(s: &str) -> MetricResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| {
                MetricError::invalid_input("date", format!("cannot parse '{s}', expected YYYY-MM-DD"))
            })
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `MetricError::InvalidInput` if the result falls outside the
    /// supported calendar range.
    pub fn add_days(&self, days: i64) -> MetricResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|offset| self.0.checked_add_signed(offset))
            .map(Date)
            .ok_or_else(|| {
                MetricError::invalid_input("date", format!("{self} plus {days} days is out of range"))
            })
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// Negative when `other` is earlier.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
