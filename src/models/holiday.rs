//! Holiday models.
//!
//! This module contains the [`HolidaySpec`] used by working-day counting and
//! the named [`Holiday`] entries a holiday calendar is configured with.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A rule identifying a non-working day.
///
/// # Example
///
/// ```
/// use vacation_engine::models::HolidaySpec;
/// use chrono::NaiveDate;
///
/// let new_year = HolidaySpec::Recurring { month: 1, day: 1 };
/// assert!(new_year.matches(NaiveDate::from_ymd_opt(2031, 1, 1).unwrap()));
///
/// let one_off = HolidaySpec::Fixed {
///     date: NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
/// };
/// assert!(!one_off.matches(NaiveDate::from_ymd_opt(2027, 2, 16).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolidaySpec {
    /// A holiday on one specific calendar date.
    Fixed {
        /// The holiday date.
        date: NaiveDate,
    },
    /// A holiday on the same month and day every year.
    Recurring {
        /// The month (1-12).
        month: u32,
        /// The day of the month.
        day: u32,
    },
}

impl HolidaySpec {
    /// Returns true if `date` falls on this holiday.
    ///
    /// Recurring holidays are evaluated against the date's own year.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            HolidaySpec::Fixed { date: holiday } => holiday == date,
            HolidaySpec::Recurring { month, day } => date.month() == month && date.day() == day,
        }
    }
}

/// A named holiday from the configured calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Display name of the holiday (e.g., "Labour Day").
    pub name: String,
    /// The rule identifying the holiday's date.
    #[serde(flatten)]
    pub spec: HolidaySpec,
}
