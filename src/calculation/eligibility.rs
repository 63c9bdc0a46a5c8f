//! Work year and leave eligibility.
//!
//! An employee's work year runs from one hire anniversary to the day before
//! the next. Leave can only be taken once the employee has served the
//! eligibility period (six months by default) and only inside the work year
//! the entitlement was computed for.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkYear;

/// The default number of months an employee must serve before taking leave.
pub const DEFAULT_ELIGIBILITY_MONTHS: u32 = 6;

fn add_months(date: NaiveDate, months: u32) -> EngineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| EngineError::IneligibleDate {
            date,
            reason: format!("cannot add {} months without leaving the calendar", months),
        })
}

/// Returns the first date an employee hired on `hire_date` may take leave.
///
/// Month arithmetic clamps to the end of shorter months, so a hire on
/// 31 August becomes eligible on the last day of February.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::eligibility_date;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
/// assert_eq!(
///     eligibility_date(hired, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
/// );
/// ```
pub fn eligibility_date(hire_date: NaiveDate, eligibility_months: u32) -> EngineResult<NaiveDate> {
    add_months(hire_date, eligibility_months)
}

/// Returns the work year containing `date` for an employee hired on `hire_date`.
///
/// # Returns
///
/// The [`WorkYear`] whose start is the latest hire anniversary on or before
/// `date`, or [`EngineError::IneligibleDate`] if `date` precedes the hire date.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::work_year_containing;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2021, 9, 15).unwrap();
/// let year = work_year_containing(hired, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()).unwrap();
///
/// assert_eq!(year.start, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
/// assert_eq!(year.end, NaiveDate::from_ymd_opt(2026, 9, 14).unwrap());
/// ```
pub fn work_year_containing(hire_date: NaiveDate, date: NaiveDate) -> EngineResult<WorkYear> {
    if date < hire_date {
        return Err(EngineError::IneligibleDate {
            date,
            reason: format!("before hire date {}", hire_date),
        });
    }

    let mut years = (date.year() - hire_date.year()) as u32;
    let mut start = add_months(hire_date, years * 12)?;
    if start > date {
        years -= 1;
        start = add_months(hire_date, years * 12)?;
    }

    let next_start = add_months(hire_date, (years + 1) * 12)?;
    let end = next_start.pred_opt().unwrap_or(next_start);

    Ok(WorkYear { start, end })
}

/// The range of dates an employee may select for leave in one work year.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::EligibilityWindow;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let window = EligibilityWindow::for_date(hired, 6, hired).unwrap();
///
/// assert!(window.check(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap()).is_err());
/// assert!(window.check(NaiveDate::from_ymd_opt(2026, 7, 6).unwrap()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityWindow {
    /// The first date leave may be taken at all.
    pub eligible_from: NaiveDate,
    /// The work year leave is being planned in.
    pub work_year: WorkYear,
}

impl EligibilityWindow {
    /// Builds the window for the work year containing `reference_date`.
    pub fn for_date(
        hire_date: NaiveDate,
        eligibility_months: u32,
        reference_date: NaiveDate,
    ) -> EngineResult<Self> {
        Ok(Self {
            eligible_from: eligibility_date(hire_date, eligibility_months)?,
            work_year: work_year_containing(hire_date, reference_date)?,
        })
    }

    /// Returns true if `date` can be selected.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.eligible_from && self.work_year.contains(date)
    }

    /// Validates that `date` can be selected.
    ///
    /// Weekends and holidays are still selectable; they simply count zero days.
    pub fn check(&self, date: NaiveDate) -> EngineResult<()> {
        if date < self.eligible_from {
            return Err(EngineError::IneligibleDate {
                date,
                reason: format!("before eligibility date {}", self.eligible_from),
            });
        }

        if !self.work_year.contains(date) {
            return Err(EngineError::IneligibleDate {
                date,
                reason: format!(
                    "outside work year {} to {}",
                    self.work_year.start, self.work_year.end
                ),
            });
        }

        Ok(())
    }
}
