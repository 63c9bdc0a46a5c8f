//! Working day detection and counting.
//!
//! A working day is any Monday through Friday that is not a holiday. Leave
//! days are only charged for working days.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::HolidaySpec;

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if `date` matches any of the given holidays.
pub fn is_holiday(date: NaiveDate, holidays: &[HolidaySpec]) -> bool {
    holidays.iter().any(|h| h.matches(date))
}

/// Returns true if `date` is neither a weekend nor a holiday.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::is_working_day;
/// use vacation_engine::models::HolidaySpec;
/// use chrono::NaiveDate;
///
/// let holidays = [HolidaySpec::Recurring { month: 9, day: 2 }];
///
/// // 2026-09-01 is a Tuesday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(), &holidays));
/// // 2026-09-02 is a Wednesday, but a holiday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(), &holidays));
/// // 2026-09-05 is a Saturday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(), &holidays));
/// ```
pub fn is_working_day(date: NaiveDate, holidays: &[HolidaySpec]) -> bool {
    !is_weekend(date) && !is_holiday(date, holidays)
}

/// Counts working days between two dates, inclusive of both endpoints.
///
/// # Arguments
///
/// * `start` - The first day of the range
/// * `end` - The last day of the range
/// * `holidays` - Holidays excluded from the count
///
/// # Returns
///
/// The number of working days in `start..=end`, or
/// [`EngineError::InvalidRange`] if `end` is before `start`.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::count_working_days;
/// use chrono::NaiveDate;
///
/// // Monday 2026-07-06 through Sunday 2026-07-19: two full weeks
/// let days = count_working_days(
///     NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 7, 19).unwrap(),
///     &[],
/// )
/// .unwrap();
/// assert_eq!(days, 10);
/// ```
pub fn count_working_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &[HolidaySpec],
) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::InvalidRange { start, end });
    }

    let count = start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_working_day(*d, holidays))
        .count();

    Ok(count as u32)
}
