//! Leave split and leave request models.
//!
//! This module contains the [`LeaveSplit`] ranges an employee composes, the
//! [`WorkYear`] they are scoped to, and the submitted [`LeaveRequest`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One contiguous leave period within a work year.
///
/// A freshly added split has no dates and zero days until the employee picks
/// a range for it.
///
/// # Example
///
/// ```
/// use vacation_engine::models::LeaveSplit;
/// use chrono::NaiveDate;
///
/// let first = LeaveSplit::with_range(
///     NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 7, 17).unwrap(),
///     10,
/// );
/// let second = LeaveSplit::with_range(
///     NaiveDate::from_ymd_opt(2026, 7, 17).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
///     2,
/// );
/// assert!(first.overlaps(&second)); // both include 2026-07-17
/// assert!(!LeaveSplit::default().is_set());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSplit {
    /// First day of leave (inclusive).
    pub start: Option<NaiveDate>,
    /// Last day of leave (inclusive).
    pub end: Option<NaiveDate>,
    /// Working days of leave within the range.
    pub days: u32,
}

impl LeaveSplit {
    /// Creates a split covering `start..=end`.
    pub fn with_range(start: NaiveDate, end: NaiveDate, days: u32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            days,
        }
    }

    /// Returns true if both dates have been chosen.
    pub fn is_set(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns the chosen range, if both dates are set.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    /// Returns true if this split shares at least one calendar day with `other`.
    ///
    /// Splits without dates never overlap anything.
    pub fn overlaps(&self, other: &LeaveSplit) -> bool {
        match (self.range(), other.range()) {
            (Some((start, end)), Some((other_start, other_end))) => {
                start <= other_end && other_start <= end
            }
            _ => false,
        }
    }
}

/// An employee's personal annual cycle, anchored to the hire anniversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkYear {
    /// First day of the work year (inclusive).
    pub start: NaiveDate,
    /// Last day of the work year (inclusive).
    pub end: NaiveDate,
}

impl WorkYear {
    /// Checks if a given date falls within this work year (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The review status of a submitted leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveRequestStatus {
    /// Submitted and awaiting an approver decision.
    Pending,
    /// Approved by an approver. Terminal.
    Approved,
    /// Rejected by an approver; the employee may re-edit and resubmit.
    Rejected,
}

impl LeaveRequestStatus {
    /// Returns true once an approver has decided the request.
    pub fn is_decided(self) -> bool {
        !matches!(self, LeaveRequestStatus::Pending)
    }
}

impl std::fmt::Display for LeaveRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveRequestStatus::Pending => write!(f, "pending"),
            LeaveRequestStatus::Approved => write!(f, "approved"),
            LeaveRequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A fully reconciled leave split set submitted for approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The employee the request belongs to.
    pub employee_id: String,
    /// The submitted leave splits, in the order the employee composed them.
    pub splits: Vec<LeaveSplit>,
    /// Total leave days across all splits (equals the entitlement).
    pub total_days: u32,
    /// Current review status.
    pub status: LeaveRequestStatus,
    /// The approver who decided the request, once decided.
    pub approver_id: Option<String>,
    /// The work year the leave is taken from.
    pub work_year: WorkYear,
    /// The first date the employee may take leave.
    pub eligible_from: NaiveDate,
    /// When the request was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When the request was decided.
    pub decided_at: Option<DateTime<Utc>>,
    /// Reason given with a rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_adjacent_splits_do_not_overlap() {
        let first = LeaveSplit::with_range(date(2026, 7, 6), date(2026, 7, 10), 5);
        let second = LeaveSplit::with_range(date(2026, 7, 11), date(2026, 7, 15), 3);
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn test_contained_split_overlaps() {
        let outer = LeaveSplit::with_range(date(2026, 7, 1), date(2026, 7, 31), 23);
        let inner = LeaveSplit::with_range(date(2026, 7, 10), date(2026, 7, 12), 1);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_unset_split_never_overlaps() {
        let set = LeaveSplit::with_range(date(2026, 7, 1), date(2026, 7, 31), 23);
        let unset = LeaveSplit::default();
        assert!(!set.overlaps(&unset));
        assert!(!unset.overlaps(&set));
    }

    #[test]
    fn test_work_year_contains_boundaries() {
        let year = WorkYear {
            start: date(2025, 9, 15),
            end: date(2026, 9, 14),
        };
        assert!(year.contains(date(2025, 9, 15)));
        assert!(year.contains(date(2026, 9, 14)));
        assert!(!year.contains(date(2025, 9, 14)));
        assert!(!year.contains(date(2026, 9, 15)));
    }

    #[test]
    fn test_status_serialization_and_display() {
        assert_eq!(
            serde_json::to_string(&LeaveRequestStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(LeaveRequestStatus::Rejected.to_string(), "rejected");
        assert!(!LeaveRequestStatus::Pending.is_decided());
        assert!(LeaveRequestStatus::Approved.is_decided());
    }
}
