//! Composing a leave split set.
//!
//! A [`LeavePlan`] is the in-progress split set an employee edits before
//! submitting it for approval. Every mutation validates first and only then
//! writes, so a rejected edit leaves the plan exactly as it was.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{EligibilityWindow, count_working_days};
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidaySpec, LeaveRequest, LeaveRequestStatus, LeaveSplit};

/// Default maximum number of splits in one plan.
pub const DEFAULT_MAX_SPLITS: usize = 3;

/// Default length a plan's longest split must reach.
pub const DEFAULT_MINIMUM_SEGMENT_DAYS: u32 = 10;

/// Limits on how an entitlement may be divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRules {
    /// Maximum number of splits.
    pub max_splits: usize,
    /// At least one split must cover this many days.
    pub minimum_segment_days: u32,
}

impl Default for SplitRules {
    fn default() -> Self {
        Self {
            max_splits: DEFAULT_MAX_SPLITS,
            minimum_segment_days: DEFAULT_MINIMUM_SEGMENT_DAYS,
        }
    }
}

/// An employee's leave split set while it is being composed.
///
/// # Example
///
/// ```
/// use vacation_engine::allocation::{LeavePlan, SplitRules};
/// use vacation_engine::calculation::EligibilityWindow;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let window = EligibilityWindow::for_date(hired, 6, hired).unwrap();
/// let mut plan = LeavePlan::new("emp_001", 15, window, SplitRules::default());
///
/// // Monday 6 July to Friday 24 July 2026
/// let days = plan
///     .set_split_range(
///         0,
///         NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 7, 24).unwrap(),
///         &[],
///     )
///     .unwrap();
///
/// assert_eq!(days, 15);
/// assert!(plan.can_submit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePlan {
    employee_id: String,
    entitlement: u32,
    window: EligibilityWindow,
    rules: SplitRules,
    splits: Vec<LeaveSplit>,
}

impl LeavePlan {
    /// Starts a plan with a single empty split.
    pub fn new(
        employee_id: impl Into<String>,
        entitlement: u32,
        window: EligibilityWindow,
        rules: SplitRules,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            entitlement,
            window,
            rules,
            splits: vec![LeaveSplit::default()],
        }
    }

    /// Rebuilds a plan from a request that is being edited again.
    pub(crate) fn from_request(request: &LeaveRequest, rules: SplitRules) -> Self {
        Self {
            employee_id: request.employee_id.clone(),
            entitlement: request.total_days,
            window: EligibilityWindow {
                eligible_from: request.eligible_from,
                work_year: request.work_year,
            },
            rules,
            splits: request.splits.clone(),
        }
    }

    /// The employee composing the plan.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// The number of days that must be allocated.
    pub fn entitlement(&self) -> u32 {
        self.entitlement
    }

    /// The dates that can be selected.
    pub fn window(&self) -> &EligibilityWindow {
        &self.window
    }

    /// The split limits in effect.
    pub fn rules(&self) -> &SplitRules {
        &self.rules
    }

    /// The current splits in index order.
    pub fn splits(&self) -> &[LeaveSplit] {
        &self.splits
    }

    /// Resizes the split set to `count` splits.
    ///
    /// Existing splits keep their index; new splits start empty.
    pub fn set_split_count(&mut self, count: usize) -> EngineResult<()> {
        if count == 0 || count > self.rules.max_splits {
            return Err(EngineError::InvalidSplitCount {
                requested: count,
                max: self.rules.max_splits,
            });
        }

        self.splits.resize(count, LeaveSplit::default());
        debug!(employee_id = %self.employee_id, count, "Resized leave splits");
        Ok(())
    }

    /// Chooses the range for split `index` and returns its working days.
    ///
    /// # Returns
    ///
    /// - [`EngineError::SplitIndexOutOfRange`] for an unknown index
    /// - [`EngineError::InvalidRange`] if `end` is before `start`
    /// - [`EngineError::IneligibleDate`] if either date is outside the window
    /// - [`EngineError::OverlappingSplit`] if the range shares a day with
    ///   another split
    pub fn set_split_range(
        &mut self,
        index: usize,
        start: NaiveDate,
        end: NaiveDate,
        holidays: &[HolidaySpec],
    ) -> EngineResult<u32> {
        self.check_index(index)?;

        if end < start {
            return Err(EngineError::InvalidRange { start, end });
        }
        self.window.check(start)?;
        self.window.check(end)?;

        let candidate = LeaveSplit::with_range(start, end, 0);
        if let Some(conflicting_index) = self
            .splits
            .iter()
            .enumerate()
            .find(|(i, split)| *i != index && split.overlaps(&candidate))
            .map(|(i, _)| i)
        {
            return Err(EngineError::OverlappingSplit {
                index,
                conflicting_index,
            });
        }

        let days = count_working_days(start, end, holidays)?;
        self.splits[index] = LeaveSplit::with_range(start, end, days);

        debug!(
            employee_id = %self.employee_id,
            index,
            %start,
            %end,
            days,
            "Set leave split range"
        );
        Ok(days)
    }

    /// Resets split `index` to an empty split.
    pub fn clear_split(&mut self, index: usize) -> EngineResult<()> {
        self.check_index(index)?;
        self.splits[index] = LeaveSplit::default();
        Ok(())
    }

    /// Total days across all splits.
    pub fn allocated_days(&self) -> u32 {
        self.splits.iter().map(|s| s.days).sum()
    }

    /// Returns true if the plan would be accepted by [`LeavePlan::submit`].
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks that the plan is fully reconciled.
    ///
    /// Over-allocation reports [`EngineError::EntitlementExceeded`] even while
    /// splits are still unset, since filling them can only add days. Unset
    /// splits and under-allocation report [`EngineError::NotReconciled`], and
    /// a plan without a long enough split reports
    /// [`EngineError::MissingMinimumSegment`].
    pub fn validate(&self) -> EngineResult<()> {
        let allocated = self.allocated_days();
        let unset_splits = self.splits.iter().filter(|s| !s.is_set()).count();

        if allocated > self.entitlement {
            return Err(EngineError::EntitlementExceeded {
                allocated,
                entitlement: self.entitlement,
            });
        }
        if unset_splits > 0 || allocated < self.entitlement {
            return Err(EngineError::NotReconciled {
                allocated,
                entitlement: self.entitlement,
                unset_splits,
            });
        }
        if !self
            .splits
            .iter()
            .any(|s| s.days >= self.rules.minimum_segment_days)
        {
            return Err(EngineError::MissingMinimumSegment {
                minimum_days: self.rules.minimum_segment_days,
            });
        }

        Ok(())
    }

    /// Submits the plan, producing a pending [`LeaveRequest`].
    ///
    /// The plan itself is left untouched so a rejected submission can be
    /// corrected and retried.
    pub fn submit(&self) -> EngineResult<LeaveRequest> {
        self.validate()?;

        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: self.employee_id.clone(),
            splits: self.splits.clone(),
            total_days: self.allocated_days(),
            status: LeaveRequestStatus::Pending,
            approver_id: None,
            work_year: self.window.work_year,
            eligible_from: self.window.eligible_from,
            submitted_at: Utc::now(),
            decided_at: None,
            rejection_reason: None,
        };

        info!(
            request_id = %request.id,
            employee_id = %request.employee_id,
            total_days = request.total_days,
            splits = request.splits.len(),
            "Submitted leave request"
        );
        Ok(request)
    }

    fn check_index(&self, index: usize) -> EngineResult<()> {
        if index >= self.splits.len() {
            return Err(EngineError::SplitIndexOutOfRange {
                index,
                len: self.splits.len(),
            });
        }
        Ok(())
    }
}
