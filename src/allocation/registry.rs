//! In-memory store of submitted leave requests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveRequestStatus};

use super::plan::{LeavePlan, SplitRules};
use super::request::Decision;

/// Submitted leave requests keyed by id.
///
/// Deciding a request is a compare-and-set on its status: the first decision
/// on a pending request wins and every later one fails with
/// [`EngineError::DecisionConflict`].
///
/// Requests live in memory for the lifetime of the process. Persistence is
/// external: a caller that stores decided requests elsewhere drains them with
/// [`LeaveRequestRegistry::evict_decided`] to keep the map bounded.
///
/// # Example
///
/// ```
/// use vacation_engine::allocation::{Decision, LeavePlan, LeaveRequestRegistry, SplitRules};
/// use vacation_engine::calculation::EligibilityWindow;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let window = EligibilityWindow::for_date(hired, 6, hired).unwrap();
/// let mut plan = LeavePlan::new("emp_001", 10, window, SplitRules::default());
/// plan.set_split_range(
///     0,
///     NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 7, 17).unwrap(),
///     &[],
/// )
/// .unwrap();
///
/// let registry = LeaveRequestRegistry::new();
/// let id = registry.insert(plan.submit().unwrap());
///
/// assert!(registry.decide(id, "mgr_01", Decision::Approve).is_ok());
/// assert!(registry.decide(id, "mgr_02", Decision::Approve).is_err());
/// ```
#[derive(Debug, Default)]
pub struct LeaveRequestRegistry {
    requests: Mutex<HashMap<Uuid, LeaveRequest>>,
}

impl LeaveRequestRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, LeaveRequest>> {
        // No mutation can panic partway through, so a poisoned map is still consistent.
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores a submitted request and returns its id.
    pub fn insert(&self, request: LeaveRequest) -> Uuid {
        let id = request.id;
        self.lock().insert(id, request);
        id
    }

    /// Returns a snapshot of a request.
    pub fn get(&self, id: Uuid) -> EngineResult<LeaveRequest> {
        self.lock()
            .get(&id)
            .cloned()
            .ok_or(EngineError::RequestNotFound { request_id: id })
    }

    /// Number of stored requests.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no requests are stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Decides a pending request, returning the decided request.
    ///
    /// # Returns
    ///
    /// - [`EngineError::RequestNotFound`] for an unknown id
    /// - [`EngineError::DecisionConflict`] if the request was already decided
    pub fn decide(
        &self,
        id: Uuid,
        approver_id: &str,
        decision: Decision,
    ) -> EngineResult<LeaveRequest> {
        let mut requests = self.lock();
        let request = requests
            .get_mut(&id)
            .ok_or(EngineError::RequestNotFound { request_id: id })?;

        if request.status != LeaveRequestStatus::Pending {
            warn!(
                request_id = %id,
                approver_id,
                status = %request.status,
                "Rejected decision on already decided request"
            );
            return Err(EngineError::DecisionConflict {
                request_id: id,
                status: request.status.to_string(),
            });
        }

        request.decide(approver_id, decision)?;
        info!(
            request_id = %id,
            approver_id,
            status = %request.status,
            "Decided leave request"
        );
        Ok(request.clone())
    }

    /// Removes every decided request and returns them.
    ///
    /// Pending requests stay. An evicted rejected request can no longer be
    /// reopened here.
    pub fn evict_decided(&self) -> Vec<LeaveRequest> {
        let mut requests = self.lock();
        let decided: Vec<Uuid> = requests
            .iter()
            .filter(|(_, request)| request.status != LeaveRequestStatus::Pending)
            .map(|(id, _)| *id)
            .collect();

        let evicted: Vec<LeaveRequest> = decided
            .iter()
            .filter_map(|id| requests.remove(id))
            .collect();
        if !evicted.is_empty() {
            info!(
                evicted = evicted.len(),
                remaining = requests.len(),
                "Evicted decided leave requests"
            );
        }
        evicted
    }

    /// Withdraws a pending request, removing it and returning an editable plan.
    pub fn withdraw(&self, id: Uuid, rules: SplitRules) -> EngineResult<LeavePlan> {
        self.take_for_edit(id, |request| request.withdraw(rules))
    }

    /// Reopens a rejected request, removing it and returning an editable plan.
    pub fn reopen(&self, id: Uuid, rules: SplitRules) -> EngineResult<LeavePlan> {
        self.take_for_edit(id, |request| request.reopen(rules))
    }

    fn take_for_edit<F>(&self, id: Uuid, edit: F) -> EngineResult<LeavePlan>
    where
        F: FnOnce(&LeaveRequest) -> EngineResult<LeavePlan>,
    {
        let mut requests = self.lock();
        let request = requests
            .get(&id)
            .ok_or(EngineError::RequestNotFound { request_id: id })?;

        let plan = edit(request)?;
        requests.remove(&id);
        Ok(plan)
    }
}
