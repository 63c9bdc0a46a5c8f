//! Leave request transitions.
//!
//! ```text
//! Composing --submit--> Pending --approve--> Approved
//!     ^                   |  \
//!     |                   |   --reject--> Rejected
//!     +----withdraw-------+                  |
//!     +----reopen----------------------------+
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveRequestStatus};

use super::plan::{LeavePlan, SplitRules};

/// An approver's verdict on a pending request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Approve the request as submitted.
    Approve,
    /// Reject the request, optionally with a reason for the employee.
    Reject {
        /// Reason shown to the employee.
        #[serde(default)]
        reason: Option<String>,
    },
}

impl Decision {
    fn action(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject { .. } => "reject",
        }
    }
}

impl LeaveRequest {
    /// Marks a pending request approved by `approver_id`.
    pub fn approve(&mut self, approver_id: &str) -> EngineResult<()> {
        self.decide(approver_id, Decision::Approve)
    }

    /// Marks a pending request rejected by `approver_id`.
    pub fn reject(&mut self, approver_id: &str, reason: Option<String>) -> EngineResult<()> {
        self.decide(approver_id, Decision::Reject { reason })
    }

    /// Applies an approver decision to a pending request.
    pub fn decide(&mut self, approver_id: &str, decision: Decision) -> EngineResult<()> {
        self.require(LeaveRequestStatus::Pending, decision.action())?;

        match decision {
            Decision::Approve => self.status = LeaveRequestStatus::Approved,
            Decision::Reject { reason } => {
                self.status = LeaveRequestStatus::Rejected;
                self.rejection_reason = reason;
            }
        }
        self.approver_id = Some(approver_id.to_string());
        self.decided_at = Some(Utc::now());
        Ok(())
    }

    /// Pulls a pending request back into editing.
    pub fn withdraw(&self, rules: SplitRules) -> EngineResult<LeavePlan> {
        self.require(LeaveRequestStatus::Pending, "withdraw")?;
        Ok(LeavePlan::from_request(self, rules))
    }

    /// Re-edits a rejected request.
    pub fn reopen(&self, rules: SplitRules) -> EngineResult<LeavePlan> {
        self.require(LeaveRequestStatus::Rejected, "reopen")?;
        Ok(LeavePlan::from_request(self, rules))
    }

    fn require(&self, status: LeaveRequestStatus, action: &str) -> EngineResult<()> {
        if self.status != status {
            return Err(EngineError::InvalidTransition {
                from: self.status.to_string(),
                action: action.to_string(),
            });
        }
        Ok(())
    }
}
