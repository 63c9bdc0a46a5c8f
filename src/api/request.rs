//! Request types for the Vacation Engine API.
//!
//! This module defines the JSON request structures for each endpoint.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::allocation::Decision;
use crate::models::{Employee, EmployeeCategory, PaymentRecord};

fn default_include_voluntary() -> bool {
    true
}

/// Request body for the `/service-summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSummaryRequest {
    /// Monthly payment records from every employer.
    pub records: Vec<PaymentRecord>,
    /// Whether voluntary-insurance months count toward the total.
    #[serde(default = "default_include_voluntary")]
    pub include_voluntary: bool,
    /// Self-reported abnormal-condition months per year.
    #[serde(default)]
    pub abnormal_months: BTreeMap<i32, u32>,
}

/// Request body for the `/entitlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// Total qualifying service months.
    pub total_months: u32,
    /// Months worked under abnormal conditions.
    #[serde(default)]
    pub total_abnormal_months: u32,
    /// The employee category selecting the base allotment.
    pub category: EmployeeCategory,
}

/// A date range chosen for one leave split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitSelection {
    /// First day of leave (inclusive).
    pub start: NaiveDate,
    /// Last day of leave (inclusive).
    pub end: NaiveDate,
}

/// Request body for the `/leave-requests` endpoint.
///
/// The budget is the caller's `entitlement`, normally the `total` returned by
/// `/entitlement`. The employee's category already went into that total and
/// is not read again here; only the hire date matters for the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSubmissionRequest {
    /// The employee taking leave.
    pub employee: Employee,
    /// Total leave days to allocate, as computed by `/entitlement`.
    pub entitlement: u32,
    /// A date inside the work year being planned. Defaults to today.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// The chosen split ranges, in order.
    pub splits: Vec<SplitSelection>,
}

/// Request body for the `/leave-requests/{id}/decision` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// The approver making the decision.
    pub approver_id: String,
    /// The decision itself.
    #[serde(flatten)]
    pub decision: Decision,
}
