//! Core data models for the Vacation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employee;
mod entitlement;
mod holiday;
mod leave;
mod payment_record;
mod service_summary;

pub use audit::{AuditStep, AuditTrace};
pub use employee::{Employee, EmployeeCategory};
pub use entitlement::EntitlementResult;
pub use holiday::{Holiday, HolidaySpec};
pub use leave::{LeaveRequest, LeaveRequestStatus, LeaveSplit, WorkYear};
pub use payment_record::{InsuranceKind, PaymentRecord};
pub use service_summary::{ServiceSummary, YearService};
