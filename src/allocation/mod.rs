//! Leave split allocation and the leave request lifecycle.
//!
//! An employee composes a [`LeavePlan`], submits it as a pending
//! [`LeaveRequest`](crate::models::LeaveRequest), and an approver decides it
//! through the [`LeaveRequestRegistry`].

mod plan;
mod registry;
mod request;

pub use plan::{DEFAULT_MAX_SPLITS, DEFAULT_MINIMUM_SEGMENT_DAYS, LeavePlan, SplitRules};
pub use registry::LeaveRequestRegistry;
pub use request::Decision;
