//! HTTP API module for the Vacation Engine.
//!
//! This module provides the REST API endpoints for service aggregation,
//! entitlement calculation, and the leave request lifecycle.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DecisionRequest, EntitlementRequest, LeaveSubmissionRequest, ServiceSummaryRequest,
    SplitSelection,
};
pub use response::{ApiError, ApiErrorResponse, EntitlementResponse, ServiceSummaryResponse};
pub use state::AppState;
