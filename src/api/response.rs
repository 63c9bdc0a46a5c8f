//! Response types for the Vacation Engine API.
//!
//! This module defines the success bodies, the error response structures,
//! and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::AbnormalMonths;
use crate::error::EngineError;
use crate::models::{AuditTrace, EntitlementResult, ServiceSummary};

/// Response body for the `/service-summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSummaryResponse {
    /// Aggregated service months.
    pub summary: ServiceSummary,
    /// Abnormal months per year after clamping to the paid months.
    pub abnormal_months: AbnormalMonths,
    /// Sum of the clamped abnormal months.
    pub total_abnormal_months: u32,
}

/// Response body for the `/entitlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementResponse {
    /// Correlation id of the request that produced this result.
    pub correlation_id: String,
    /// The computed entitlement.
    pub result: EntitlementResult,
    /// The rules applied, in order.
    pub audit_trace: AuditTrace,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response for a request body that could not be used.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code, details) = match &error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "The engine configuration could not be used",
            ),
            EngineError::InvalidRange { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_RANGE",
                "The end date must not precede the start date",
            ),
            EngineError::InvalidSplitCount { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_SPLIT_COUNT",
                "Leave may only be divided into the configured number of splits",
            ),
            EngineError::SplitIndexOutOfRange { .. } => (
                StatusCode::BAD_REQUEST,
                "SPLIT_INDEX_OUT_OF_RANGE",
                "The referenced leave split does not exist",
            ),
            EngineError::OverlappingSplit { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "OVERLAPPING_SPLIT",
                "Leave splits must not share any calendar day",
            ),
            EngineError::IneligibleDate { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INELIGIBLE_DATE",
                "Leave dates must fall after the eligibility date and inside the work year",
            ),
            EngineError::NotReconciled { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NOT_RECONCILED",
                "Every split needs dates and the splits must add up to the entitlement",
            ),
            EngineError::EntitlementExceeded { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ENTITLEMENT_EXCEEDED",
                "The splits allocate more days than the entitlement",
            ),
            EngineError::MissingMinimumSegment { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_MINIMUM_SEGMENT",
                "One split must be long enough to form the main leave period",
            ),
            EngineError::InvalidTransition { .. } => (
                StatusCode::CONFLICT,
                "INVALID_TRANSITION",
                "The leave request is not in a state that allows this action",
            ),
            EngineError::DecisionConflict { .. } => (
                StatusCode::CONFLICT,
                "DECISION_CONFLICT",
                "Another approver has already decided this leave request",
            ),
            EngineError::RequestNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "REQUEST_NOT_FOUND",
                "No leave request exists with this id",
            ),
        };

        ApiErrorResponse {
            status,
            error: ApiError::with_details(code, message, details),
        }
    }
}
