//! HTTP request handlers for the Vacation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::LeavePlan;
use crate::calculation::{
    AbnormalMonths, EligibilityWindow, aggregate_service, calculate_entitlement_audited,
};
use crate::error::EngineResult;
use crate::models::{AuditTrace, LeaveRequest};

use super::request::{
    DecisionRequest, EntitlementRequest, LeaveSubmissionRequest, ServiceSummaryRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, EntitlementResponse, ServiceSummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/service-summary", post(service_summary_handler))
        .route("/entitlement", post(entitlement_handler))
        .route("/leave-requests", post(submit_leave_handler))
        .route("/leave-requests/:id", get(get_leave_request_handler))
        .route("/leave-requests/:id/decision", post(decision_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

fn parse_request_id(
    id: Result<Path<Uuid>, PathRejection>,
    correlation_id: Uuid,
) -> Result<Uuid, ApiErrorResponse> {
    id.map(|Path(id)| id).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Invalid leave request id"
        );
        ApiErrorResponse::bad_request(ApiError::new(
            "INVALID_REQUEST_ID",
            "Leave request id must be a UUID",
        ))
    })
}

/// Handler for POST /service-summary.
///
/// Aggregates payment records and clamps the reported abnormal months.
async fn service_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<ServiceSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing service summary request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let summary = aggregate_service(
        &request.records,
        request.include_voluntary,
        &state.config().classifier(),
    );

    let mut abnormal_months = AbnormalMonths::default();
    for (year, months) in &request.abnormal_months {
        abnormal_months.set(*year, *months, &summary);
    }
    let total_abnormal_months = abnormal_months.total();

    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        total_months = summary.total_months,
        total_abnormal_months,
        "Service summary completed"
    );

    json_response(
        StatusCode::OK,
        ServiceSummaryResponse {
            summary,
            abnormal_months,
            total_abnormal_months,
        },
    )
}

/// Handler for POST /entitlement.
///
/// Calculates the annual entitlement with the configured tier table and
/// returns it with its audit trace.
async fn entitlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let config = state.config();
    let start_time = Instant::now();
    let calculation = calculate_entitlement_audited(
        config.tiers(),
        request.total_months,
        request.total_abnormal_months,
        config.base_days(request.category),
        1,
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        category = %request.category,
        total = calculation.result.total,
        duration_us = duration.as_micros(),
        "Entitlement calculated"
    );

    json_response(
        StatusCode::OK,
        EntitlementResponse {
            correlation_id: correlation_id.to_string(),
            result: calculation.result,
            audit_trace: AuditTrace {
                steps: calculation.audit_steps,
                duration_us: duration.as_micros() as u64,
            },
        },
    )
}

/// Handler for POST /leave-requests.
///
/// Composes the submitted splits into a plan, submits it, and registers the
/// resulting pending request.
async fn submit_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveSubmissionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave submission");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };
    let employee_id = request.employee.id.clone();

    match submit_leave(&state, request) {
        Ok(leave_request) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %leave_request.id,
                employee_id = %employee_id,
                total_days = leave_request.total_days,
                "Leave request submitted"
            );
            json_response(StatusCode::CREATED, leave_request)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Leave submission rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Builds, validates, and registers a leave request.
fn submit_leave(state: &AppState, request: LeaveSubmissionRequest) -> EngineResult<LeaveRequest> {
    let config = state.config();
    let reference_date = request
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let window = EligibilityWindow::for_date(
        request.employee.hire_date,
        config.policy().eligibility_months,
        reference_date,
    )?;

    let mut plan = LeavePlan::new(
        request.employee.id,
        request.entitlement,
        window,
        config.split_rules(),
    );
    plan.set_split_count(request.splits.len())?;
    for (index, split) in request.splits.iter().enumerate() {
        plan.set_split_range(index, split.start, split.end, config.holiday_specs())?;
    }

    let leave_request = plan.submit()?;
    state.registry().insert(leave_request.clone());
    Ok(leave_request)
}

/// Handler for GET /leave-requests/{id}.
async fn get_leave_request_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match parse_request_id(id, correlation_id) {
        Ok(id) => id,
        Err(error) => return error.into_response(),
    };
    info!(correlation_id = %correlation_id, request_id = %id, "Fetching leave request");

    match state.registry().get(id) {
        Ok(leave_request) => json_response(StatusCode::OK, leave_request),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave request lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /leave-requests/{id}/decision.
///
/// The first decision on a pending request wins; later ones get 409.
async fn decision_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match parse_request_id(id, correlation_id) {
        Ok(id) => id,
        Err(error) => return error.into_response(),
    };
    info!(correlation_id = %correlation_id, request_id = %id, "Processing leave decision");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    match state
        .registry()
        .decide(id, &request.approver_id, request.decision)
    {
        Ok(leave_request) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %id,
                approver_id = %request.approver_id,
                status = %leave_request.status,
                "Leave decision recorded"
            );
            json_response(StatusCode::OK, leave_request)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                request_id = %id,
                error = %err,
                "Leave decision rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
