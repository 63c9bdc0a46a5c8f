//! Integration tests for the Vacation Engine API.
//!
//! This test suite drives the HTTP API end to end:
//! - Service month aggregation across employers
//! - Entitlement calculation with abnormal-condition months
//! - Leave split submission and validation failures
//! - Approver decisions and decision conflicts
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use vacation_engine::api::{AppState, create_router};
use vacation_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/vacation").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "POST", uri, Some(body)).await
}

fn record(year: i32, month: u32, organization: &str) -> Value {
    json!({
        "year": year,
        "month": month,
        "organization": organization,
        "paid": true
    })
}

/// Employee hired Monday 2026-01-05, eligible from 2026-07-05.
fn leave_submission(entitlement: u32, splits: &[(&str, &str)]) -> Value {
    let splits: Vec<Value> = splits
        .iter()
        .map(|(start, end)| json!({ "start": start, "end": end }))
        .collect();

    json!({
        "employee": {
            "id": "emp_001",
            "hire_date": "2026-01-05",
            "category": "standard"
        },
        "entitlement": entitlement,
        "reference_date": "2026-03-01",
        "splits": splits
    })
}

async fn submit_valid_request(router: &Router) -> String {
    let (status, body) = post(
        router.clone(),
        "/leave-requests",
        leave_submission(23, &[("2026-07-20", "2026-07-31"), ("2026-08-03", "2026-08-19")]),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
    body["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Service Summary
// =============================================================================

#[tokio::test]
async fn test_concurrent_employers_count_month_once() {
    let router = create_router_for_test();
    let body = json!({
        "records": [
            record(2024, 3, "Acme Mining"),
            record(2024, 3, "Delta Logistics"),
            record(2024, 4, "Acme Mining")
        ]
    });

    let (status, result) = post(router, "/service-summary", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result["summary"]["per_year"]["2024"]["unique_paid_months"],
        json!([3, 4])
    );
    assert_eq!(result["summary"]["total_months"], 2);
}

#[tokio::test]
async fn test_voluntary_months_excluded_when_requested() {
    let router = create_router_for_test();
    let body = json!({
        "records": [
            record(2023, 1, "Acme Mining"),
            record(2023, 2, "Acme Mining"),
            record(2023, 3, "Сайн дурын даатгал Баянзүрх"),
            {
                "year": 2023,
                "month": 4,
                "organization": "Household Contributions",
                "paid": true,
                "insurance_kind": "voluntary"
            }
        ],
        "include_voluntary": false
    });

    let (status, result) = post(router, "/service-summary", body).await;

    assert_eq!(status, StatusCode::OK);
    let year = &result["summary"]["per_year"]["2023"];
    assert_eq!(year["regular_months"], json!([1, 2]));
    assert_eq!(year["voluntary_months"], json!([3, 4]));
    assert_eq!(result["summary"]["total_months"], 2);
}

#[tokio::test]
async fn test_abnormal_months_clamped_to_paid_months() {
    let router = create_router_for_test();
    let records: Vec<Value> = (1..=5).map(|m| record(2022, m, "Acme Mining")).collect();
    let body = json!({
        "records": records,
        "abnormal_months": { "2022": 9, "2021": 4 }
    });

    let (status, result) = post(router, "/service-summary", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["abnormal_months"]["months"]["2022"], 5);
    assert!(result["abnormal_months"]["months"].get("2021").is_none());
    assert_eq!(result["total_abnormal_months"], 5);
}

#[tokio::test]
async fn test_empty_records_yield_zero_summary() {
    let router = create_router_for_test();

    let (status, result) = post(router, "/service-summary", json!({ "records": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["summary"]["total_months"], 0);
    assert_eq!(result["summary"]["per_year"], json!({}));
}

// =============================================================================
// Entitlement
// =============================================================================

#[tokio::test]
async fn test_long_service_without_abnormal_months() {
    let router = create_router_for_test();
    let body = json!({ "total_months": 400, "total_abnormal_months": 0, "category": "standard" });

    let (status, result) = post(router, "/entitlement", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["effective_abnormal_months"], 0);
    assert_eq!(result["result"]["normal_months"], 400);
    assert_eq!(result["result"]["normal_additional"], 14);
    assert_eq!(result["result"]["abnormal_additional"], 0);
    assert_eq!(result["result"]["total"], 29);
}

#[tokio::test]
async fn test_abnormal_months_credited_at_tier_floor() {
    let router = create_router_for_test();
    let body = json!({ "total_months": 200, "total_abnormal_months": 70, "category": "standard" });

    let (status, result) = post(router, "/entitlement", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["effective_abnormal_months"], 61);
    assert_eq!(result["result"]["excess_abnormal_months"], 9);
    assert_eq!(result["result"]["normal_months"], 139);
    assert_eq!(result["result"]["normal_additional"], 5);
    assert_eq!(result["result"]["abnormal_additional"], 5);
    assert_eq!(result["result"]["total"], 25);
}

#[tokio::test]
async fn test_extended_category_uses_larger_base() {
    let router = create_router_for_test();
    let body = json!({ "total_months": 30, "category": "extended" });

    let (status, result) = post(router, "/entitlement", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["base"], 20);
    assert_eq!(result["result"]["total"], 20);
}

#[tokio::test]
async fn test_entitlement_audit_trace_explains_total() {
    let router = create_router_for_test();
    let body = json!({ "total_months": 200, "total_abnormal_months": 70, "category": "standard" });

    let (_, result) = post(router, "/entitlement", body).await;

    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    let rule_ids: Vec<&str> = steps.iter().map(|s| s["rule_id"].as_str().unwrap()).collect();
    assert_eq!(
        rule_ids,
        vec![
            "abnormal_tier_match",
            "normal_bonus_lookup",
            "abnormal_bonus_lookup",
            "entitlement_total"
        ]
    );
    assert_eq!(
        steps[3]["reasoning"],
        "15 base days + 5 normal bonus + 5 abnormal bonus = 25 days"
    );
}

#[tokio::test]
async fn test_unknown_category_returns_400() {
    let router = create_router_for_test();
    let body = json!({ "total_months": 30, "category": "executive" });

    let (status, result) = post(router, "/entitlement", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Leave Submission
// =============================================================================

#[tokio::test]
async fn test_ten_and_thirteen_day_splits_accepted() {
    let router = create_router_for_test();

    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(23, &[("2026-07-20", "2026-07-31"), ("2026-08-03", "2026-08-19")]),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(result["status"], "pending");
    assert_eq!(result["total_days"], 23);
    assert_eq!(result["splits"][0]["days"], 10);
    assert_eq!(result["splits"][1]["days"], 13);
    assert_eq!(result["work_year"]["start"], "2026-01-05");
    assert_eq!(result["work_year"]["end"], "2027-01-04");
    assert!(result["approver_id"].is_null());
}

#[tokio::test]
async fn test_two_nine_day_splits_rejected() {
    let router = create_router_for_test();

    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(18, &[("2026-07-20", "2026-07-30"), ("2026-08-03", "2026-08-13")]),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "MISSING_MINIMUM_SEGMENT");
}

#[tokio::test]
async fn test_date_before_eligibility_rejected() {
    let router = create_router_for_test();

    // Saturday 2026-07-04 is one day before the eligibility date
    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(15, &[("2026-07-04", "2026-07-24")]),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "INELIGIBLE_DATE");
    assert!(result["message"].as_str().unwrap().contains("2026-07-04"));
}

#[tokio::test]
async fn test_overlapping_splits_rejected() {
    let router = create_router_for_test();

    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(20, &[("2026-07-20", "2026-07-31"), ("2026-07-31", "2026-08-13")]),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "OVERLAPPING_SPLIT");
}

#[tokio::test]
async fn test_over_allocation_rejected() {
    let router = create_router_for_test();

    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(10, &[("2026-07-20", "2026-08-07")]),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "ENTITLEMENT_EXCEEDED");
}

#[tokio::test]
async fn test_under_allocation_rejected() {
    let router = create_router_for_test();

    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(23, &[("2026-07-20", "2026-07-31")]),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "NOT_RECONCILED");
}

#[tokio::test]
async fn test_configured_holidays_reduce_split_days() {
    let router = create_router_for_test();

    // 15 weekdays, three of them Naadam holidays (2026-07-13 to 2026-07-15)
    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(12, &[("2026-07-06", "2026-07-24")]),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", result);
    assert_eq!(result["splits"][0]["days"], 12);
}

#[tokio::test]
async fn test_too_many_splits_rejected() {
    let router = create_router_for_test();

    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(
            20,
            &[
                ("2026-07-06", "2026-07-10"),
                ("2026-07-13", "2026-07-17"),
                ("2026-07-20", "2026-07-24"),
                ("2026-07-27", "2026-07-31"),
            ],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_SPLIT_COUNT");
}

#[tokio::test]
async fn test_reversed_range_rejected() {
    let router = create_router_for_test();

    let (status, result) = post(
        router,
        "/leave-requests",
        leave_submission(10, &[("2026-07-17", "2026-07-06")]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RANGE");
}

// =============================================================================
// Decisions
// =============================================================================

#[tokio::test]
async fn test_submitted_request_can_be_fetched() {
    let router = create_router_for_test();
    let id = submit_valid_request(&router).await;

    let (status, result) = send(router, "GET", &format!("/leave-requests/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["id"], id);
    assert_eq!(result["status"], "pending");
}

#[tokio::test]
async fn test_unknown_request_returns_404() {
    let router = create_router_for_test();

    let (status, result) = send(
        router,
        "GET",
        "/leave-requests/6f1c2c1e-8f6a-4a53-9a5c-2f0f0f6b7d11",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(result["code"], "REQUEST_NOT_FOUND");
}

#[tokio::test]
async fn test_first_decision_wins_second_conflicts() {
    let router = create_router_for_test();
    let id = submit_valid_request(&router).await;
    let uri = format!("/leave-requests/{}/decision", id);

    let (status, result) = post(
        router.clone(),
        &uri,
        json!({ "approver_id": "mgr_01", "decision": "approve" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "approved");
    assert_eq!(result["approver_id"], "mgr_01");

    let (status, result) = post(
        router.clone(),
        &uri,
        json!({ "approver_id": "mgr_02", "decision": "reject", "reason": "Too late" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(result["code"], "DECISION_CONFLICT");

    let (_, stored) = send(router, "GET", &format!("/leave-requests/{}", id), None).await;
    assert_eq!(stored["status"], "approved");
    assert_eq!(stored["approver_id"], "mgr_01");
}

#[tokio::test]
async fn test_rejection_records_reason() {
    let router = create_router_for_test();
    let id = submit_valid_request(&router).await;

    let (status, result) = post(
        router,
        &format!("/leave-requests/{}/decision", id),
        json!({ "approver_id": "mgr_01", "decision": "reject", "reason": "Peak season" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "rejected");
    assert_eq!(result["rejection_reason"], "Peak season");
}

#[tokio::test]
async fn test_racing_decisions_have_single_winner() {
    let router = create_router_for_test();
    let id = submit_valid_request(&router).await;
    let uri = format!("/leave-requests/{}/decision", id);

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let router = router.clone();
            let uri = uri.clone();
            tokio::spawn(async move {
                let decision = if i % 2 == 0 { "approve" } else { "reject" };
                post(
                    router,
                    &uri,
                    json!({ "approver_id": format!("mgr_{:02}", i), "decision": decision }),
                )
                .await
                .0
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::CONFLICT)
            .count(),
        5
    );
}

#[tokio::test]
async fn test_decision_on_unknown_request_returns_404() {
    let router = create_router_for_test();

    let (status, result) = post(
        router,
        "/leave-requests/6f1c2c1e-8f6a-4a53-9a5c-2f0f0f6b7d11/decision",
        json!({ "approver_id": "mgr_01", "decision": "approve" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(result["code"], "REQUEST_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_decision_returns_400() {
    let router = create_router_for_test();
    let id = submit_valid_request(&router).await;

    let (status, result) = post(
        router,
        &format!("/leave-requests/{}/decision", id),
        json!({ "approver_id": "mgr_01", "decision": "escalate" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}
