//! Integration tests for the Time Cost Engine HTTP API.
//!
//! This test suite covers:
//! - One-time purchases (hours, minutes, shifts)
//! - Monthly recurring costs
//! - Validation ordering and range checks
//! - Malformed requests
//! - Currency display

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use time_cost_engine::api::{AppState, create_router};
use time_cost_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/calculator.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

fn create_request(income: &str, hours: &str, price: &str, recurring: bool) -> Value {
    json!({
        "yearly_income": income,
        "daily_hours": hours,
        "item_price": price,
        "is_recurring": recurring
    })
}

fn assert_validation_error(status: StatusCode, body: &Value, message: &str, field: &str) {
    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], message);
    assert_eq!(body["details"], field);
}

// =============================================================================
// One-time purchases
// =============================================================================

#[tokio::test]
async fn test_one_time_four_hours() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "100", false),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["time_cost"]["kind"], "one_time");
    assert_eq!(body["time_cost"]["hourly_rate"], "25.00");
    assert_eq!(body["time_cost"]["duration_text"], "4 hours");
    assert_eq!(body["time_cost"]["shifts_text"], "0.5 shifts of 8 hours");
    assert_eq!(body["hourly_rate_display"], "$25.00");
}

#[tokio::test]
async fn test_one_time_under_an_hour() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "12.50", false),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_cost"]["duration_text"], "30 minutes");
    assert_eq!(body["time_cost"]["shifts_text"], "less than one shift");
}

#[tokio::test]
async fn test_one_time_hours_and_minutes() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "62.50", false),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_cost"]["duration_text"], "2 hours and 30 minutes");
}

#[tokio::test]
async fn test_one_time_exactly_one_hour() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "25", false),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_cost"]["duration_text"], "1 hour");
    assert_eq!(body["time_cost"]["shifts_text"], "0.1 shifts of 8 hours");
}

#[tokio::test]
async fn test_one_time_decimal_hours_precision() {
    let mut request = create_request("52000", "8", "62.50", false);
    request["precision"] = json!("decimal_hours");

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_cost"]["duration_text"], "2.5 hours");
    assert_eq!(body["time_cost"]["shifts_text"], "0.3 shifts of 8 hours");
}

#[tokio::test]
async fn test_income_text_is_not_filtered_to_digits() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("$52,000", "8", "100", false),
    )
    .await;

    assert_validation_error(status, &body, "Please enter a valid yearly income", "yearly_income");
}

#[tokio::test]
async fn test_fractional_numeric_income_keeps_its_value() {
    let request = json!({
        "yearly_income": 52000.0,
        "daily_hours": 8,
        "item_price": 100
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["inputs"]["yearly_income"], "52000.0");
    assert_eq!(body["time_cost"]["hourly_rate"], "25.00");
    assert_eq!(body["time_cost"]["duration_text"], "4 hours");
}

#[tokio::test]
async fn test_negative_numeric_income_is_invalid() {
    let request = json!({
        "yearly_income": -52000,
        "daily_hours": 8,
        "item_price": 100
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_validation_error(status, &body, "Please enter a valid yearly income", "yearly_income");
}

#[tokio::test]
async fn test_just_under_an_hour_reads_as_sixty_minutes() {
    // 24.999 / 25 = 0.99996 hours
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "24.999", false),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_cost"]["duration_text"], "60 minutes");
    assert_eq!(body["time_cost"]["shifts_text"], "less than one shift");
}

#[tokio::test]
async fn test_numeric_json_fields_are_accepted() {
    let request = json!({
        "yearly_income": 52000,
        "daily_hours": 8,
        "item_price": 100
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_cost"]["duration_text"], "4 hours");
}

#[tokio::test]
async fn test_large_income_is_displayed_with_separators() {
    // 5,200,000 / 2080 = 2500 per hour
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("5200000", "8", "100", false),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hourly_rate_display"], "$2,500.00");
    assert_eq!(body["time_cost"]["duration_text"], "2 minutes");
}

// =============================================================================
// Recurring costs
// =============================================================================

#[tokio::test]
async fn test_recurring_fifty_a_month() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "50", true),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["time_cost"]["kind"], "recurring");
    assert_eq!(body["time_cost"]["hourly_rate"], "25.00");
    assert_eq!(body["time_cost"]["monthly_hours"], "2.0");
    assert_eq!(body["time_cost"]["monthly_shifts"], "0.3");
    assert_eq!(body["time_cost"]["yearly_hours"], "24.0");
    assert_eq!(body["time_cost"]["yearly_shifts"], "3.0");
}

#[tokio::test]
async fn test_recurring_audit_trace() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "50", true),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let steps = body["audit_trace"]["steps"].as_array().unwrap();
    let rule_ids: Vec<&str> = steps.iter().map(|s| s["rule_id"].as_str().unwrap()).collect();
    assert_eq!(
        rule_ids,
        vec!["hourly_rate", "monthly_working_hours", "recurring_annualization"]
    );
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_missing_income() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("", "8", "100", false),
    )
    .await;

    assert_validation_error(status, &body, "Please enter your yearly income", "yearly_income");
}

#[tokio::test]
async fn test_missing_income_reported_before_missing_price() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("", "8", "", false),
    )
    .await;

    assert_validation_error(status, &body, "Please enter your yearly income", "yearly_income");
}

#[tokio::test]
async fn test_omitted_fields_are_missing() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        json!({"yearly_income": "52000", "daily_hours": "8"}),
    )
    .await;

    assert_validation_error(status, &body, "Please enter the item price", "item_price");
}

#[tokio::test]
async fn test_daily_hours_upper_bound() {
    let (status, _) = post_calculate(
        create_router_for_test(),
        create_request("52000", "24", "100", false),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "24.0001", "100", false),
    )
    .await;
    assert_validation_error(
        status,
        &body,
        "Please enter valid daily hours (between 0 and 24)",
        "daily_hours",
    );
}

#[tokio::test]
async fn test_zero_daily_hours() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "0", "100", false),
    )
    .await;

    assert_validation_error(
        status,
        &body,
        "Please enter valid daily hours (between 0 and 24)",
        "daily_hours",
    );
}

#[tokio::test]
async fn test_non_numeric_income_is_invalid() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("abc", "8", "100", false),
    )
    .await;

    assert_validation_error(status, &body, "Please enter a valid yearly income", "yearly_income");
}

#[tokio::test]
async fn test_zero_income_is_invalid() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("0", "8", "100", false),
    )
    .await;

    assert_validation_error(status, &body, "Please enter a valid yearly income", "yearly_income");
}

#[tokio::test]
async fn test_negative_price_is_invalid() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "-10", false),
    )
    .await;

    assert_validation_error(status, &body, "Please enter a valid price", "item_price");
}

// =============================================================================
// Malformed requests and other endpoints
// =============================================================================

#[tokio::test]
async fn test_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .body(Body::from(create_request("52000", "8", "100", false).to_string()))
        .unwrap();

    let (status, body) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["bind_address"], "127.0.0.1:3000");
}

#[tokio::test]
async fn test_response_carries_metadata() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("52000", "8", "100", false),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["calculation_id"].is_string());
    assert!(body["timestamp"].is_string());
    assert_eq!(body["engine_version"], env!("CARGO_PKG_VERSION"));
}
