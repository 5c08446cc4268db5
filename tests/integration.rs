//! Integration tests for the investment calculators.
//!
//! This test suite drives every calculator through the HTTP router:
//! - SIP and step-up SIP accumulation
//! - SWP withdrawals
//! - Goal-based SIP
//! - Fixed deposit maturity
//! - EMI amortization
//! - Schedule export
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use invest_calc::api::{AppState, create_router};
use invest_calc::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/calculators.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a money field, which is serialized as a decimal string.
fn amount(value: &Value) -> Decimal {
    let text = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected decimal string, got {}", value));
    decimal(text)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let (status, bytes) = send(router, post("/calculate", &body)).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_export(router: Router, body: Value) -> (StatusCode, String) {
    let (status, bytes) = send(router, post("/export", &body)).await;
    (status, String::from_utf8(bytes).unwrap())
}

fn assert_result(result: &Value, invested: &str, final_amount: &str, earnings: &str) {
    let summary = &result["result"];
    assert_eq!(amount(&summary["total_invested"]), decimal(invested), "total_invested");
    assert_eq!(amount(&summary["final_amount"]), decimal(final_amount), "final_amount");
    assert_eq!(amount(&summary["total_earnings"]), decimal(earnings), "total_earnings");
}

fn assert_has_audit_rule(result: &Value, rule_id: &str) {
    let steps = result["audit_steps"].as_array().expect("audit_steps array");
    assert!(
        steps.iter().any(|step| step["rule_id"] == rule_id),
        "Expected audit rule '{}', got {:?}",
        rule_id,
        steps.iter().map(|s| &s["rule_id"]).collect::<Vec<_>>()
    );
}

// =============================================================================
// SECTION 1: SIP
// =============================================================================

#[tokio::test]
async fn test_sip_thousand_a_month_for_ten_years() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": "1000", "annual_rate": "6.0", "years": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["calculator"], "sip");
    assert_result(&result, "120000", "164699", "44699");
    assert_eq!(amount(&result["result"]["monthly_amount"]), decimal("1000"));
    assert_has_audit_rule(&result, "sip_future_value");
}

#[tokio::test]
async fn test_sip_schedule_repeats_maturity_value() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": "5000", "annual_rate": "12", "years": 15}),
    )
    .await;

    assert_result(&result, "900000", "2522880", "1622880");
    let schedule = result["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 180);
    assert_eq!(schedule[0]["type"], "balance");
    assert_eq!(schedule[0]["month"], 1);
    assert!(schedule.iter().all(|row| amount(&row["remaining"]) == decimal("2522880")));
}

#[tokio::test]
async fn test_sip_breakdown_labels() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": "1000", "annual_rate": "6.0", "years": 10}),
    )
    .await;

    let slices = result["result"]["breakdown"]["slices"].as_array().unwrap();
    assert_eq!(slices[0]["label"], "Total Investment");
    assert_eq!(slices[1]["label"], "Earnings");
    assert_eq!(amount(&slices[1]["value"]), decimal("44699"));
}

#[tokio::test]
async fn test_calculate_response_has_display_block() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": "1000", "annual_rate": "6.0", "years": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let display = &result["display"];
    assert_eq!(display["total_invested"], "₹120,000");
    assert_eq!(display["total_earnings"], "₹44,699");
    assert_eq!(display["final_amount"], "₹164,699");
    assert_eq!(display["monthly_amount"], "₹1,000");
    assert_eq!(display["shares"][0]["label"], "Total Investment");
    assert_eq!(amount(&display["shares"][0]["percent"]), decimal("72.9"));
    assert_eq!(amount(&display["shares"][1]["percent"]), decimal("27.1"));
}

// =============================================================================
// SECTION 2: Step-up SIP
// =============================================================================

#[tokio::test]
async fn test_step_up_sip_with_yearly_increment() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({
            "calculator": "step_up_sip",
            "monthly_investment": "1000",
            "annual_increment": "500",
            "annual_rate": "6.0",
            "years": 10
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_result(&result, "390000", "402910", "12910");
    assert_eq!(result["schedule"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_step_up_sip_rows_repeat_final_totals() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({
            "calculator": "step_up_sip",
            "monthly_investment": "2000",
            "annual_increment": "1000",
            "annual_rate": "10",
            "years": 3
        }),
    )
    .await;

    let schedule = result["schedule"].as_array().unwrap();
    let rows: Vec<(u64, Decimal, Decimal)> = schedule
        .iter()
        .map(|row| {
            (
                row["year"].as_u64().unwrap(),
                amount(&row["investment"]),
                amount(&row["amount"]),
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            (1, decimal("108000"), decimal("114033")),
            (2, decimal("108000"), decimal("114033")),
            (3, decimal("108000"), decimal("114033")),
        ]
    );
}

#[tokio::test]
async fn test_step_up_without_increment_invests_like_sip() {
    let (_, step_up) = post_calculate(
        create_router_for_test(),
        json!({
            "calculator": "step_up_sip",
            "monthly_investment": "1000",
            "annual_increment": "0",
            "annual_rate": "6.0",
            "years": 10
        }),
    )
    .await;
    let (_, sip) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": "1000", "annual_rate": "6.0", "years": 10}),
    )
    .await;

    assert_eq!(
        amount(&step_up["result"]["total_invested"]),
        amount(&sip["result"]["total_invested"])
    );
    assert_eq!(amount(&step_up["result"]["final_amount"]), decimal("123972"));
}

// =============================================================================
// SECTION 3: SWP
// =============================================================================

#[tokio::test]
async fn test_swp_withdrawals_from_maturity_value() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({
            "calculator": "swp",
            "principal": "100000",
            "annual_rate": "6.0",
            "years": 5,
            "monthly_withdrawal": "5000"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_result(&result, "100000", "134885", "34885");

    let balances: Vec<Decimal> = result["schedule"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| amount(&row["remaining"]))
        .collect();
    assert_eq!(balances.len(), 60);
    assert_eq!(&balances[..3], &[decimal("129885"), decimal("124885"), decimal("119885")]);
    assert_eq!(balances[25], decimal("4885"));
    assert!(balances[26..].iter().all(|b| b.is_zero()));
}

#[tokio::test]
async fn test_swp_breakdown_labels() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({
            "calculator": "swp",
            "principal": "100000",
            "annual_rate": "6.0",
            "years": 5,
            "monthly_withdrawal": "5000"
        }),
    )
    .await;

    let slices = result["result"]["breakdown"]["slices"].as_array().unwrap();
    assert_eq!(slices[0]["label"], "Principal Amount");
    assert_eq!(slices[1]["label"], "Earnings");
}

// =============================================================================
// SECTION 4: Goal SIP
// =============================================================================

#[tokio::test]
async fn test_goal_sip_required_monthly_investment() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "goal_sip", "goal_amount": "500000", "annual_rate": "6.0", "years": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&result["result"]["monthly_amount"]), decimal("3036"));
    assert_result(&result, "364320", "500000", "135680");
    assert!(result["schedule"].as_array().unwrap().is_empty());
    assert_has_audit_rule(&result, "goal_required_sip");
}

#[tokio::test]
async fn test_goal_sip_fed_back_into_sip_reaches_goal() {
    let (_, goal) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "goal_sip", "goal_amount": "1000000", "annual_rate": "12", "years": 20}),
    )
    .await;
    let monthly = goal["result"]["monthly_amount"].clone();
    assert_eq!(amount(&monthly), decimal("1001"));

    let (_, sip) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": monthly, "annual_rate": "12", "years": 20}),
    )
    .await;

    let reached = amount(&sip["result"]["final_amount"]);
    assert!(reached >= decimal("1000000"));
    assert!(reached - decimal("1000000") < decimal("1000"));
}

// =============================================================================
// SECTION 5: Fixed deposit
// =============================================================================

#[tokio::test]
async fn test_fd_compounds_annually() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "fd", "principal": "100000", "annual_rate": "6.0", "years": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_result(&result, "100000", "133823", "33823");
    assert!(result["result"]["monthly_amount"].is_null());
    assert!(result["schedule"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_fd_same_input_same_output() {
    let body = json!({"calculator": "fd", "principal": "250000", "annual_rate": "7.5", "years": 3});

    let (_, first) = post_calculate(create_router_for_test(), body.clone()).await;
    let (_, second) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(first, second);
    assert_result(&first, "250000", "310574", "60574");
}

// =============================================================================
// SECTION 6: EMI
// =============================================================================

#[tokio::test]
async fn test_emi_ten_year_home_loan() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "emi", "loan_amount": "500000", "annual_rate": "8.0", "tenure_years": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&result["result"]["monthly_amount"]), decimal("6066"));
    assert_result(&result, "500000", "727920", "227920");
    assert_has_audit_rule(&result, "emi_installment");
    assert_has_audit_rule(&result, "emi_totals");
}

#[tokio::test]
async fn test_emi_schedule_repays_loan_exactly() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "emi", "loan_amount": "500000", "annual_rate": "8.0", "tenure_years": 10}),
    )
    .await;

    let schedule = result["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 120);
    assert_eq!(schedule[0]["type"], "amortization");
    assert_eq!(amount(&schedule[0]["principal_paid"]), decimal("2733"));
    assert_eq!(amount(&schedule[0]["interest_paid"]), decimal("3333"));
    assert_eq!(amount(&schedule[0]["outstanding"]), decimal("497267"));

    let repaid: Decimal = schedule.iter().map(|row| amount(&row["principal_paid"])).sum();
    assert_eq!(repaid, decimal("500000"));
    assert_eq!(amount(&schedule[119]["outstanding"]), Decimal::ZERO);
}

// =============================================================================
// SECTION 7: Export
// =============================================================================

#[tokio::test]
async fn test_export_sip_schedule() {
    let (status, csv) = post_export(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": "1000", "annual_rate": "6.0", "years": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Month,Remaining Amount");
    assert_eq!(lines.len(), 13);
    assert!(lines[12].starts_with("12,"));
}

#[tokio::test]
async fn test_export_fd_summary_row() {
    let (status, csv) = post_export(
        create_router_for_test(),
        json!({"calculator": "fd", "principal": "100000", "annual_rate": "6.0", "years": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(csv, "Principal,Maturity Amount,Earnings\n100000,133823,33823\n");
}

#[tokio::test]
async fn test_export_goal_sip_is_rejected() {
    let (status, body) = post_export(
        create_router_for_test(),
        json!({"calculator": "goal_sip", "goal_amount": "500000", "annual_rate": "6.0", "years": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["code"], "NO_SCHEDULE");
}

// =============================================================================
// SECTION 8: Error cases
// =============================================================================

#[tokio::test]
async fn test_rate_below_minimum_is_rejected() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": "1000", "annual_rate": "0", "years": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert_eq!(error["details"], "annual_rate");
}

#[tokio::test]
async fn test_out_of_range_values_are_not_clamped() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "sip", "monthly_investment": "100", "annual_rate": "6.0", "years": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("monthly_investment"));
}

#[tokio::test]
async fn test_unknown_calculator_is_rejected() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "rd", "monthly_investment": "1000", "annual_rate": "6.0", "years": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({"calculator": "swp", "principal": "100000", "annual_rate": "6.0", "years": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_bounds_endpoint_matches_shipped_config() {
    let request = Request::builder()
        .method("GET")
        .uri("/bounds")
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(create_router_for_test(), request).await;
    let bounds: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bounds["currency"]["symbol"], "₹");
    assert_eq!(bounds["bounds"]["fd"]["years"]["max"], 10);
    assert_eq!(amount(&bounds["bounds"]["sip"]["annual_rate"]["min"]), decimal("0.1"));
}
