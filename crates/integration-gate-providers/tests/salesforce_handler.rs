// crates/integration-gate-providers/tests/salesforce_handler.rs
// ============================================================================
// Module: Salesforce Handler Tests
// Description: Unit tests for the simulated Salesforce action table.
// Purpose: Pin the canned payload shapes and unknown-action behavior.
// ============================================================================

//! ## Overview
//! Exercises each declared Salesforce action with and without parameters, and
//! confirms the unknown-action listing matches the declared table in order.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::time::Duration;

use integration_gate_core::HandlerResult;
use integration_gate_core::ProviderHandler;
use integration_gate_providers::SALESFORCE_ACTIONS;
use integration_gate_providers::SalesforceHandler;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

/// Builds a zero-latency handler for fast tests.
fn handler() -> SalesforceHandler {
    SalesforceHandler::with_delay(Duration::ZERO)
}

/// Builds a parameter map from key/value JSON pairs.
fn parameters(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs.iter().map(|(key, value)| ((*key).to_string(), value.clone())).collect()
}

/// Runs an action and unwraps the payload variant.
async fn payload(action: &str, params: &Map<String, Value>) -> Value {
    match handler().handle(action, params, None).await.unwrap() {
        HandlerResult::Payload(data) => data,
        HandlerResult::UnknownAction {
            message, ..
        } => panic!("expected payload, got unknown action: {message}"),
    }
}

#[tokio::test]
async fn create_lead_echoes_email_and_company() {
    let params = parameters(&[("email", json!("test@example.com")), ("company", json!("Test Corp"))]);
    let data = payload("create_lead", &params).await;
    assert_eq!(data["email"], "test@example.com");
    assert_eq!(data["company"], "Test Corp");
    assert_eq!(data["status"], "New");
    assert_eq!(data["id"], "00Q1234567890ABC");
    assert!(data.get("created_date").is_some());
}

#[tokio::test]
async fn create_lead_applies_defaults_when_parameters_absent() {
    let data = payload("create_lead", &Map::new()).await;
    assert_eq!(data["email"], "test@example.com");
    assert_eq!(data["company"], "Test Company");
}

#[tokio::test]
async fn update_contact_echoes_identifiers() {
    let params = parameters(&[
        ("contact_id", json!("0031234567890ABC")),
        ("email", json!("updated@example.com")),
        ("phone", json!("+1234567890")),
    ]);
    let data = payload("update_contact", &params).await;
    assert_eq!(data["id"], "0031234567890ABC");
    assert_eq!(data["email"], "updated@example.com");
    assert_eq!(data["phone"], "+1234567890");
    assert!(data.get("last_modified").is_some());
}

#[tokio::test]
async fn get_account_returns_fixed_profile() {
    let params = parameters(&[("account_id", json!("001XYZ"))]);
    let data = payload("get_account", &params).await;
    assert_eq!(data["id"], "001XYZ");
    assert_eq!(data["name"], "Acme Corporation");
    assert_eq!(data["industry"], "Technology");
    assert_eq!(data["annual_revenue"], 1_000_000);
    assert_eq!(data["employees"], 500);
}

#[tokio::test]
async fn unknown_action_lists_declared_table_in_order() {
    let result = handler().handle("delete_everything", &Map::new(), None).await.unwrap();
    let HandlerResult::UnknownAction {
        message,
        available_actions,
    } = result
    else {
        panic!("expected unknown action");
    };
    assert!(message.contains("delete_everything"));
    assert_eq!(available_actions, SALESFORCE_ACTIONS.map(str::to_string).to_vec());
}

#[tokio::test]
async fn repeated_calls_are_byte_identical() {
    let params = parameters(&[("email", json!("a@b.com"))]);
    let first = serde_json::to_vec(&payload("create_lead", &params).await).unwrap();
    let second = serde_json::to_vec(&payload("create_lead", &params).await).unwrap();
    assert_eq!(first, second);
}
