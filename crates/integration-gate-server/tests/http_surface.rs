// crates/integration-gate-server/tests/http_surface.rs
// ============================================================================
// Module: HTTP Surface Tests
// Description: End-to-end tests over a live listener.
// Purpose: Validate the wire contract a workflow-automation client sees.
// ============================================================================

//! ## Overview
//! Boots the gateway on an ephemeral port with zero-latency handlers and
//! drives it with a real HTTP client. Covers the success path, the status
//! mapping for unknown providers, the order-sensitive round trip between the
//! actions listing and `available_actions`, and the informational endpoints.

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

use integration_gate_providers::builtin_registry_with_delay;
use integration_gate_server::GatewayConfig;
use integration_gate_server::GatewayServer;
use serde_json::Value;
use serde_json::json;

/// Boots a gateway on an ephemeral port and returns its base URL.
async fn spawn_gateway() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let registry = builtin_registry_with_delay(Duration::ZERO).unwrap();
    let server = GatewayServer::with_registry(GatewayConfig::default(), registry).unwrap();
    tokio::spawn(server.serve_with(listener));
    format!("http://{addr}")
}

#[tokio::test]
async fn integrate_salesforce_create_lead_succeeds() {
    let base = spawn_gateway().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/integrate/salesforce"))
        .json(&json!({
            "action": "create_lead",
            "parameters": {"email": "a@b.com", "company": "Acme"},
            "auth_type": "api_key",
            "auth_credentials": {"api_key": "k"},
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["provider"], "salesforce");
    assert_eq!(body["action"], "create_lead");
    assert_eq!(body["data"]["email"], "a@b.com");
    assert_eq!(body["data"]["company"], "Acme");
    assert!(body["data"]["id"].as_str().is_some());
}

#[tokio::test]
async fn integrate_without_access_token_returns_error_envelope() {
    let base = spawn_gateway().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/integrate/ups"))
        .json(&json!({
            "action": "track_package",
            "parameters": {"tracking_number": "1Z999AA1234567890"},
            "auth_type": "oauth",
            "auth_credentials": {},
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["provider"], "ups");
    assert_eq!(body["action"], "track_package");
    assert!(body["data"]["error"].as_str().unwrap().contains("access_token"));
}

#[tokio::test]
async fn integrate_unknown_provider_returns_404_envelope() {
    let base = spawn_gateway().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/integrate/fedex"))
        .json(&json!({
            "action": "ship",
            "parameters": {},
            "auth_type": "api_key",
            "auth_credentials": {"api_key": "k"},
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert!(body["data"]["error"].as_str().unwrap().contains("fedex"));
}

#[tokio::test]
async fn available_actions_round_trip_with_actions_listing() {
    let base = spawn_gateway().await;
    let client = reqwest::Client::new();
    let listing: Value = client
        .get(format!("{base}/providers/ups/actions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let declared: Vec<Value> = listing["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|action| action["name"].clone())
        .collect();

    let error: Value = client
        .post(format!("{base}/integrate/ups"))
        .json(&json!({
            "action": "fold_boxes",
            "parameters": {},
            "auth_type": "api_key",
            "auth_credentials": {"api_key": "k"},
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(error["data"]["available_actions"], Value::Array(declared));
}

#[tokio::test]
async fn actions_listing_unknown_provider_returns_404() {
    let base = spawn_gateway().await;
    let response =
        reqwest::get(format!("{base}/providers/fedex/actions")).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn root_and_health_are_informational() {
    let base = spawn_gateway().await;
    let root: Value = reqwest::get(format!("{base}/")).await.unwrap().json().await.unwrap();
    assert_eq!(root["message"], "Integration Gate");
    assert_eq!(root["available_providers"], json!(["salesforce", "ups"]));

    let health: Value =
        reqwest::get(format!("{base}/health")).await.unwrap().json().await.unwrap();
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn malformed_body_is_rejected_before_dispatch() {
    let base = spawn_gateway().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/integrate/salesforce"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}
