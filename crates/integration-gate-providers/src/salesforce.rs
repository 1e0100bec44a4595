// crates/integration-gate-providers/src/salesforce.rs
// ============================================================================
// Module: Salesforce Handler
// Description: Simulated Salesforce REST API handler.
// Purpose: Produce canned CRM payloads for the declared action set.
// Dependencies: integration-gate-core, serde_json, tokio
// ============================================================================

//! ## Overview
//! Simulates a Salesforce REST integration. Each action returns a canned,
//! deterministically-shaped payload that echoes caller parameters where the
//! real API would, falling back to fixed defaults. Identifiers and timestamps
//! are constants so repeated calls are byte-identical.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use integration_gate_core::HandlerFailure;
use integration_gate_core::HandlerResult;
use integration_gate_core::ProviderHandler;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Declared Salesforce actions in advertised order.
pub const SALESFORCE_ACTIONS: [&str; 3] = ["create_lead", "update_contact", "get_account"];

/// Fixed simulated latency for Salesforce calls.
const SALESFORCE_DELAY: Duration = Duration::from_millis(250);

// ============================================================================
// SECTION: Handler
// ============================================================================

/// Simulated Salesforce REST API handler.
///
/// # Invariants
/// - Payloads are deterministic for identical parameters.
/// - The unknown-action listing matches [`SALESFORCE_ACTIONS`] exactly.
pub struct SalesforceHandler {
    /// Simulated latency applied to every call.
    delay: Duration,
}

impl SalesforceHandler {
    /// Creates a handler with the default simulated latency.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: SALESFORCE_DELAY,
        }
    }

    /// Creates a handler with an explicit latency (zero for tests).
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
        }
    }
}

impl Default for SalesforceHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderHandler for SalesforceHandler {
    async fn handle(
        &self,
        action: &str,
        parameters: &Map<String, Value>,
        _credentials: Option<&BTreeMap<String, String>>,
    ) -> Result<HandlerResult, HandlerFailure> {
        tokio::time::sleep(self.delay).await;
        let payload = match action {
            "create_lead" => create_lead(parameters),
            "update_contact" => update_contact(parameters),
            "get_account" => get_account(parameters),
            _ => {
                return Ok(HandlerResult::UnknownAction {
                    message: format!("Unknown salesforce action: {action}"),
                    available_actions: SALESFORCE_ACTIONS
                        .iter()
                        .map(|name| (*name).to_string())
                        .collect(),
                });
            }
        };
        Ok(HandlerResult::Payload(payload))
    }
}

// ============================================================================
// SECTION: Canned Payloads
// ============================================================================

/// Echoes a parameter or substitutes a fixed default.
fn param_or(parameters: &Map<String, Value>, key: &str, default: &str) -> Value {
    parameters.get(key).cloned().unwrap_or_else(|| Value::String(default.to_string()))
}

/// Canned payload for `create_lead`.
fn create_lead(parameters: &Map<String, Value>) -> Value {
    json!({
        "id": "00Q1234567890ABC",
        "email": param_or(parameters, "email", "test@example.com"),
        "company": param_or(parameters, "company", "Test Company"),
        "status": "New",
        "created_date": "2024-01-15T10:30:00Z",
    })
}

/// Canned payload for `update_contact`.
fn update_contact(parameters: &Map<String, Value>) -> Value {
    json!({
        "id": param_or(parameters, "contact_id", "0031234567890ABC"),
        "email": param_or(parameters, "email", "updated@example.com"),
        "phone": param_or(parameters, "phone", "+1234567890"),
        "last_modified": "2024-01-15T10:30:00Z",
    })
}

/// Canned payload for `get_account`.
fn get_account(parameters: &Map<String, Value>) -> Value {
    json!({
        "id": param_or(parameters, "account_id", "0011234567890ABC"),
        "name": "Acme Corporation",
        "industry": "Technology",
        "annual_revenue": 1_000_000,
        "employees": 500,
    })
}
