// crates/integration-gate-providers/src/ups.rs
// ============================================================================
// Module: UPS Handler
// Description: Simulated UPS shipping API handler.
// Purpose: Produce canned carrier payloads for the declared action set.
// Dependencies: integration-gate-core, serde_json, tokio
// ============================================================================

//! ## Overview
//! Simulates a UPS shipping integration. Tracking, rating, and shipment
//! creation all return canned payloads that echo caller parameters where the
//! real API would. The UPS dispatch table is unrelated to the Salesforce one;
//! the two handlers share no base action set.

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

/// Declared UPS actions in advertised order.
pub const UPS_ACTIONS: [&str; 3] = ["track_package", "calculate_shipping", "create_shipment"];

/// Fixed simulated latency for UPS calls.
const UPS_DELAY: Duration = Duration::from_millis(400);

// ============================================================================
// SECTION: Handler
// ============================================================================

/// Simulated UPS shipping API handler.
///
/// # Invariants
/// - Payloads are deterministic for identical parameters.
/// - The unknown-action listing matches [`UPS_ACTIONS`] exactly.
pub struct UpsHandler {
    /// Simulated latency applied to every call.
    delay: Duration,
}

impl UpsHandler {
    /// Creates a handler with the default simulated latency.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: UPS_DELAY,
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

impl Default for UpsHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderHandler for UpsHandler {
    async fn handle(
        &self,
        action: &str,
        parameters: &Map<String, Value>,
        _credentials: Option<&BTreeMap<String, String>>,
    ) -> Result<HandlerResult, HandlerFailure> {
        tokio::time::sleep(self.delay).await;
        let payload = match action {
            "track_package" => track_package(parameters),
            "calculate_shipping" => calculate_shipping(parameters),
            "create_shipment" => create_shipment(),
            _ => {
                return Ok(HandlerResult::UnknownAction {
                    message: format!("Unknown ups action: {action}"),
                    available_actions: UPS_ACTIONS.iter().map(|name| (*name).to_string()).collect(),
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

/// Canned payload for `track_package`.
fn track_package(parameters: &Map<String, Value>) -> Value {
    json!({
        "tracking_number": param_or(parameters, "tracking_number", "1Z999AA1234567890"),
        "status": "In Transit",
        "location": "Memphis, TN",
        "estimated_delivery": "2024-01-18T14:00:00Z",
        "shipment_details": {
            "weight": "2.5 lbs",
            "service": "Ground",
            "origin": "New York, NY",
            "destination": "Los Angeles, CA",
        },
    })
}

/// Canned payload for `calculate_shipping`.
fn calculate_shipping(parameters: &Map<String, Value>) -> Value {
    json!({
        "origin_zip": param_or(parameters, "origin_zip", "10001"),
        "destination_zip": param_or(parameters, "destination_zip", "90210"),
        "weight": param_or(parameters, "weight", "5.0"),
        "service": param_or(parameters, "service", "Ground"),
        "rate": 15.99,
        "delivery_days": 5,
    })
}

/// Canned payload for `create_shipment`.
fn create_shipment() -> Value {
    json!({
        "shipment_id": "UPS123456789",
        "tracking_number": "1Z999AA1234567890",
        "label_url": "https://api.ups.com/labels/123456789.pdf",
        "rate": 25.50,
        "estimated_delivery": "2024-01-18T14:00:00Z",
    })
}
