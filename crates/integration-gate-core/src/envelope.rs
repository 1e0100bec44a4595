// crates/integration-gate-core/src/envelope.rs
// ============================================================================
// Module: Request and Response Envelope
// Description: Normalized request and response wire types.
// Purpose: Define the gateway's single request shape and response envelope.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every inbound call is an [`IntegrationRequest`] and every outcome, success
//! or failure, is a [`NormalizedResponse`]. The envelope is the gateway's
//! central reliability contract: it is well-formed for any input, with the
//! `provider` field echoing the requested identifier even when that identifier
//! is unknown to the registry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::identifiers::AuthScheme;

// ============================================================================
// SECTION: Integration Request
// ============================================================================

/// Normalized inbound request describing one simulated provider call.
///
/// # Invariants
/// - `auth_type` defaults to [`AuthScheme::ApiKey`] when omitted.
/// - `auth_credentials` must be present and structurally complete for
///   `auth_type` before any handler runs; the dispatcher enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationRequest {
    /// Provider action to simulate.
    pub action: String,
    /// Free-form action parameters echoed into canned payloads.
    pub parameters: Map<String, Value>,
    /// Declared authentication scheme.
    #[serde(default)]
    pub auth_type: AuthScheme,
    /// Credential fields for the declared scheme.
    #[serde(default)]
    pub auth_credentials: Option<BTreeMap<String, String>>,
}

// ============================================================================
// SECTION: Normalized Response
// ============================================================================

/// Outcome classification carried in the envelope.
///
/// # Invariants
/// - Wire form is `success` or `error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// The simulated call produced handler data.
    Success,
    /// The request failed; `data` carries an `error` message.
    Error,
}

/// Normalized response wrapper returned for every request.
///
/// # Invariants
/// - `status == error` implies `data.error` is present, optionally with
///   `data.available_actions`.
/// - `status == success` implies `data` carries handler-specific fields.
/// - `provider` echoes the requested identifier verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResponse {
    /// Outcome classification.
    pub status: ResponseStatus,
    /// Handler payload or error shape.
    pub data: Value,
    /// Requested provider identifier, echoed even when unknown.
    pub provider: String,
    /// Requested action, echoed even when unknown.
    pub action: String,
}

impl NormalizedResponse {
    /// Builds a success envelope around handler data.
    #[must_use]
    pub fn success(provider: impl Into<String>, action: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            data,
            provider: provider.into(),
            action: action.into(),
        }
    }

    /// Builds an error envelope around an error-shaped payload.
    #[must_use]
    pub fn error(provider: impl Into<String>, action: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Error,
            data,
            provider: provider.into(),
            action: action.into(),
        }
    }
}

// ============================================================================
// SECTION: Action Descriptor
// ============================================================================

/// Declared action advertised by the actions-listing endpoint.
///
/// # Invariants
/// - `name` matches the handler's dispatch table entry exactly.
/// - Descriptor order is the order handlers report in `available_actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Dispatch-table action name.
    pub name: String,
    /// Human-readable action summary.
    pub description: String,
    /// Parameters the action expects callers to supply.
    pub required_parameters: Vec<String>,
}

impl ActionDescriptor {
    /// Builds a descriptor from static declaration data.
    #[must_use]
    pub fn new(name: &str, description: &str, required_parameters: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required_parameters: required_parameters
                .iter()
                .map(|parameter| (*parameter).to_string())
                .collect(),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
