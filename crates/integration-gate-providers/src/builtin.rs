// crates/integration-gate-providers/src/builtin.rs
// ============================================================================
// Module: Built-in Registry Construction
// Description: Registers the built-in handlers and their declared actions.
// Purpose: Produce the process-wide registry from one declaration source.
// Dependencies: integration-gate-core
// ============================================================================

//! ## Overview
//! Builds the [`HandlerRegistry`] populated at process start. Descriptors and
//! the handlers' unknown-action listings both derive from the
//! [`SALESFORCE_ACTIONS`] and [`UPS_ACTIONS`] tables, so the actions-listing
//! endpoint and error envelopes can never drift apart.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use integration_gate_core::ActionDescriptor;
use integration_gate_core::HandlerRegistry;
use integration_gate_core::Provider;
use integration_gate_core::RegistryError;

use crate::salesforce::SALESFORCE_ACTIONS;
use crate::salesforce::SalesforceHandler;
use crate::ups::UPS_ACTIONS;
use crate::ups::UpsHandler;

// ============================================================================
// SECTION: Action Declarations
// ============================================================================

/// Declared Salesforce action descriptors in advertised order.
#[must_use]
pub fn salesforce_actions() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::new(
            SALESFORCE_ACTIONS[0],
            "Create a new lead in Salesforce",
            &["email", "company"],
        ),
        ActionDescriptor::new(
            SALESFORCE_ACTIONS[1],
            "Update an existing contact",
            &["contact_id", "email"],
        ),
        ActionDescriptor::new(
            SALESFORCE_ACTIONS[2],
            "Retrieve account information",
            &["account_id"],
        ),
    ]
}

/// Declared UPS action descriptors in advertised order.
#[must_use]
pub fn ups_actions() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::new(
            UPS_ACTIONS[0],
            "Track a package by tracking number",
            &["tracking_number"],
        ),
        ActionDescriptor::new(
            UPS_ACTIONS[1],
            "Calculate shipping rates",
            &["origin_zip", "destination_zip", "weight"],
        ),
        ActionDescriptor::new(
            UPS_ACTIONS[2],
            "Create a new shipment",
            &["origin_address", "destination_address", "weight"],
        ),
    ]
}

// ============================================================================
// SECTION: Registry Construction
// ============================================================================

/// Builds the registry with built-in handlers at their default latencies.
///
/// # Errors
///
/// Returns [`RegistryError`] when a provider registers twice; with the fixed
/// built-in set this indicates a declaration bug.
pub fn builtin_registry() -> Result<HandlerRegistry, RegistryError> {
    let mut registry = HandlerRegistry::new();
    registry.register(Provider::Salesforce, Arc::new(SalesforceHandler::new()), salesforce_actions())?;
    registry.register(Provider::Ups, Arc::new(UpsHandler::new()), ups_actions())?;
    Ok(registry)
}

/// Builds the registry with an explicit handler latency (zero for tests).
///
/// # Errors
///
/// Returns [`RegistryError`] when a provider registers twice.
pub fn builtin_registry_with_delay(delay: Duration) -> Result<HandlerRegistry, RegistryError> {
    let mut registry = HandlerRegistry::new();
    registry.register(
        Provider::Salesforce,
        Arc::new(SalesforceHandler::with_delay(delay)),
        salesforce_actions(),
    )?;
    registry.register(Provider::Ups, Arc::new(UpsHandler::with_delay(delay)), ups_actions())?;
    Ok(registry)
}
