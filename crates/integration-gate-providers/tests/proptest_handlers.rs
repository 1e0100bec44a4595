// crates/integration-gate-providers/tests/proptest_handlers.rs
// ============================================================================
// Module: Handler Property-Based Tests
// Description: Fuzz-like checks for action names and parameter values.
// Purpose: Ensure handlers are deterministic and never panic on any input.
// ============================================================================

//! ## Overview
//! Handlers consume caller-supplied action names and parameter maps. These
//! tests feed random inputs through both built-in handlers to confirm they
//! never panic, that unknown actions always carry the full declared table,
//! and that identical inputs produce byte-identical payloads.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use std::time::Duration;

use integration_gate_core::HandlerResult;
use integration_gate_core::ProviderHandler;
use integration_gate_providers::SALESFORCE_ACTIONS;
use integration_gate_providers::SalesforceHandler;
use integration_gate_providers::UPS_ACTIONS;
use integration_gate_providers::UpsHandler;
use proptest::prelude::*;
use serde_json::Map;
use serde_json::Value;

/// Runs a handler call to completion on a throwaway runtime.
fn run(handler: &dyn ProviderHandler, action: &str, params: &Map<String, Value>) -> HandlerResult {
    let runtime =
        tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
    runtime.block_on(handler.handle(action, params, None)).unwrap()
}

/// Strategy producing arbitrary string parameter maps.
fn parameter_maps() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map(".{1,12}", ".{0,24}", 0..6).prop_map(|map| {
        map.into_iter().map(|(key, value)| (key, Value::String(value))).collect()
    })
}

proptest! {
    #[test]
    fn salesforce_handles_random_actions_without_panic(
        action in ".{0,32}",
        params in parameter_maps(),
    ) {
        let handler = SalesforceHandler::with_delay(Duration::ZERO);
        if let HandlerResult::UnknownAction { available_actions, .. } =
            run(&handler, &action, &params)
        {
            prop_assert_eq!(available_actions, SALESFORCE_ACTIONS.map(str::to_string).to_vec());
        }
    }

    #[test]
    fn ups_handles_random_actions_without_panic(
        action in ".{0,32}",
        params in parameter_maps(),
    ) {
        let handler = UpsHandler::with_delay(Duration::ZERO);
        if let HandlerResult::UnknownAction { available_actions, .. } =
            run(&handler, &action, &params)
        {
            prop_assert_eq!(available_actions, UPS_ACTIONS.map(str::to_string).to_vec());
        }
    }

    #[test]
    fn declared_actions_are_deterministic(params in parameter_maps()) {
        let salesforce = SalesforceHandler::with_delay(Duration::ZERO);
        let ups = UpsHandler::with_delay(Duration::ZERO);
        for action in SALESFORCE_ACTIONS {
            let first = run(&salesforce, action, &params);
            let second = run(&salesforce, action, &params);
            prop_assert_eq!(first, second);
        }
        for action in UPS_ACTIONS {
            let first = run(&ups, action, &params);
            let second = run(&ups, action, &params);
            prop_assert_eq!(first, second);
        }
    }
}
