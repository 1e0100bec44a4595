// crates/integration-gate-providers/src/lib.rs
// ============================================================================
// Module: Integration Gate Providers
// Description: Built-in simulated provider handlers and registry construction.
// Purpose: Provide the gateway's canned provider implementations.
// Dependencies: integration-gate-core, serde_json, tokio
// ============================================================================

//! ## Overview
//! This crate ships the built-in simulated providers (salesforce, ups) and the
//! builder that registers them into a [`integration_gate_core::HandlerRegistry`].
//! Handlers are deterministic with respect to the supplied parameters: the
//! same request always yields the same payload bytes. The only suspension
//! point is a fixed per-provider delay emulating network latency.
//! Invariants:
//! - Each handler's unknown-action listing and its registry descriptors are
//!   sourced from the same declared action table.
//! - No handler contacts any real external system.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod builtin;
pub mod salesforce;
pub mod ups;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builtin::builtin_registry;
pub use builtin::builtin_registry_with_delay;
pub use builtin::salesforce_actions;
pub use builtin::ups_actions;
pub use salesforce::SALESFORCE_ACTIONS;
pub use salesforce::SalesforceHandler;
pub use ups::UPS_ACTIONS;
pub use ups::UpsHandler;
