// crates/integration-gate-core/src/lib.rs
// ============================================================================
// Module: Integration Gate Core Library
// Description: Public API surface for the Integration Gate core.
// Purpose: Expose dispatch, registry, auth, and envelope types.
// Dependencies: crate::{auth, dispatch, envelope, identifiers, interfaces, registry, telemetry}
// ============================================================================

//! ## Overview
//! Integration Gate core provides deterministic provider dispatch for a mock
//! integration gateway. It maps provider identifiers to simulated handler
//! implementations, validates authentication scheme structure, and wraps every
//! outcome in a normalized response envelope. No real external system is ever
//! contacted; handlers return canned, deterministic payloads.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod dispatch;
pub mod envelope;
pub mod identifiers;
pub mod interfaces;
pub mod registry;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use auth::AuthError;
pub use auth::validate_credentials;
pub use dispatch::DispatchKind;
pub use dispatch::DispatchOutcome;
pub use dispatch::Dispatcher;
pub use envelope::ActionDescriptor;
pub use envelope::IntegrationRequest;
pub use envelope::NormalizedResponse;
pub use envelope::ResponseStatus;
pub use identifiers::AuthScheme;
pub use identifiers::Provider;
pub use interfaces::HandlerFailure;
pub use interfaces::HandlerResult;
pub use interfaces::ProviderHandler;
pub use registry::HandlerRegistry;
pub use registry::RegistryError;
pub use telemetry::DispatchMetricEvent;
pub use telemetry::DispatchMetrics;
pub use telemetry::NoopMetrics;
