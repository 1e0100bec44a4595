// crates/integration-gate-server/src/lib.rs
// ============================================================================
// Module: Integration Gate Server
// Description: HTTP surface for the mock integration gateway.
// Purpose: Expose dispatch and actions listing over axum routes.
// Dependencies: integration-gate-core, integration-gate-providers, axum, tokio
// ============================================================================

//! ## Overview
//! This crate wires the core dispatch pipeline to an axum HTTP surface. All
//! business outcomes travel inside the normalized envelope with a 200 status;
//! only routing-level failures (unknown provider, malformed body) surface as
//! 4xx responses.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod server;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::DEFAULT_BIND;
pub use config::DEFAULT_MAX_BODY_BYTES;
pub use config::GatewayConfig;
pub use server::GatewayServer;
pub use server::ServerError;
pub use telemetry::StderrDispatchLog;
