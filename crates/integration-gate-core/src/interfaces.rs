// crates/integration-gate-core/src/interfaces.rs
// ============================================================================
// Module: Provider Handler Interface
// Description: Capability trait implemented by each simulated provider.
// Purpose: Define the contract surface between the dispatcher and handlers.
// Dependencies: async-trait, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Each provider is an independent implementation of [`ProviderHandler`];
//! there is no shared base action set across providers. Implementations must
//! be deterministic with respect to their inputs and may suspend (to simulate
//! network latency) but never block the runtime.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Handler Result
// ============================================================================

/// Outcome of a handler action dispatch.
///
/// # Invariants
/// - `Payload` carries a JSON object of handler-specific result fields.
/// - `UnknownAction` lists the handler's full declared action set in
///   advertised order.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    /// The action matched a dispatch entry and produced canned data.
    Payload(Value),
    /// The action has no dispatch entry.
    UnknownAction {
        /// Error message naming the unknown action.
        message: String,
        /// Every action the handler declares, in advertised order.
        available_actions: Vec<String>,
    },
}

/// Unexpected handler failure.
///
/// Handlers are simulated and deterministic, so this path is defensive; the
/// dispatcher converts it into an error envelope rather than propagating it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HandlerFailure(pub String);

// ============================================================================
// SECTION: Provider Handler
// ============================================================================

/// Capability implemented by each simulated provider.
#[async_trait]
pub trait ProviderHandler: Send + Sync {
    /// Simulates the requested action against the provider.
    ///
    /// Credentials have already passed structural validation when this runs;
    /// handlers receive them only so a future implementation could shape
    /// responses by credential, never to verify them.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerFailure`] only on unexpected internal failure.
    async fn handle(
        &self,
        action: &str,
        parameters: &Map<String, Value>,
        credentials: Option<&BTreeMap<String, String>>,
    ) -> Result<HandlerResult, HandlerFailure>;
}

impl std::fmt::Debug for dyn ProviderHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ProviderHandler")
    }
}
