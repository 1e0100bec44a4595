// crates/integration-gate-core/src/dispatch.rs
// ============================================================================
// Module: Dispatcher
// Description: Fail-fast orchestration of the provider dispatch pipeline.
// Purpose: Resolve, validate, invoke, and wrap every outcome in the envelope.
// Dependencies: crate::{auth, envelope, registry, telemetry}, serde_json
// ============================================================================

//! ## Overview
//! The dispatcher is the single point guaranteeing the envelope contract: no
//! failure path escapes as an error. The pipeline is linear and fail-fast —
//! registry resolution, then structural auth validation, then handler
//! invocation — with a defensive conversion of unexpected handler failures
//! into `internal error` envelopes. There are no retries and no partial
//! results; handlers are simulated and deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::auth::AuthError;
use crate::auth::validate_credentials;
use crate::envelope::NormalizedResponse;
use crate::identifiers::AuthScheme;
use crate::interfaces::HandlerResult;
use crate::registry::HandlerRegistry;
use crate::telemetry::DispatchMetricEvent;
use crate::telemetry::DispatchMetrics;
use crate::telemetry::NoopMetrics;

// ============================================================================
// SECTION: Dispatch Outcome
// ============================================================================

/// Outcome classification for a completed dispatch.
///
/// Transport collaborators use this to choose a status mapping without
/// re-parsing the envelope; it is also the telemetry outcome label.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchKind {
    /// The handler produced canned data.
    Success,
    /// The provider identifier is not in the registry.
    ProviderNotFound,
    /// The declared auth scheme's required fields were absent or empty.
    MissingCredentials,
    /// The handler has no dispatch entry for the action.
    UnknownAction,
    /// Defensive conversion of an unexpected handler failure.
    Internal,
}

impl DispatchKind {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ProviderNotFound => "provider_not_found",
            Self::MissingCredentials => "missing_credentials",
            Self::UnknownAction => "unknown_action",
            Self::Internal => "internal",
        }
    }
}

/// Completed dispatch: the envelope plus its outcome classification.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Normalized envelope returned to the caller.
    pub response: NormalizedResponse,
    /// Outcome classification for status mapping and telemetry.
    pub kind: DispatchKind,
}

// ============================================================================
// SECTION: Dispatcher
// ============================================================================

/// Orchestrates the provider dispatch pipeline.
///
/// # Invariants
/// - Every input produces a well-formed [`NormalizedResponse`].
/// - The registry is read-only; the dispatcher never mutates shared state.
pub struct Dispatcher {
    /// Provider-to-handler mapping, populated at startup.
    registry: Arc<HandlerRegistry>,
    /// Sink receiving one event per completed dispatch.
    metrics: Arc<dyn DispatchMetrics>,
}

impl Dispatcher {
    /// Creates a dispatcher with a discarding metrics sink.
    #[must_use]
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self::with_metrics(registry, Arc::new(NoopMetrics))
    }

    /// Creates a dispatcher with an explicit metrics sink.
    #[must_use]
    pub fn with_metrics(registry: Arc<HandlerRegistry>, metrics: Arc<dyn DispatchMetrics>) -> Self {
        Self {
            registry,
            metrics,
        }
    }

    /// Runs the dispatch pipeline for one request.
    ///
    /// The `provider` identifier is taken raw so unknown identifiers can be
    /// echoed back in the envelope.
    pub async fn dispatch(
        &self,
        provider: &str,
        action: &str,
        parameters: &Map<String, Value>,
        auth_type: AuthScheme,
        auth_credentials: Option<&BTreeMap<String, String>>,
    ) -> DispatchOutcome {
        let started = Instant::now();
        let outcome =
            self.run_pipeline(provider, action, parameters, auth_type, auth_credentials).await;
        self.metrics.record_dispatch(&DispatchMetricEvent {
            provider: provider.to_string(),
            action: action.to_string(),
            kind: outcome.kind,
            latency: started.elapsed(),
        });
        outcome
    }

    /// Linear fail-fast pipeline: resolve, validate, invoke, wrap.
    async fn run_pipeline(
        &self,
        provider: &str,
        action: &str,
        parameters: &Map<String, Value>,
        auth_type: AuthScheme,
        auth_credentials: Option<&BTreeMap<String, String>>,
    ) -> DispatchOutcome {
        let (_resolved, handler) = match self.registry.resolve(provider) {
            Ok(entry) => entry,
            Err(err) => {
                return DispatchOutcome {
                    response: NormalizedResponse::error(provider, action, json!({
                        "error": err.to_string(),
                        "supported_providers": self.registry.provider_names(),
                    })),
                    kind: DispatchKind::ProviderNotFound,
                };
            }
        };

        if let Err(err) = validate_credentials(auth_type, auth_credentials) {
            let AuthError::MissingCredentials {
                ref missing, ..
            } = err;
            return DispatchOutcome {
                response: NormalizedResponse::error(provider, action, json!({
                    "error": err.to_string(),
                    "missing": missing,
                })),
                kind: DispatchKind::MissingCredentials,
            };
        }

        match handler.handle(action, parameters, auth_credentials).await {
            Ok(HandlerResult::Payload(data)) => DispatchOutcome {
                response: NormalizedResponse::success(provider, action, data),
                kind: DispatchKind::Success,
            },
            Ok(HandlerResult::UnknownAction {
                message,
                available_actions,
            }) => DispatchOutcome {
                response: NormalizedResponse::error(provider, action, json!({
                    "error": message,
                    "available_actions": available_actions,
                })),
                kind: DispatchKind::UnknownAction,
            },
            Err(failure) => DispatchOutcome {
                response: NormalizedResponse::error(provider, action, json!({
                    "error": format!("internal error: {failure}"),
                })),
                kind: DispatchKind::Internal,
            },
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
