// crates/integration-gate-server/src/server.rs
// ============================================================================
// Module: Gateway Server
// Description: Axum HTTP server for the mock integration gateway.
// Purpose: Route integrate and actions requests through the core dispatcher.
// Dependencies: integration-gate-core, integration-gate-providers, axum, tokio
// ============================================================================

//! ## Overview
//! The gateway exposes one integrate endpoint per provider plus an
//! actions-listing endpoint, both backed by the immutable handler registry.
//! Status mapping follows one rule: provider-not-found is a routing failure
//! (404); everything after routing is a business outcome carried in the
//! envelope with a 200. Malformed bodies are rejected by the JSON extractor
//! before dispatch runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use integration_gate_core::ActionDescriptor;
use integration_gate_core::DispatchKind;
use integration_gate_core::Dispatcher;
use integration_gate_core::HandlerRegistry;
use integration_gate_core::IntegrationRequest;
use integration_gate_core::NormalizedResponse;
use integration_gate_providers::builtin_registry;
use serde::Serialize;

use crate::config::GatewayConfig;
use crate::telemetry::StderrDispatchLog;

// ============================================================================
// SECTION: Gateway Server
// ============================================================================

/// Gateway server instance.
pub struct GatewayServer {
    /// Server configuration.
    config: GatewayConfig,
    /// Shared route state.
    state: Arc<ServerState>,
}

/// Shared state for route handlers.
struct ServerState {
    /// Dispatch pipeline over the registry.
    dispatcher: Dispatcher,
    /// Registry advertised by the actions-listing and root endpoints.
    registry: Arc<HandlerRegistry>,
}

impl GatewayServer {
    /// Builds a server over the built-in provider registry.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when configuration or registry construction
    /// fails.
    pub fn from_config(config: GatewayConfig) -> Result<Self, ServerError> {
        let registry =
            builtin_registry().map_err(|err| ServerError::Init(err.to_string()))?;
        Self::with_registry(config, registry)
    }

    /// Builds a server over an explicit registry (substitutable for tests).
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when the configuration is invalid.
    pub fn with_registry(
        config: GatewayConfig,
        registry: HandlerRegistry,
    ) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let registry = Arc::new(registry);
        let dispatcher =
            Dispatcher::with_metrics(Arc::clone(&registry), Arc::new(StderrDispatchLog));
        Ok(Self {
            config,
            state: Arc::new(ServerState {
                dispatcher,
                registry,
            }),
        })
    }

    /// Binds the configured address and serves requests until failure.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let addr: SocketAddr = self
            .config
            .bind
            .parse()
            .map_err(|_| ServerError::Config("invalid bind address".to_string()))?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|_| ServerError::Transport("http bind failed".to_string()))?;
        self.serve_with(listener).await
    }

    /// Serves requests on an already-bound listener.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Transport`] when the server fails.
    pub async fn serve_with(self, listener: tokio::net::TcpListener) -> Result<(), ServerError> {
        let app = router(Arc::clone(&self.state), self.config.max_body_bytes);
        axum::serve(listener, app)
            .await
            .map_err(|_| ServerError::Transport("http server failed".to_string()))
    }
}

/// Builds the gateway route table.
fn router(state: Arc<ServerState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/integrate/{provider}", post(handle_integrate))
        .route("/providers/{provider}/actions", get(handle_actions))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

// ============================================================================
// SECTION: Route Payloads
// ============================================================================

/// Root endpoint informational payload.
#[derive(Debug, Serialize)]
struct RootInfo {
    /// Service banner.
    message: &'static str,
    /// Crate version.
    version: &'static str,
    /// Registered provider identifiers.
    available_providers: Vec<&'static str>,
    /// Integrate endpoint template.
    endpoint: &'static str,
    /// Integrate endpoint method.
    method: &'static str,
}

/// Health endpoint payload.
#[derive(Debug, Serialize)]
struct HealthResponse {
    /// Liveness indicator.
    status: &'static str,
    /// Service identifier.
    service: &'static str,
}

/// Actions-listing payload.
#[derive(Debug, Serialize)]
struct ActionsResponse {
    /// Requested provider identifier.
    provider: String,
    /// Declared action descriptors in advertised order.
    actions: Vec<ActionDescriptor>,
}

/// Error body for routing-level failures outside the envelope.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Failure description.
    error: String,
}

// ============================================================================
// SECTION: Route Handlers
// ============================================================================

/// Handles `POST /integrate/{provider}`.
async fn handle_integrate(
    State(state): State<Arc<ServerState>>,
    Path(provider): Path<String>,
    Json(request): Json<IntegrationRequest>,
) -> (StatusCode, Json<NormalizedResponse>) {
    let outcome = state
        .dispatcher
        .dispatch(
            &provider,
            &request.action,
            &request.parameters,
            request.auth_type,
            request.auth_credentials.as_ref(),
        )
        .await;
    let status = match outcome.kind {
        DispatchKind::ProviderNotFound => StatusCode::NOT_FOUND,
        DispatchKind::Success
        | DispatchKind::MissingCredentials
        | DispatchKind::UnknownAction
        | DispatchKind::Internal => StatusCode::OK,
    };
    (status, Json(outcome.response))
}

/// Handles `GET /providers/{provider}/actions`.
async fn handle_actions(
    State(state): State<Arc<ServerState>>,
    Path(provider): Path<String>,
) -> Response {
    match state.registry.actions_for(&provider) {
        Ok(actions) => (StatusCode::OK, Json(ActionsResponse {
            provider,
            actions: actions.to_vec(),
        }))
            .into_response(),
        Err(err) => (StatusCode::NOT_FOUND, Json(ErrorBody {
            error: err.to_string(),
        }))
            .into_response(),
    }
}

/// Handles `GET /`.
async fn handle_root(State(state): State<Arc<ServerState>>) -> Json<RootInfo> {
    Json(RootInfo {
        message: "Integration Gate",
        version: env!("CARGO_PKG_VERSION"),
        available_providers: state.registry.provider_names(),
        endpoint: "/integrate/{provider}",
        method: "POST",
    })
}

/// Handles `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "integration-gate",
    })
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Gateway server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
