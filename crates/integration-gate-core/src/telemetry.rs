// crates/integration-gate-core/src/telemetry.rs
// ============================================================================
// Module: Dispatch Telemetry
// Description: Observability hooks for the dispatch pipeline.
// Purpose: Provide outcome events without hard observability dependencies.
// Dependencies: crate::dispatch
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for dispatch outcomes and
//! latencies. It is intentionally dependency-light so deployments can plug in
//! a real metrics backend without redesign; the default sink discards events.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use crate::dispatch::DispatchKind;

// ============================================================================
// SECTION: Metric Event
// ============================================================================

/// Dispatch metric event payload.
///
/// # Invariants
/// - `provider` and `action` echo the request verbatim, even when unknown.
#[derive(Debug, Clone)]
pub struct DispatchMetricEvent {
    /// Requested provider identifier.
    pub provider: String,
    /// Requested action.
    pub action: String,
    /// Outcome classification.
    pub kind: DispatchKind,
    /// Wall-clock time spent in the pipeline, including simulated delay.
    pub latency: Duration,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for dispatch outcomes.
pub trait DispatchMetrics: Send + Sync {
    /// Records one completed dispatch.
    fn record_dispatch(&self, event: &DispatchMetricEvent);
}

/// No-op metrics sink.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopMetrics;

impl DispatchMetrics for NoopMetrics {
    fn record_dispatch(&self, _event: &DispatchMetricEvent) {}
}
