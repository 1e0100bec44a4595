// crates/integration-gate-server/src/telemetry.rs
// ============================================================================
// Module: Server Telemetry
// Description: Stderr-backed dispatch metrics sink.
// Purpose: Surface defensive internal-failure logs without hard deps.
// Dependencies: integration-gate-core
// ============================================================================

//! ## Overview
//! The gateway's only observability obligation is defensive: internal handler
//! failures are converted to envelopes and must leave a trace somewhere. This
//! sink writes them to stderr; every other outcome is discarded. Deployments
//! wanting real metrics can install their own
//! [`integration_gate_core::DispatchMetrics`] implementation instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use integration_gate_core::DispatchKind;
use integration_gate_core::DispatchMetricEvent;
use integration_gate_core::DispatchMetrics;

// ============================================================================
// SECTION: Stderr Sink
// ============================================================================

/// Dispatch metrics sink logging internal failures to stderr.
///
/// # Invariants
/// - Only [`DispatchKind::Internal`] events produce output.
pub struct StderrDispatchLog;

impl DispatchMetrics for StderrDispatchLog {
    #[allow(clippy::print_stderr, reason = "Stderr is this sink's output channel.")]
    fn record_dispatch(&self, event: &DispatchMetricEvent) {
        if event.kind == DispatchKind::Internal {
            eprintln!(
                "integration-gate: internal handler failure for {}/{} after {}ms",
                event.provider,
                event.action,
                event.latency.as_millis()
            );
        }
    }
}
