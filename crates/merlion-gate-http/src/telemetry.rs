// crates/merlion-gate-http/src/telemetry.rs
// ============================================================================
// Module: Endpoint Telemetry
// Description: Observability hooks for endpoint request outcomes.
// Purpose: Provide metric events without hard dependencies.
// Dependencies: merlion-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for endpoint request
//! counters. It is intentionally dependency-light so deployments can plug in
//! Prometheus or OpenTelemetry without redesign; the default sink discards
//! everything, and debug deployments get a stderr sink emitting one JSON
//! line per request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use merlion_gate_core::DispatchError;
use serde::Serialize;

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Agent endpoint classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum AgentEndpoint {
    /// Root listing endpoint.
    Root,
    /// Hawker centre lookup endpoint.
    Hawker,
    /// PSI air-quality endpoint.
    Psi,
    /// Tourist attraction endpoint.
    Merlion,
}

impl AgentEndpoint {
    /// Returns a stable label for the endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Hawker => "/hawker",
            Self::Psi => "/psi",
            Self::Merlion => "/merlion",
        }
    }
}

/// Request outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum RequestOutcome {
    /// Successful request.
    Ok,
    /// Required parameter absent or empty.
    MissingParameter,
    /// Requester supplied but not trusted.
    UntrustedRequester,
    /// Unexpected internal failure.
    Internal,
}

impl RequestOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::MissingParameter => "missing_parameter",
            Self::UntrustedRequester => "untrusted_requester",
            Self::Internal => "internal",
        }
    }

    /// Classifies a dispatch error into its outcome label.
    #[must_use]
    pub const fn from_error(error: &DispatchError) -> Self {
        match error {
            DispatchError::MissingParameter {
                ..
            } => Self::MissingParameter,
            DispatchError::UntrustedRequester {
                ..
            } => Self::UntrustedRequester,
            DispatchError::Internal => Self::Internal,
        }
    }
}

/// Endpoint request metric event payload.
#[derive(Debug, Clone, Copy)]
pub struct EndpointMetricEvent {
    /// Endpoint handling the request.
    pub endpoint: AgentEndpoint,
    /// Request outcome.
    pub outcome: RequestOutcome,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for endpoint requests.
pub trait EndpointMetrics: Send + Sync {
    /// Records a request counter event.
    fn record_request(&self, event: EndpointMetricEvent);
}

/// No-op metrics sink.
///
/// # Invariants
/// - Metrics are intentionally discarded.
pub struct NoopEndpointMetrics;

impl EndpointMetrics for NoopEndpointMetrics {
    fn record_request(&self, _event: EndpointMetricEvent) {}
}

/// Request counter line emitted by the stderr metrics sink.
#[derive(Debug, Clone, Serialize)]
struct EndpointRequestLine {
    /// Event identifier.
    event: &'static str,
    /// Endpoint path label.
    endpoint: &'static str,
    /// Outcome label.
    outcome: &'static str,
}

/// Metrics sink that logs request counters as JSON lines to stderr.
pub struct StderrEndpointMetrics;

impl EndpointMetrics for StderrEndpointMetrics {
    fn record_request(&self, event: EndpointMetricEvent) {
        let line = EndpointRequestLine {
            event: "endpoint_request",
            endpoint: event.endpoint.as_str(),
            outcome: event.outcome.as_str(),
        };
        if let Ok(payload) = serde_json::to_string(&line) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
