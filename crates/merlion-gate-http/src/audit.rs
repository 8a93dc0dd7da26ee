// crates/merlion-gate-http/src/audit.rs
// ============================================================================
// Module: Trust Audit Logging
// Description: Structured audit events for requester trust decisions.
// Purpose: Emit trust decision logs without hard dependencies.
// Dependencies: merlion-gate-core, serde
// ============================================================================

//! ## Overview
//! This module defines audit event payloads and sinks for trust decision
//! logging. Every requester authorization (trusted, untrusted, or anonymous)
//! produces one event. It is intentionally lightweight so deployments can
//! route events to their preferred logging pipeline without redesign.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use merlion_gate_core::RequesterDecision;
use serde::Serialize;

use crate::telemetry::AgentEndpoint;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Trust decision audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct TrustAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Path label of the endpoint that evaluated the requester.
    pub endpoint: &'static str,
    /// Requester identifier as claimed, when one was supplied.
    pub requester: Option<String>,
    /// Decision label (`trusted`, `untrusted`, `anonymous`).
    pub decision: &'static str,
    /// Rejection reason; present only for untrusted decisions.
    pub reason: Option<&'static str>,
    /// Trust level of a resolved requester; populated in debug mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_level: Option<String>,
}

impl TrustAuditEvent {
    /// Creates an audit event for one requester decision.
    #[must_use]
    pub fn new(endpoint: AgentEndpoint, decision: &RequesterDecision) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let requester = match decision {
            RequesterDecision::Anonymous => None,
            RequesterDecision::Trusted(id) => Some(id.as_str().to_string()),
            RequesterDecision::Untrusted {
                requester,
            } => Some(requester.clone()),
        };
        let reason = match decision {
            RequesterDecision::Anonymous | RequesterDecision::Trusted(_) => None,
            RequesterDecision::Untrusted {
                ..
            } => Some("not in registry"),
        };
        Self {
            event: "trust_decision",
            timestamp_ms,
            endpoint: endpoint.as_str(),
            requester,
            decision: decision.as_str(),
            reason,
            trust_level: None,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for trust decision events.
pub trait TrustAuditSink: Send + Sync {
    /// Records an audit event.
    fn record(&self, event: &TrustAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrTrustAuditSink;

impl TrustAuditSink for StderrTrustAuditSink {
    fn record(&self, event: &TrustAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// No-op audit sink.
pub struct NoopTrustAuditSink;

impl TrustAuditSink for NoopTrustAuditSink {
    fn record(&self, _event: &TrustAuditEvent) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================
