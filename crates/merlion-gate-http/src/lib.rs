// crates/merlion-gate-http/src/lib.rs
// ============================================================================
// Module: Merlion Gate HTTP
// Description: HTTP hosting layer for the agent endpoints.
// Purpose: Dispatch requests through the trust gate and assemble envelopes.
// Dependencies: merlion-gate-core, merlion-gate-agents, axum, tokio
// ============================================================================

//! ## Overview
//! This crate hosts the three agent endpoints behind axum. Handlers are thin
//! wrappers over the per-endpoint dispatchers, which parse parameters, run
//! the opt-in trust gate, invoke the matching domain responder, and assemble
//! the response envelope. The dispatcher boundary is the sole translator
//! from internal outcomes to HTTP status and body.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod config;
pub mod dispatch;
pub mod server;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::NoopTrustAuditSink;
pub use audit::StderrTrustAuditSink;
pub use audit::TrustAuditEvent;
pub use audit::TrustAuditSink;
pub use config::ConfigError;
pub use config::MerlionGateConfig;
pub use config::ServerConfig;
pub use dispatch::DispatchRejection;
pub use server::AgentServer;
pub use server::ServerError;
pub use server::ServerState;
pub use telemetry::AgentEndpoint;
pub use telemetry::EndpointMetricEvent;
pub use telemetry::EndpointMetrics;
pub use telemetry::NoopEndpointMetrics;
pub use telemetry::RequestOutcome;
pub use telemetry::StderrEndpointMetrics;
