// crates/merlion-gate-http/src/server.rs
// ============================================================================
// Module: Agent Server
// Description: Axum hosting layer for the agent endpoints.
// Purpose: Wire the registry, responders, and sinks into the route table.
// Dependencies: merlion-gate-core, merlion-gate-agents, axum, tokio
// ============================================================================

//! ## Overview
//! The agent server owns the immutable registry and the per-endpoint
//! responders, shares them behind one `Arc`, and exposes the GET route table
//! (`/`, `/hawker`, `/psi`, `/merlion`). Handlers are thin async wrappers:
//! every request is an independent, bounded, in-memory computation, so there
//! is no internal locking, no timeouts, and no retry logic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::extract::State;
use axum::routing::get;
use merlion_gate_agents::HawkerResponder;
use merlion_gate_agents::MerlionResponder;
use merlion_gate_agents::PsiResponder;
use merlion_gate_core::AgentRegistry;
use merlion_gate_core::Timestamp;

use crate::audit::NoopTrustAuditSink;
use crate::audit::StderrTrustAuditSink;
use crate::audit::TrustAuditSink;
use crate::config::MerlionGateConfig;
use crate::dispatch::DispatchRejection;
use crate::dispatch::HAWKER_PATH;
use crate::dispatch::HawkerParams;
use crate::dispatch::HawkerResponse;
use crate::dispatch::MERLION_PATH;
use crate::dispatch::MerlionParams;
use crate::dispatch::MerlionResponse;
use crate::dispatch::PSI_PATH;
use crate::dispatch::PsiParams;
use crate::dispatch::PsiResponse;
use crate::dispatch::RootResponse;
use crate::dispatch::dispatch_hawker;
use crate::dispatch::dispatch_merlion;
use crate::dispatch::dispatch_psi;
use crate::dispatch::dispatch_root;
use crate::telemetry::AgentEndpoint;
use crate::telemetry::EndpointMetricEvent;
use crate::telemetry::EndpointMetrics;
use crate::telemetry::NoopEndpointMetrics;
use crate::telemetry::RequestOutcome;
use crate::telemetry::StderrEndpointMetrics;

// ============================================================================
// SECTION: Server State
// ============================================================================

/// Shared state for all endpoint handlers.
///
/// # Invariants
/// - The registry is read-only after construction; concurrent reads are
///   unsynchronized by design.
pub struct ServerState {
    /// Immutable agent registry.
    registry: AgentRegistry,
    /// Hawker domain responder.
    hawker: HawkerResponder,
    /// Psi domain responder.
    psi: PsiResponder,
    /// Merlion domain responder.
    merlion: MerlionResponder,
    /// Trust decision audit sink.
    audit: Arc<dyn TrustAuditSink>,
    /// Endpoint request metrics sink.
    metrics: Arc<dyn EndpointMetrics>,
    /// Debug toggle; widens audit output only, never dispatch semantics.
    debug: bool,
}

impl ServerState {
    /// Builds state over the built-in registry with the given sinks.
    #[must_use]
    pub fn new(
        audit: Arc<dyn TrustAuditSink>,
        metrics: Arc<dyn EndpointMetrics>,
        debug: bool,
    ) -> Self {
        Self {
            registry: AgentRegistry::builtin(),
            hawker: HawkerResponder,
            psi: PsiResponder,
            merlion: MerlionResponder,
            audit,
            metrics,
            debug,
        }
    }

    /// Builds state with discarding sinks, for tests and embedding.
    #[must_use]
    pub fn with_noop_sinks() -> Self {
        Self::new(Arc::new(NoopTrustAuditSink), Arc::new(NoopEndpointMetrics), false)
    }

    /// Returns the agent registry.
    #[must_use]
    pub const fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Returns the hawker responder.
    #[must_use]
    pub const fn hawker(&self) -> &HawkerResponder {
        &self.hawker
    }

    /// Returns the psi responder.
    #[must_use]
    pub const fn psi(&self) -> &PsiResponder {
        &self.psi
    }

    /// Returns the merlion responder.
    #[must_use]
    pub const fn merlion(&self) -> &MerlionResponder {
        &self.merlion
    }

    /// Returns the trust audit sink.
    #[must_use]
    pub fn audit(&self) -> &dyn TrustAuditSink {
        self.audit.as_ref()
    }

    /// Returns true when debug mode widens audit output.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the current wall-clock timestamp for response envelopes.
    ///
    /// The core is clock-free; the hosting layer supplies time.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        let millis = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Timestamp::from_unix_millis(u64::try_from(millis).unwrap_or(u64::MAX))
    }

    /// Records one request outcome.
    fn record(&self, endpoint: AgentEndpoint, outcome: RequestOutcome) {
        self.metrics.record_request(EndpointMetricEvent {
            endpoint,
            outcome,
        });
    }
}

// ============================================================================
// SECTION: Agent Server
// ============================================================================

/// Agent server instance.
pub struct AgentServer {
    /// Resolved process configuration.
    config: MerlionGateConfig,
    /// Shared handler state.
    state: Arc<ServerState>,
}

impl AgentServer {
    /// Builds a new server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration fails validation.
    pub fn from_config(config: MerlionGateConfig) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let metrics: Arc<dyn EndpointMetrics> = if config.server.debug {
            Arc::new(StderrEndpointMetrics)
        } else {
            Arc::new(NoopEndpointMetrics)
        };
        let state = Arc::new(ServerState::new(
            Arc::new(StderrTrustAuditSink),
            metrics,
            config.server.debug,
        ));
        Ok(Self {
            config,
            state,
        })
    }

    /// Returns the route table bound to this server's state.
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state))
    }

    /// Serves requests until the listener fails.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the bind address is invalid or the
    /// listener cannot be established.
    pub async fn serve(self) -> Result<(), ServerError> {
        let addr: SocketAddr = self
            .config
            .server
            .bind
            .parse()
            .map_err(|_| ServerError::Config("invalid bind address".to_string()))?;
        let app = build_router(Arc::clone(&self.state));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|_| ServerError::Transport("http bind failed".to_string()))?;
        axum::serve(listener, app)
            .await
            .map_err(|_| ServerError::Transport("http server failed".to_string()))
    }
}

/// Builds the GET route table over shared state.
fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route(HAWKER_PATH, get(handle_hawker))
        .route(PSI_PATH, get(handle_psi))
        .route(MERLION_PATH, get(handle_merlion))
        .with_state(state)
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Handles the root listing endpoint.
pub async fn handle_root(State(state): State<Arc<ServerState>>) -> Json<RootResponse> {
    let response = dispatch_root(&state);
    state.record(AgentEndpoint::Root, RequestOutcome::Ok);
    Json(response)
}

/// Handles the hawker lookup endpoint.
pub async fn handle_hawker(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HawkerParams>,
) -> Result<Json<HawkerResponse>, DispatchRejection> {
    match dispatch_hawker(&state, &params) {
        Ok(response) => {
            state.record(AgentEndpoint::Hawker, RequestOutcome::Ok);
            Ok(Json(response))
        }
        Err(error) => {
            state.record(AgentEndpoint::Hawker, RequestOutcome::from_error(&error));
            Err(DispatchRejection(error))
        }
    }
}

/// Handles the psi reading endpoint.
pub async fn handle_psi(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<PsiParams>,
) -> Result<Json<PsiResponse>, DispatchRejection> {
    match dispatch_psi(&state, &params) {
        Ok(response) => {
            state.record(AgentEndpoint::Psi, RequestOutcome::Ok);
            Ok(Json(response))
        }
        Err(error) => {
            state.record(AgentEndpoint::Psi, RequestOutcome::from_error(&error));
            Err(DispatchRejection(error))
        }
    }
}

/// Handles the merlion attraction endpoint.
pub async fn handle_merlion(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<MerlionParams>,
) -> Result<Json<MerlionResponse>, DispatchRejection> {
    match dispatch_merlion(&state, &params) {
        Ok(response) => {
            state.record(AgentEndpoint::Merlion, RequestOutcome::Ok);
            Ok(Json(response))
        }
        Err(error) => {
            state.record(AgentEndpoint::Merlion, RequestOutcome::from_error(&error));
            Err(DispatchRejection(error))
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Agent server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
