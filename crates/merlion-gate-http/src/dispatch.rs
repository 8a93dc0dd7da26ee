// crates/merlion-gate-http/src/dispatch.rs
// ============================================================================
// Module: Request Dispatch
// Description: Per-endpoint dispatchers, envelopes, and error translation.
// Purpose: Run the parse / trust-gate / respond / assemble contract.
// Dependencies: merlion-gate-core, merlion-gate-agents, axum, serde
// ============================================================================

//! ## Overview
//! Every agent endpoint honors the same dispatch contract: parse query
//! parameters, run the opt-in trust gate against the `requester` parameter,
//! invoke the matching domain responder, and assemble the envelope. The
//! `agent` block always describes the responding endpoint's own identity,
//! never the requester. This module is the sole translator from
//! [`DispatchError`] outcomes to HTTP status and `{"error": ...}` bodies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use merlion_gate_agents::AttractionSet;
use merlion_gate_agents::CATEGORY_ALL;
use merlion_gate_agents::HawkerVenue;
use merlion_gate_agents::PsiReport;
use merlion_gate_agents::REGION_NATIONAL;
use merlion_gate_core::AgentDescriptor;
use merlion_gate_core::DispatchError;
use merlion_gate_core::RequesterDecision;
use merlion_gate_core::Timestamp;
use merlion_gate_core::TrustEvaluator;
use serde::Deserialize;
use serde::Serialize;

use crate::audit::TrustAuditEvent;
use crate::server::ServerState;
use crate::telemetry::AgentEndpoint;

// ============================================================================
// SECTION: Endpoint Paths
// ============================================================================

/// Stable path of the hawker endpoint.
pub const HAWKER_PATH: &str = "/hawker";
/// Stable path of the psi endpoint.
pub const PSI_PATH: &str = "/psi";
/// Stable path of the merlion endpoint.
pub const MERLION_PATH: &str = "/merlion";

// ============================================================================
// SECTION: Query Parameters
// ============================================================================

/// Query parameters accepted by the hawker endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HawkerParams {
    /// Required search term.
    pub query: Option<String>,
    /// Optional requester identity claim.
    pub requester: Option<String>,
}

/// Query parameters accepted by the psi endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PsiParams {
    /// Optional location scope; defaults to the national figure.
    pub location: Option<String>,
    /// Optional requester identity claim.
    pub requester: Option<String>,
}

/// Query parameters accepted by the merlion endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MerlionParams {
    /// Optional category scope; defaults to the full catalogue.
    pub category: Option<String>,
    /// Optional requester identity claim.
    pub requester: Option<String>,
}

// ============================================================================
// SECTION: Response Envelopes
// ============================================================================

/// Root listing response.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    /// System banner message.
    pub message: &'static str,
    /// Crate version string.
    pub version: &'static str,
    /// Registered agents in registration order.
    pub agents: Vec<AgentDescriptor>,
    /// Stable endpoint paths.
    pub endpoints: EndpointIndex,
}

/// Stable endpoint path index for the root listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointIndex {
    /// Hawker endpoint path.
    pub hawker: &'static str,
    /// Psi endpoint path.
    pub psi: &'static str,
    /// Merlion endpoint path.
    pub merlion: &'static str,
}

impl Default for EndpointIndex {
    fn default() -> Self {
        Self {
            hawker: HAWKER_PATH,
            psi: PSI_PATH,
            merlion: MERLION_PATH,
        }
    }
}

/// Hawker endpoint success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct HawkerResponse {
    /// Descriptor of the responding agent.
    pub agent: AgentDescriptor,
    /// Search term echoed verbatim.
    pub query: String,
    /// Venue result set.
    pub results: Vec<HawkerVenue>,
    /// Human-readable summary.
    pub message: String,
}

/// Psi endpoint success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct PsiResponse {
    /// Descriptor of the responding agent.
    pub agent: AgentDescriptor,
    /// Host-supplied response timestamp.
    pub timestamp_ms: Timestamp,
    /// Air-quality report with the requested scope echoed.
    #[serde(flatten)]
    pub report: PsiReport,
    /// Human-readable summary.
    pub message: String,
}

/// Merlion endpoint success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct MerlionResponse {
    /// Descriptor of the responding agent.
    pub agent: AgentDescriptor,
    /// Category scope echoed verbatim.
    pub category: String,
    /// Attraction groups matching the scope.
    pub attractions: AttractionSet,
    /// Human-readable summary.
    pub message: String,
}

// ============================================================================
// SECTION: Error Translation
// ============================================================================

/// Error body shape for every non-200 response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable error description.
    pub error: String,
}

/// Rejection wrapper translating dispatch errors to HTTP responses.
///
/// # Invariants
/// - This is the sole translation point from outcomes to status and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRejection(pub DispatchError);

impl From<DispatchError> for DispatchRejection {
    fn from(error: DispatchError) -> Self {
        Self(error)
    }
}

impl IntoResponse for DispatchRejection {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DispatchError::MissingParameter {
                ..
            } => StatusCode::BAD_REQUEST,
            DispatchError::UntrustedRequester {
                ..
            } => StatusCode::FORBIDDEN,
            DispatchError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// SECTION: Dispatchers
// ============================================================================

/// Dispatches a root listing request.
#[must_use]
pub fn dispatch_root(state: &ServerState) -> RootResponse {
    RootResponse {
        message: "Singapore Multi-Agent System",
        version: env!("CARGO_PKG_VERSION"),
        agents: state.registry().all().to_vec(),
        endpoints: EndpointIndex::default(),
    }
}

/// Dispatches a hawker lookup request.
///
/// # Errors
///
/// Returns [`DispatchError`] when `query` is absent or empty, or when the
/// requester fails the trust check.
pub fn dispatch_hawker(
    state: &ServerState,
    params: &HawkerParams,
) -> Result<HawkerResponse, DispatchError> {
    let query = required_param("query", params.query.as_deref())?;
    gate_requester(state, AgentEndpoint::Hawker, params.requester.as_deref())?;
    let results = state.hawker().resolve(query);
    Ok(HawkerResponse {
        agent: own_descriptor(state, "hawker")?,
        query: query.to_string(),
        results,
        message: format!("Found hawker centers matching: {query}"),
    })
}

/// Dispatches a psi reading request.
///
/// # Errors
///
/// Returns [`DispatchError`] when the requester fails the trust check.
pub fn dispatch_psi(state: &ServerState, params: &PsiParams) -> Result<PsiResponse, DispatchError> {
    gate_requester(state, AgentEndpoint::Psi, params.requester.as_deref())?;
    let location = params.location.as_deref().unwrap_or(REGION_NATIONAL);
    let report = state.psi().resolve(location);
    let message = format!("PSI readings for location: {location}");
    Ok(PsiResponse {
        agent: own_descriptor(state, "psi")?,
        timestamp_ms: state.now(),
        report,
        message,
    })
}

/// Dispatches an attraction lookup request.
///
/// # Errors
///
/// Returns [`DispatchError`] when the requester fails the trust check.
pub fn dispatch_merlion(
    state: &ServerState,
    params: &MerlionParams,
) -> Result<MerlionResponse, DispatchError> {
    gate_requester(state, AgentEndpoint::Merlion, params.requester.as_deref())?;
    let category = params.category.as_deref().unwrap_or(CATEGORY_ALL);
    let attractions = state.merlion().resolve(category);
    Ok(MerlionResponse {
        agent: own_descriptor(state, "merlion")?,
        category: category.to_string(),
        attractions,
        message: format!("Tourist attractions for category: {category}"),
    })
}

// ============================================================================
// SECTION: Dispatch Steps
// ============================================================================

/// Runs the opt-in trust gate and records the decision.
///
/// Absent or empty requesters proceed as anonymous; trust verification is
/// opt-in for the public read endpoints. Debug mode widens the audit event
/// with the resolved requester's trust level.
fn gate_requester(
    state: &ServerState,
    endpoint: AgentEndpoint,
    requester: Option<&str>,
) -> Result<(), DispatchError> {
    let evaluator = TrustEvaluator::new(state.registry());
    let decision = evaluator.authorize_requester(requester);
    let mut event = TrustAuditEvent::new(endpoint, &decision);
    if state.debug()
        && let RequesterDecision::Trusted(id) = &decision
    {
        event.trust_level =
            evaluator.get_trust_level(id.as_str()).map(|level| level.as_str().to_string());
    }
    state.audit().record(&event);
    match decision {
        RequesterDecision::Anonymous | RequesterDecision::Trusted(_) => Ok(()),
        RequesterDecision::Untrusted {
            requester,
        } => Err(DispatchError::UntrustedRequester {
            requester,
        }),
    }
}

/// Extracts a required parameter, treating empty values as missing.
fn required_param<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, DispatchError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DispatchError::MissingParameter {
            name,
        }),
    }
}

/// Resolves the endpoint's own descriptor from the registry.
///
/// The built-in registry always carries the endpoint ids; a miss means the
/// process was assembled against a registry missing its own identity, which
/// surfaces as an internal failure rather than leaking detail.
fn own_descriptor(state: &ServerState, id: &str) -> Result<AgentDescriptor, DispatchError> {
    state.registry().lookup(id).cloned().ok_or(DispatchError::Internal)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
