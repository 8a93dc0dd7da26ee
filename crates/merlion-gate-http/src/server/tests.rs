// crates/merlion-gate-http/src/server/tests.rs
// ============================================================================
// Module: Agent Server Tests
// Description: Handler-level tests for the HTTP endpoint surface.
// Purpose: Verify status codes and envelope shapes end to end.
// Dependencies: axum, serde_json, tokio
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions use unwraps for clarity."
)]

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde_json::Value;

use super::AgentServer;
use super::ServerError;
use super::ServerState;
use super::handle_hawker;
use super::handle_merlion;
use super::handle_psi;
use super::handle_root;
use crate::config::MerlionGateConfig;
use crate::dispatch::HawkerParams;
use crate::dispatch::MerlionParams;
use crate::dispatch::PsiParams;

fn shared_state() -> Arc<ServerState> {
    Arc::new(ServerState::with_noop_sinks())
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_lists_agents_and_endpoints() {
    let response = handle_root(State(shared_state())).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["message"], "Singapore Multi-Agent System");
    let agents = value["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 3);
    assert_eq!(agents[0]["id"], "hawker");
    assert_eq!(agents[1]["id"], "psi");
    assert_eq!(agents[2]["id"], "merlion");
    assert_eq!(value["endpoints"]["psi"], "/psi");
}

#[tokio::test]
async fn hawker_without_query_is_bad_request() {
    let response = handle_hawker(State(shared_state()), Query(HawkerParams::default()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = body_json(response).await;
    let error = value["error"].as_str().unwrap();
    assert!(!error.is_empty());
    assert!(error.contains("query"));
}

#[tokio::test]
async fn hawker_with_query_returns_venues() {
    let params = HawkerParams {
        query: Some("chicken rice".to_string()),
        requester: None,
    };
    let response = handle_hawker(State(shared_state()), Query(params)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["agent"]["id"], "hawker");
    assert_eq!(value["query"], "chicken rice");
    assert_eq!(value["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn psi_with_trusted_requester_reports_all_regions() {
    let params = PsiParams {
        location: Some("central".to_string()),
        requester: Some("hawker".to_string()),
    };
    let response = handle_psi(State(shared_state()), Query(params)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["agent"]["id"], "psi");
    assert_eq!(value["location"], "central");
    for region in ["north", "south", "east", "west", "central", "national"] {
        assert!(value["psi_readings"].get(region).is_some(), "missing region {region}");
    }
}

#[tokio::test]
async fn psi_with_unknown_requester_is_forbidden() {
    let params = PsiParams {
        location: Some("central".to_string()),
        requester: Some("unknown-agent".to_string()),
    };
    let response = handle_psi(State(shared_state()), Query(params)).await.into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let value = body_json(response).await;
    assert_eq!(value["error"], "Requester not trusted");
}

#[tokio::test]
async fn merlion_unknown_category_is_ok_and_empty() {
    let params = MerlionParams {
        category: Some("bogus".to_string()),
        requester: None,
    };
    let response = handle_merlion(State(shared_state()), Query(params)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["category"], "bogus");
    assert_eq!(value["attractions"]["bogus"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn merlion_default_category_returns_full_catalogue() {
    let response =
        handle_merlion(State(shared_state()), Query(MerlionParams::default())).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["category"], "all");
    let attractions = value["attractions"].as_object().unwrap();
    assert_eq!(attractions.len(), 3);
    for group in ["landmarks", "nature", "culture"] {
        assert_eq!(attractions[group].as_array().unwrap().len(), 2);
    }
}

#[test]
fn from_config_rejects_invalid_bind() {
    let mut config = MerlionGateConfig::default();
    config.server.bind = "not-an-address".to_string();
    let err = AgentServer::from_config(config).err().expect("invalid bind rejected");
    assert!(matches!(err, ServerError::Config(_)));
}

#[test]
fn from_config_accepts_defaults() {
    let server = AgentServer::from_config(MerlionGateConfig::default()).unwrap();
    assert!(!server.state.debug());
    let _router = server.router();
}

#[test]
fn from_config_wires_debug_into_state() {
    let mut config = MerlionGateConfig::default();
    config.server.debug = true;
    let server = AgentServer::from_config(config).unwrap();
    assert!(server.state.debug());
}
