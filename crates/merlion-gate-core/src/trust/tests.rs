// crates/merlion-gate-core/src/trust/tests.rs
// ============================================================================
// Module: Trust Evaluator Unit Tests
// Description: Unit tests for trust, capability, and requester authorization.
// Purpose: Validate evaluator totality and idempotence over the registry.
// Dependencies: merlion-gate-core
// ============================================================================

//! ## Overview
//! Exercises every trust evaluator operation against the built-in registry,
//! including the malformed-input cases that must yield negative answers
//! rather than errors.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions use unwraps for clarity."
)]

use proptest::prelude::proptest;

use super::RequesterDecision;
use super::TrustEvaluator;
use crate::registry::AgentRegistry;
use crate::trust_level::TrustLevel;

/// Built-in registry fixture shared by the tests below.
fn registry() -> AgentRegistry {
    AgentRegistry::builtin()
}

#[test]
fn verify_agent_trust_accepts_every_registered_id() {
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    for agent in registry.all() {
        assert!(evaluator.verify_agent_trust(agent.id.as_str()));
    }
}

#[test]
fn verify_agent_trust_rejects_unknown_and_malformed_ids() {
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    for id in ["unknown-agent", "", " ", "  hawker", "hawker ", "HAWKER"] {
        assert!(!evaluator.verify_agent_trust(id), "id {id:?} must not verify");
    }
}

#[test]
fn get_trust_level_returns_high_for_builtin_agents() {
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    assert_eq!(evaluator.get_trust_level("psi"), Some(TrustLevel::High));
    assert_eq!(evaluator.get_trust_level("unknown-agent"), None);
}

#[test]
fn validate_agent_capability_requires_both_id_and_capability() {
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    assert!(evaluator.validate_agent_capability("hawker", "hawker_search"));
    assert!(evaluator.validate_agent_capability("merlion", "tourist_information"));
    assert!(!evaluator.validate_agent_capability("hawker", "psi_reading"));
    assert!(!evaluator.validate_agent_capability("unknown-agent", "hawker_search"));
    assert!(!evaluator.validate_agent_capability("", ""));
}

#[test]
fn get_agent_info_returns_full_descriptor() {
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    let info = evaluator.get_agent_info("merlion").expect("merlion registered");
    assert_eq!(info.name, "Merlion Agent");
    assert!(info.has_capability("attraction_search"));
    assert!(evaluator.get_agent_info("unknown-agent").is_none());
}

#[test]
fn authorize_requester_treats_absent_and_empty_as_anonymous() {
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    assert_eq!(evaluator.authorize_requester(None), RequesterDecision::Anonymous);
    assert_eq!(evaluator.authorize_requester(Some("")), RequesterDecision::Anonymous);
}

#[test]
fn authorize_requester_resolves_registered_ids() {
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    let decision = evaluator.authorize_requester(Some("hawker"));
    assert!(matches!(decision, RequesterDecision::Trusted(id) if id.as_str() == "hawker"));
}

#[test]
fn authorize_requester_rejects_unknown_ids() {
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    let decision = evaluator.authorize_requester(Some("unknown-agent"));
    assert_eq!(
        decision,
        RequesterDecision::Untrusted {
            requester: "unknown-agent".to_string(),
        }
    );
}

#[test]
fn self_request_resolves_as_trusted() {
    // A requester equal to an endpoint's own id is simply a registry hit.
    let registry = registry();
    let evaluator = TrustEvaluator::new(&registry);
    let decision = evaluator.authorize_requester(Some("psi"));
    assert!(matches!(decision, RequesterDecision::Trusted(id) if id.as_str() == "psi"));
}

proptest! {
    #[test]
    fn evaluator_operations_are_idempotent(id in ".{0,32}") {
        let registry = AgentRegistry::builtin();
        let evaluator = TrustEvaluator::new(&registry);
        assert_eq!(evaluator.verify_agent_trust(&id), evaluator.verify_agent_trust(&id));
        assert_eq!(evaluator.get_trust_level(&id), evaluator.get_trust_level(&id));
        assert_eq!(
            evaluator.validate_agent_capability(&id, "hawker_search"),
            evaluator.validate_agent_capability(&id, "hawker_search"),
        );
        assert_eq!(
            evaluator.authorize_requester(Some(&id)),
            evaluator.authorize_requester(Some(&id)),
        );
    }

    #[test]
    fn unregistered_ids_never_verify(id in "[a-z-]{1,16}") {
        let registry = AgentRegistry::builtin();
        let evaluator = TrustEvaluator::new(&registry);
        let registered = matches!(id.as_str(), "hawker" | "psi" | "merlion");
        assert_eq!(evaluator.verify_agent_trust(&id), registered);
    }
}
