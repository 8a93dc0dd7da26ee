// crates/merlion-gate-core/src/trust.rs
// ============================================================================
// Module: Trust Evaluator
// Description: Pure trust and capability checks over the agent registry.
// Purpose: Decide whether a requester identity claim may query agent data.
// Dependencies: crate::{identifiers, registry, trust_level}
// ============================================================================

//! ## Overview
//! The trust evaluator answers three questions: is this identifier a known
//! agent, what trust level does it carry, and does it advertise a given
//! capability. Trust is deliberately membership in a closed, static
//! allow-list; there is no token verification, no signatures, and no
//! external calls. Every operation is pure and total over the registry, so
//! malformed or empty identifiers yield negative answers rather than errors,
//! and repeated calls with identical input yield identical output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::identifiers::AgentId;
use crate::registry::AgentDescriptor;
use crate::registry::AgentRegistry;
use crate::trust_level::TrustLevel;

// ============================================================================
// SECTION: Requester Decision
// ============================================================================

/// Outcome of authorizing an optional requester parameter.
///
/// # Invariants
/// - `Anonymous` covers both an absent parameter and an empty string; trust
///   verification is opt-in for the public read endpoints.
/// - `Untrusted` carries the claimed identifier verbatim for audit labeling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequesterDecision {
    /// No trust check was requested; the request proceeds as anonymous.
    Anonymous,
    /// The requester resolved in the registry.
    Trusted(AgentId),
    /// The requester was supplied but did not resolve in the registry.
    Untrusted {
        /// Identifier claimed by the requester.
        requester: String,
    },
}

impl RequesterDecision {
    /// Returns a stable label for audit and metric sinks.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Trusted(_) => "trusted",
            Self::Untrusted {
                ..
            } => "untrusted",
        }
    }
}

// ============================================================================
// SECTION: Trust Evaluator
// ============================================================================

/// Pure trust checks over a borrowed agent registry.
///
/// # Invariants
/// - Holds no state beyond the registry reference; operations are idempotent.
#[derive(Debug, Clone, Copy)]
pub struct TrustEvaluator<'a> {
    /// Registry the evaluator is defined over.
    registry: &'a AgentRegistry,
}

impl<'a> TrustEvaluator<'a> {
    /// Creates an evaluator over the given registry.
    #[must_use]
    pub const fn new(registry: &'a AgentRegistry) -> Self {
        Self {
            registry,
        }
    }

    /// Returns true iff the identifier resolves in the registry.
    ///
    /// Registry membership is the entirety of the trust check. Malformed or
    /// empty identifiers return false, never an error.
    #[must_use]
    pub fn verify_agent_trust(&self, id: &str) -> bool {
        self.registry.lookup(id).is_some()
    }

    /// Returns the trust level for the identifier when registered.
    #[must_use]
    pub fn get_trust_level(&self, id: &str) -> Option<TrustLevel> {
        self.registry.lookup(id).map(|agent| agent.trust_level.clone())
    }

    /// Returns true iff the identifier resolves and advertises the capability.
    ///
    /// Unknown identifiers and unknown capabilities are indistinguishable to
    /// the caller; capability checks are boolean, not diagnostic.
    #[must_use]
    pub fn validate_agent_capability(&self, id: &str, capability: &str) -> bool {
        self.registry.lookup(id).is_some_and(|agent| agent.has_capability(capability))
    }

    /// Returns the full descriptor for the identifier when registered.
    #[must_use]
    pub fn get_agent_info(&self, id: &str) -> Option<&'a AgentDescriptor> {
        self.registry.lookup(id)
    }

    /// Authorizes an optional untrusted requester parameter.
    ///
    /// An absent or empty parameter means no trust check was requested. A
    /// requester equal to an endpoint's own identifier resolves normally;
    /// self-requests are not special-cased.
    #[must_use]
    pub fn authorize_requester(&self, requester: Option<&str>) -> RequesterDecision {
        match requester {
            None => RequesterDecision::Anonymous,
            Some(id) if id.is_empty() => RequesterDecision::Anonymous,
            Some(id) => self.registry.lookup(id).map_or_else(
                || RequesterDecision::Untrusted {
                    requester: id.to_string(),
                },
                |agent| RequesterDecision::Trusted(agent.id.clone()),
            ),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
