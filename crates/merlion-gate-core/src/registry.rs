// crates/merlion-gate-core/src/registry.rs
// ============================================================================
// Module: Agent Registry
// Description: Immutable registry of agent descriptors and capabilities.
// Purpose: Provide the closed allow-list that trust evaluation is defined over.
// Dependencies: crate::{identifiers, trust_level}, serde, thiserror
// ============================================================================

//! ## Overview
//! The agent registry is an explicitly constructed, immutable value built
//! once at process start and shared by reference into every handler. It is
//! never mutated after construction, so unsynchronized concurrent reads are
//! safe. Construction enforces the descriptor invariants (unique ids,
//! non-empty capability sets); lookups are infallible and total.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::identifiers::AgentId;
use crate::identifiers::CapabilityTag;
use crate::trust_level::TrustLevel;

// ============================================================================
// SECTION: Agent Descriptor
// ============================================================================

/// Identity record for a registered agent.
///
/// # Invariants
/// - `id` is unique within a registry and immutable for process lifetime.
/// - `capabilities` is never empty for a registered agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    /// Unique agent identifier.
    pub id: AgentId,
    /// Human-readable display name.
    pub name: String,
    /// One-line purpose description.
    pub description: String,
    /// Trust level assigned to the agent.
    pub trust_level: TrustLevel,
    /// Capability tags advertised by the agent (unordered, no duplicates).
    pub capabilities: BTreeSet<CapabilityTag>,
}

impl AgentDescriptor {
    /// Returns true when the descriptor advertises the given capability.
    #[must_use]
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|tag| tag.as_str() == capability)
    }
}

// ============================================================================
// SECTION: Registry Errors
// ============================================================================

/// Errors raised while constructing an agent registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A descriptor reused an identifier already registered.
    #[error("duplicate agent id: {id}")]
    DuplicateAgent {
        /// Identifier that was registered twice.
        id: AgentId,
    },
    /// A descriptor carried no capabilities.
    #[error("agent has empty capability set: {id}")]
    EmptyCapabilities {
        /// Identifier of the offending descriptor.
        id: AgentId,
    },
}

// ============================================================================
// SECTION: Agent Registry
// ============================================================================

/// Immutable registry of agent descriptors.
///
/// # Invariants
/// - Descriptors are stored in registration order.
/// - Identifiers are unique within the registry.
/// - The registry is read-only after construction; concurrent reads need no
///   synchronization.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    /// Registered descriptors in registration order.
    agents: Vec<AgentDescriptor>,
}

impl AgentRegistry {
    /// Builds a registry from descriptors, enforcing construction invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when an identifier is duplicated or a
    /// capability set is empty.
    pub fn new(agents: Vec<AgentDescriptor>) -> Result<Self, RegistryError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for agent in &agents {
            if agent.capabilities.is_empty() {
                return Err(RegistryError::EmptyCapabilities {
                    id: agent.id.clone(),
                });
            }
            if !seen.insert(agent.id.as_str()) {
                return Err(RegistryError::DuplicateAgent {
                    id: agent.id.clone(),
                });
            }
        }
        Ok(Self {
            agents,
        })
    }

    /// Builds the registry of built-in Singapore agents.
    ///
    /// The three agents are registered in the order the root endpoint lists
    /// them: `hawker`, `psi`, `merlion`.
    #[must_use]
    pub fn builtin() -> Self {
        // The static table satisfies the construction invariants: ids are
        // distinct and every capability set is non-empty.
        Self {
            agents: builtin_agents(),
        }
    }

    /// Looks up a descriptor by identifier.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&AgentDescriptor> {
        self.agents.iter().find(|agent| agent.id.as_str() == id)
    }

    /// Returns all descriptors in registration order.
    #[must_use]
    pub fn all(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    /// Returns the number of registered agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns true when no agents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Builds descriptors for the built-in agents.
fn builtin_agents() -> Vec<AgentDescriptor> {
    vec![
        descriptor(
            "hawker",
            "Hawker Agent",
            "Provides information about hawker centers in Singapore",
            &["hawker_search", "food_recommendations"],
        ),
        descriptor(
            "psi",
            "PSI Agent",
            "Provides Pollutant Standards Index information",
            &["psi_reading", "air_quality_advisory"],
        ),
        descriptor(
            "merlion",
            "Merlion Agent",
            "Provides tourist attractions and information",
            &["attraction_search", "tourist_information"],
        ),
    ]
}

/// Builds a high-trust descriptor from static fields.
fn descriptor(id: &str, name: &str, description: &str, capabilities: &[&str]) -> AgentDescriptor {
    AgentDescriptor {
        id: AgentId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        trust_level: TrustLevel::High,
        capabilities: capabilities.iter().map(|tag| CapabilityTag::new(*tag)).collect(),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
