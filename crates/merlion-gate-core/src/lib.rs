// crates/merlion-gate-core/src/lib.rs
// ============================================================================
// Module: Merlion Gate Core
// Description: Agent registry, trust evaluation, and dispatch outcome model.
// Purpose: Provide the trust seam shared by every agent endpoint.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Merlion Gate core defines the immutable agent registry, the trust
//! evaluator that authorizes requester identity claims against it, and the
//! dispatch outcome taxonomy every endpoint translates to HTTP at the edge.
//! The core performs no I/O and holds no per-request state; every operation
//! is a bounded, synchronous, in-memory computation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod dispatch;
pub mod identifiers;
pub mod registry;
pub mod time;
pub mod trust;
pub mod trust_level;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dispatch::DispatchError;
pub use identifiers::AgentId;
pub use identifiers::CapabilityTag;
pub use registry::AgentDescriptor;
pub use registry::AgentRegistry;
pub use registry::RegistryError;
pub use time::Timestamp;
pub use trust::RequesterDecision;
pub use trust::TrustEvaluator;
pub use trust_level::TrustLevel;
