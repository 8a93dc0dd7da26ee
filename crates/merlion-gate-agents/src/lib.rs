// crates/merlion-gate-agents/src/lib.rs
// ============================================================================
// Module: Merlion Gate Agents
// Description: Domain responders for the hawker, PSI, and merlion endpoints.
// Purpose: Map validated query parameters to deterministic static payloads.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each responder is a pure function over a small fixed in-process table:
//! hawker venues, PSI readings per region, and tourist attractions per
//! category. Responders never fail for unrecognized input values; an
//! unmatched search term or unknown category yields an empty or
//! default-scoped result set. No network calls, no I/O, deterministic given
//! input. They are replaceable data providers behind a stable
//! `resolve(parameter) -> data` interface.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod hawker;
pub mod merlion;
pub mod psi;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use hawker::HawkerResponder;
pub use hawker::HawkerVenue;
pub use merlion::Attraction;
pub use merlion::AttractionSet;
pub use merlion::CATEGORY_ALL;
pub use merlion::MerlionResponder;
pub use psi::PsiReadings;
pub use psi::PsiReport;
pub use psi::PsiResponder;
pub use psi::REGION_NATIONAL;
