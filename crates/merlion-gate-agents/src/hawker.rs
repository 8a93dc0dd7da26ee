// crates/merlion-gate-agents/src/hawker.rs
// ============================================================================
// Module: Hawker Responder
// Description: Static hawker centre dataset behind the resolve interface.
// Purpose: Answer food-venue lookups for the hawker endpoint.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The hawker responder simulates a venue directory with a fixed table of
//! well-known hawker centres. The dataset is a stand-in for a real data
//! source, so the search term scopes nothing: every query receives the full
//! default result set and the dispatcher echoes the term back to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Payload Types
// ============================================================================

/// One hawker centre entry in the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HawkerVenue {
    /// Venue display name.
    pub name: String,
    /// Street address.
    pub location: String,
    /// Stalls the venue is known for.
    pub popular_stalls: Vec<String>,
}

// ============================================================================
// SECTION: Responder
// ============================================================================

/// Hawker centre lookup responder.
///
/// # Invariants
/// - `resolve` is total and deterministic; it never fails for any query.
#[derive(Debug, Clone, Copy, Default)]
pub struct HawkerResponder;

impl HawkerResponder {
    /// Resolves a search term to the venue result set.
    ///
    /// The backing table is a simulation, so every term (matched or not)
    /// yields the full default list rather than an error.
    #[must_use]
    pub fn resolve(&self, _query: &str) -> Vec<HawkerVenue> {
        vec![
            venue(
                "Maxwell Food Centre",
                "1 Kadayanallur Street",
                &["Tian Tian Chicken Rice", "Zhen Zhen Porridge"],
            ),
            venue("Lau Pa Sat", "18 Raffles Quay", &["Satay Street", "Various seafood stalls"]),
            venue(
                "Old Airport Road Food Centre",
                "51 Old Airport Road",
                &["Nam Sing Hokkien Fried Mee", "Roast Paradise"],
            ),
        ]
    }
}

/// Builds a venue entry from static fields.
fn venue(name: &str, location: &str, popular_stalls: &[&str]) -> HawkerVenue {
    HawkerVenue {
        name: name.to_string(),
        location: location.to_string(),
        popular_stalls: popular_stalls.iter().map(|stall| (*stall).to_string()).collect(),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions use unwraps for clarity."
    )]

    use super::HawkerResponder;

    #[test]
    fn resolve_returns_default_set_for_any_query() {
        let responder = HawkerResponder;
        let matched = responder.resolve("chicken rice");
        let unmatched = responder.resolve("zzz-no-such-venue");
        assert_eq!(matched, unmatched);
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn resolve_is_total_over_odd_inputs() {
        let responder = HawkerResponder;
        for query in ["", " ", "日本料理", "a".repeat(4096).as_str()] {
            assert!(!responder.resolve(query).is_empty());
        }
    }

    #[test]
    fn venue_entries_carry_stalls() {
        let responder = HawkerResponder;
        let venues = responder.resolve("laksa");
        let maxwell = venues.iter().find(|venue| venue.name == "Maxwell Food Centre").unwrap();
        assert_eq!(maxwell.location, "1 Kadayanallur Street");
        assert!(maxwell.popular_stalls.iter().any(|stall| stall == "Tian Tian Chicken Rice"));
    }
}
