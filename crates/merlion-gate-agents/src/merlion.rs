// crates/merlion-gate-agents/src/merlion.rs
// ============================================================================
// Module: Merlion Responder
// Description: Static tourist attraction catalogue keyed by category.
// Purpose: Answer attraction lookups for the merlion endpoint.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The merlion responder serves a fixed catalogue of attractions grouped
//! into `landmarks`, `nature`, and `culture`. The `all` scope returns the
//! whole catalogue; a known category returns just that group; an unknown
//! category returns a map with that key and an empty list, never an error.
//! Category values are matched exactly, without case normalization.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default category scope when the parameter is omitted.
pub const CATEGORY_ALL: &str = "all";

/// Catalogue categories in listing order.
const CATEGORIES: &[&str] = &["landmarks", "nature", "culture"];

// ============================================================================
// SECTION: Payload Types
// ============================================================================

/// One attraction entry in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    /// Attraction display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Address or district.
    pub location: String,
}

/// Attractions grouped by category key.
pub type AttractionSet = BTreeMap<String, Vec<Attraction>>;

// ============================================================================
// SECTION: Responder
// ============================================================================

/// Tourist attraction lookup responder.
///
/// # Invariants
/// - `resolve` is total and deterministic; it never fails for any category.
#[derive(Debug, Clone, Copy, Default)]
pub struct MerlionResponder;

impl MerlionResponder {
    /// Resolves a category scope to the matching attraction groups.
    #[must_use]
    pub fn resolve(&self, category: &str) -> AttractionSet {
        if category == CATEGORY_ALL {
            return CATEGORIES
                .iter()
                .map(|key| ((*key).to_string(), attractions_for(key)))
                .collect();
        }
        let mut set = AttractionSet::new();
        set.insert(category.to_string(), attractions_for(category));
        set
    }
}

/// Returns the catalogue entries for one category key.
fn attractions_for(category: &str) -> Vec<Attraction> {
    match category {
        "landmarks" => vec![
            attraction("Merlion Park", "Iconic symbol of Singapore", "One Fullerton"),
            attraction(
                "Marina Bay Sands",
                "Integrated resort with iconic rooftop",
                "10 Bayfront Avenue",
            ),
        ],
        "nature" => vec![
            attraction(
                "Gardens by the Bay",
                "Nature park with Supertrees",
                "18 Marina Gardens Drive",
            ),
            attraction("Singapore Botanic Gardens", "UNESCO World Heritage site", "1 Cluny Road"),
        ],
        "culture" => vec![
            attraction("Chinatown", "Historic ethnic neighborhood", "Chinatown district"),
            attraction("Little India", "Vibrant Indian cultural district", "Little India district"),
        ],
        _ => Vec::new(),
    }
}

/// Builds an attraction entry from static fields.
fn attraction(name: &str, description: &str, location: &str) -> Attraction {
    Attraction {
        name: name.to_string(),
        description: description.to_string(),
        location: location.to_string(),
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

    use super::CATEGORY_ALL;
    use super::MerlionResponder;

    #[test]
    fn all_scope_returns_every_category() {
        let set = MerlionResponder.resolve(CATEGORY_ALL);
        assert_eq!(set.len(), 3);
        for key in ["landmarks", "nature", "culture"] {
            assert_eq!(set.get(key).map(Vec::len), Some(2), "category {key}");
        }
    }

    #[test]
    fn known_category_returns_only_that_group() {
        let set = MerlionResponder.resolve("nature");
        assert_eq!(set.len(), 1);
        let nature = set.get("nature").unwrap();
        assert!(nature.iter().any(|entry| entry.name == "Gardens by the Bay"));
    }

    #[test]
    fn unknown_category_yields_empty_group_not_error() {
        let set = MerlionResponder.resolve("bogus");
        assert_eq!(set.len(), 1);
        assert!(set.get("bogus").unwrap().is_empty());
    }

    #[test]
    fn category_matching_is_case_sensitive() {
        let set = MerlionResponder.resolve("Landmarks");
        assert!(set.get("Landmarks").unwrap().is_empty());
    }
}
