// crates/merlion-gate-agents/src/psi.rs
// ============================================================================
// Module: PSI Responder
// Description: Static Pollutant Standards Index readings per region.
// Purpose: Answer air-quality lookups for the psi endpoint.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The PSI responder serves a fixed snapshot of island-wide readings. The
//! location parameter scopes nothing in the simulated dataset: every report
//! carries all five regions plus the national figure, and the requested
//! location is echoed back without normalization so callers can see the
//! scope they asked for. Unknown locations pass through unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default location scope when the parameter is omitted.
pub const REGION_NATIONAL: &str = "national";

// ============================================================================
// SECTION: Payload Types
// ============================================================================

/// PSI readings for the five regions plus the national figure.
///
/// # Invariants
/// - Every report carries all six keys regardless of the requested scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsiReadings {
    /// Northern region reading.
    pub north: u16,
    /// Southern region reading.
    pub south: u16,
    /// Eastern region reading.
    pub east: u16,
    /// Western region reading.
    pub west: u16,
    /// Central region reading.
    pub central: u16,
    /// Island-wide reading.
    pub national: u16,
}

/// Full air-quality report for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsiReport {
    /// Location scope the caller requested, echoed verbatim.
    pub location: String,
    /// Readings for all regions.
    pub psi_readings: PsiReadings,
    /// Air-quality descriptor band.
    pub air_quality: String,
    /// Health advisory matching the descriptor band.
    pub health_advisory: String,
}

// ============================================================================
// SECTION: Responder
// ============================================================================

/// Air-quality lookup responder.
///
/// # Invariants
/// - `resolve` is total and deterministic; it never fails for any location.
#[derive(Debug, Clone, Copy, Default)]
pub struct PsiResponder;

impl PsiResponder {
    /// Resolves a location scope to the full air-quality report.
    #[must_use]
    pub fn resolve(&self, location: &str) -> PsiReport {
        PsiReport {
            location: location.to_string(),
            psi_readings: PsiReadings {
                north: 45,
                south: 42,
                east: 48,
                west: 50,
                central: 46,
                national: 46,
            },
            air_quality: "Good".to_string(),
            health_advisory: "Air quality is satisfactory; air pollution poses little or no risk."
                .to_string(),
        }
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

    use super::PsiResponder;
    use super::REGION_NATIONAL;

    #[test]
    fn report_carries_all_six_region_keys() {
        let report = PsiResponder.resolve("central");
        let value = serde_json::to_value(&report.psi_readings).unwrap();
        let readings = value.as_object().unwrap();
        for key in ["north", "south", "east", "west", "central", "national"] {
            assert!(readings.contains_key(key), "missing region key {key}");
        }
    }

    #[test]
    fn location_is_echoed_without_normalization() {
        assert_eq!(PsiResponder.resolve("Central").location, "Central");
        assert_eq!(PsiResponder.resolve("orchard-road").location, "orchard-road");
        assert_eq!(PsiResponder.resolve(REGION_NATIONAL).location, "national");
    }

    #[test]
    fn readings_match_the_fixed_snapshot() {
        let report = PsiResponder.resolve(REGION_NATIONAL);
        assert_eq!(report.psi_readings.west, 50);
        assert_eq!(report.psi_readings.national, 46);
        assert_eq!(report.air_quality, "Good");
        assert!(report.health_advisory.contains("little or no risk"));
    }
}
