// crates/merlion-gate-core/src/trust_level.rs
// ============================================================================
// Module: Trust Levels
// Description: Open string-backed trust level enumeration for agents.
// Purpose: Model trust as an extensible tagged value rather than a boolean.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Trust levels classify registered agents. Only `high` is populated by the
//! built-in registry today, but the wire form must admit future values
//! without changing callers, so unknown labels deserialize into
//! [`TrustLevel::Other`] instead of failing. Levels carry a total rank order
//! so endpoints can impose thresholds later without reshaping the registry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Trust Level
// ============================================================================

/// Trust level assigned to a registered agent.
///
/// # Invariants
/// - Serializes as the bare label string (`"high"`, `"low"`, `"unverified"`,
///   or the raw label for [`TrustLevel::Other`]).
/// - Unknown labels round-trip losslessly through [`TrustLevel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrustLevel {
    /// Fully trusted agent.
    High,
    /// Limited-trust agent.
    Low,
    /// Agent whose trust has not been established.
    Unverified,
    /// Forward-compatible label not yet known to this build.
    Other(String),
}

impl TrustLevel {
    /// Parses a trust level from its wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "high" => Self::High,
            "low" => Self::Low,
            "unverified" => Self::Unverified,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the stable wire label for the level.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::Unverified => "unverified",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Returns the rank used for threshold comparisons.
    ///
    /// Unknown labels rank below every known level.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Low => 2,
            Self::Unverified => 1,
            Self::Other(_) => 0,
        }
    }

    /// Returns true when this level meets or exceeds the required level.
    #[must_use]
    pub const fn at_least(&self, required: &Self) -> bool {
        self.rank() >= required.rank()
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TrustLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TrustLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
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

    use super::TrustLevel;

    #[test]
    fn known_labels_round_trip() {
        for label in ["high", "low", "unverified"] {
            let level = TrustLevel::from_label(label);
            assert_eq!(level.as_str(), label);
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{label}\""));
            let back: TrustLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(back, level);
        }
    }

    #[test]
    fn unknown_label_round_trips_through_other() {
        let level = TrustLevel::from_label("provisional");
        assert_eq!(level, TrustLevel::Other("provisional".to_string()));
        let json = serde_json::to_string(&level).unwrap();
        let back: TrustLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }

    #[test]
    fn rank_order_is_total() {
        assert!(TrustLevel::High.at_least(&TrustLevel::Low));
        assert!(TrustLevel::Low.at_least(&TrustLevel::Unverified));
        assert!(TrustLevel::Unverified.at_least(&TrustLevel::Other("x".to_string())));
        assert!(!TrustLevel::Low.at_least(&TrustLevel::High));
        assert!(TrustLevel::High.at_least(&TrustLevel::High));
    }
}
