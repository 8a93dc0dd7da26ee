// crates/merlion-gate-core/src/dispatch.rs
// ============================================================================
// Module: Dispatch Outcomes
// Description: Error taxonomy for the per-endpoint request dispatch contract.
// Purpose: Keep domain logic total and isolate error mapping at one boundary.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Domain responders and the trust evaluator never raise terminal failures
//! for bad input; they return neutral or empty results. The dispatcher is
//! the sole translator from these outcomes to user-visible error responses,
//! and this taxonomy is the contract between the two layers. Unrecognized
//! domain values (search terms, regions, categories) are deliberately not
//! represented here: they are not errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Dispatch Errors
// ============================================================================

/// Terminal outcomes a dispatcher may translate to an error response.
///
/// # Invariants
/// - `MissingParameter` is the only client-error outcome.
/// - Messages are safe to surface verbatim; `Internal` carries no detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A required query parameter was absent or empty.
    #[error("Please provide a {name} parameter")]
    MissingParameter {
        /// Name of the missing parameter.
        name: &'static str,
    },
    /// A requester was supplied but failed the trust check.
    #[error("Requester not trusted")]
    UntrustedRequester {
        /// Identifier claimed by the requester.
        requester: String,
    },
    /// Unexpected fault during payload assembly; detail is never leaked.
    #[error("Internal server error")]
    Internal,
}

impl DispatchError {
    /// Returns a stable label for audit and metric sinks.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingParameter {
                ..
            } => "missing_parameter",
            Self::UntrustedRequester {
                ..
            } => "untrusted_requester",
            Self::Internal => "internal",
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::DispatchError;

    #[test]
    fn messages_are_safe_to_surface() {
        let missing = DispatchError::MissingParameter {
            name: "query",
        };
        assert_eq!(missing.to_string(), "Please provide a query parameter");
        let untrusted = DispatchError::UntrustedRequester {
            requester: "unknown-agent".to_string(),
        };
        // The claimed identifier is kept for audit sinks, never the body.
        assert_eq!(untrusted.to_string(), "Requester not trusted");
        assert_eq!(DispatchError::Internal.to_string(), "Internal server error");
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(
            DispatchError::MissingParameter {
                name: "query"
            }
            .as_str(),
            "missing_parameter"
        );
        assert_eq!(
            DispatchError::UntrustedRequester {
                requester: String::new()
            }
            .as_str(),
            "untrusted_requester"
        );
        assert_eq!(DispatchError::Internal.as_str(), "internal");
    }
}
