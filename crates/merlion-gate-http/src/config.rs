// crates/merlion-gate-http/src/config.rs
// ============================================================================
// Module: Merlion Gate Configuration
// Description: Process configuration for the HTTP hosting layer.
// Purpose: Resolve bind address and debug toggle with fail-closed loading.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration covers only the hosting collaborators (listening address,
//! debug toggle); nothing here affects trust or dispatch semantics. Values
//! resolve in order: built-in defaults, optional TOML file, environment
//! overrides. File loading is fail-closed: oversized, non-UTF-8, or
//! malformed inputs are rejected rather than partially applied.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a config file in bytes.
const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Environment variable overriding the bind address.
pub const BIND_ENV: &str = "MERLION_GATE_BIND";

/// Environment variable toggling debug mode.
pub const DEBUG_ENV: &str = "MERLION_GATE_DEBUG";

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Top-level Merlion Gate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MerlionGateConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server configuration.
///
/// # Invariants
/// - `bind` must parse as a socket address; enforced by [`MerlionGateConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address for the HTTP server.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Debug toggle; widens audit output only, never dispatch semantics.
    #[serde(default)]
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            debug: false,
        }
    }
}

/// Returns the default bind address.
fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}

impl MerlionGateConfig {
    /// Loads configuration from an optional TOML file.
    ///
    /// `None` yields the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is oversized, unreadable, not
    /// UTF-8, or not valid TOML for this schema.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let metadata = std::fs::metadata(path).map_err(|err| ConfigError::Io {
            message: err.to_string(),
        })?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::TooLarge {
                limit: MAX_CONFIG_BYTES,
            });
        }
        let bytes = std::fs::read(path).map_err(|err| ConfigError::Io {
            message: err.to_string(),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8)?;
        toml::from_str(&text).map_err(|err| ConfigError::Parse {
            message: err.to_string(),
        })
    }

    /// Applies environment overrides on top of loaded values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a debug override is neither `true` nor
    /// `false` (case-insensitive).
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(bind) = std::env::var(BIND_ENV)
            && !bind.is_empty()
        {
            self.server.bind = bind;
        }
        if let Ok(debug) = std::env::var(DEBUG_ENV) {
            match debug.to_ascii_lowercase().as_str() {
                "true" => self.server.debug = true,
                "false" => self.server.debug = false,
                other => {
                    return Err(ConfigError::InvalidDebug {
                        value: other.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Validates the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bind address does not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.bind.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidBind {
            value: self.server.bind.clone(),
        })?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Filesystem error while reading the config file.
    #[error("config read failed: {message}")]
    Io {
        /// Underlying error description.
        message: String,
    },
    /// Config file exceeds the size limit.
    #[error("config file exceeds size limit of {limit} bytes")]
    TooLarge {
        /// Maximum allowed size in bytes.
        limit: u64,
    },
    /// Config file is not valid UTF-8.
    #[error("config file must be utf-8")]
    NotUtf8,
    /// Config file is not valid TOML for this schema.
    #[error("config parse failed: {message}")]
    Parse {
        /// Underlying error description.
        message: String,
    },
    /// Bind address does not parse as a socket address.
    #[error("invalid bind address: {value}")]
    InvalidBind {
        /// Offending bind value.
        value: String,
    },
    /// Debug override is not a boolean literal.
    #[error("invalid debug toggle (expected true or false): {value}")]
    InvalidDebug {
        /// Offending override value.
        value: String,
    },
}

// ============================================================================
// SECTION: Tests
// ============================================================================
