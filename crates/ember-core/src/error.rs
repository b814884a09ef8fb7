//! Error types for Ember
//!
//! The simulation itself never errors in steady state; these variants cover
//! construction-time misuse and configuration parsing.

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Combo stage list is empty")]
    EmptyStageList,

    #[error("Particle pool capacity must be non-zero")]
    ZeroCapacityPool,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}
