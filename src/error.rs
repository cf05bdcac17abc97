//! Error types for `fieldlog`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur while configuring or building a logger.
///
/// Logging calls themselves never fail. The binary maps every variant to
/// exit status 2.
#[derive(Debug, Error)]
pub enum LogError {
    /// The backend rejected the encoder or sink configuration.
    #[error("error on building logger: {0}")]
    Build(String),

    /// Configuration error (bad environment value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
