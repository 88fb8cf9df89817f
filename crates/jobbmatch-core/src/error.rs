//! Error types for jobbmatch-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A configured value is outside its accepted range.
    #[error("invalid configuration value for `{field}`: {message}")]
    InvalidValue {
        /// Name of the config field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the matching engine.
///
/// Empty or missing text is never an error: it degrades to empty term sets
/// and zero scores. Only caller programming errors land here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// An argument is outside the documented input domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument or field.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl EngineError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias using [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
