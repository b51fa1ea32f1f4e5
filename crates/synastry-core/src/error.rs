//! Error types for synastry-core.
//!
//! Defines the central error type [`CoreError`] used across the Synastry
//! workspace, along with the [`CoreResult<T>`] type alias.

use thiserror::Error;

/// Top-level error type for core operations.
///
/// The computation core is pure: the only failure modes are configuration
/// problems surfaced at load time and malformed data crossing the library
/// boundary. Numeric guards inside the engines clamp rather than raise.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration is invalid or missing.
    ///
    /// Raised when loading or validating configuration files and
    /// environment overrides. Fatal, never retried inside the core.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A field value failed validation constraints.
    ///
    /// Raised at the boundary where external data enters the core, for
    /// example an orb threshold outside its documented range.
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Error during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
