//! Error types for natal/transit computation.

use thiserror::Error;

use synastry_core::types::Body;

/// Errors that can occur while computing charts and transits.
///
/// All variants are configuration-class failures: fatal, surfaced
/// immediately, never retried inside the core. Input-domain issues
/// (degenerate weights, out-of-range values) recover silently downstream
/// via clamps and defaults instead of raising.
#[derive(Debug, Error)]
pub enum AstroError {
    /// The ephemeris provider failed or is misconfigured.
    #[error("Ephemeris provider error: {0}")]
    Provider(String),

    /// The provider has no data for a requested body.
    #[error("Unknown body in ephemeris: {body}")]
    UnknownBody {
        /// The body the provider could not resolve
        body: Body,
    },

    /// The provider does not implement a requested house system.
    #[error("House system not supported by provider: {system}")]
    UnsupportedHouseSystem {
        /// Name of the unsupported system
        system: String,
    },

    /// Serialization failure while building the chart content digest.
    #[error("Digest serialization error: {0}")]
    Digest(String),
}

impl From<serde_json::Error> for AstroError {
    fn from(err: serde_json::Error) -> Self {
        AstroError::Digest(err.to_string())
    }
}

/// Result type for natal/transit operations.
pub type AstroResult<T> = Result<T, AstroError>;
