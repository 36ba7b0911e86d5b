use thiserror::Error;

use crate::config::ConfigurationError;

/// Error type for token issuance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Error type for token validation and identity extraction.
///
/// Every variant is an unauthenticated outcome for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticationError {
    #[error("malformed token")]
    MalformedToken,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token expired")]
    TokenExpired,

    #[error("issuer/audience mismatch")]
    IssuerAudienceMismatch,

    #[error("missing or invalid subject")]
    InvalidSubject,

    #[error("missing required claim: {0}")]
    MissingClaim(&'static str),

    #[error("missing bearer credential")]
    MissingBearer,
}
