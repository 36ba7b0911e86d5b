use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::TokenClaims;
use super::errors::IssueError;
use crate::config::SigningConfig;
use crate::identity::Identity;

/// The only signing algorithm this crate produces or accepts.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Mint a signed session token for an identity.
///
/// # Arguments
/// * `identity` - Verified subject
/// * `config` - Signing configuration
///
/// # Returns
/// `header.payload.signature` token string
///
/// # Errors
/// * `Configuration` - Signing key shorter than 32 bytes, or the lifetime
///   pushes `exp` out of range
/// * `EncodingFailed` - Token encoding failed
pub fn issue(identity: &Identity, config: &SigningConfig) -> Result<String, IssueError> {
    issue_at(identity, config, Utc::now())
}

/// Same as [`issue`] with an explicit issuance instant.
pub fn issue_at(
    identity: &Identity,
    config: &SigningConfig,
    now: DateTime<Utc>,
) -> Result<String, IssueError> {
    let claims = TokenClaims::for_identity(identity, config, now)?;
    sign(&claims, config)
}

/// Sign an arbitrary claim set with the configured key.
///
/// No claims are added or checked; key length still is.
pub fn sign(claims: &TokenClaims, config: &SigningConfig) -> Result<String, IssueError> {
    config.validate()?;

    let header = Header::new(SIGNING_ALGORITHM);
    let key = EncodingKey::from_secret(&config.secret_key);

    encode(&header, claims, &key).map_err(|e| IssueError::EncodingFailed(e.to_string()))
}
