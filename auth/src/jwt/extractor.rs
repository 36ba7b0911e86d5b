use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::AuthenticationError;
use super::issuer::SIGNING_ALGORITHM;
use crate::config::SigningConfig;
use crate::identity::Identity;

/// Recover the identity carried by a bearer token.
///
/// Name and email come from the signed claims, not from storage, so they
/// may lag behind profile changes for at most one token lifetime.
///
/// # Errors
/// * `MalformedToken` - Not three base64url segments of valid JSON
/// * `InvalidSignature` - HMAC does not match or algorithm is not HS256
/// * `TokenExpired` - `exp` is at or before now
/// * `IssuerAudienceMismatch` - `iss`/`aud` differ from the configuration
/// * `InvalidSubject` - `sub` missing or not an integer
/// * `MissingClaim` - `exp`, `name` or `email` absent
pub fn extract(token: &str, config: &SigningConfig) -> Result<Identity, AuthenticationError> {
    extract_at(token, config, Utc::now())
}

/// Same as [`extract`] evaluated at an explicit instant.
pub fn extract_at(
    token: &str,
    config: &SigningConfig,
    now: DateTime<Utc>,
) -> Result<Identity, AuthenticationError> {
    let claims = verify_signature(token, config)?;

    if claims.exp.is_none() {
        return Err(AuthenticationError::MissingClaim("exp"));
    }
    if claims.is_expired(now.timestamp()) {
        return Err(AuthenticationError::TokenExpired);
    }

    if !claims.matches_audience(config) {
        return Err(AuthenticationError::IssuerAudienceMismatch);
    }

    into_identity(claims)
}

/// Check structure and signature, returning the raw claims.
///
/// Time and audience checks are left to the caller so they run against an
/// explicit clock and in a fixed order.
fn verify_signature(
    token: &str,
    config: &SigningConfig,
) -> Result<TokenClaims, AuthenticationError> {
    if token.split('.').count() != 3 {
        return Err(AuthenticationError::MalformedToken);
    }

    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let key = DecodingKey::from_secret(&config.secret_key);

    decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                AuthenticationError::InvalidSignature
            }
            _ => AuthenticationError::MalformedToken,
        })
}

/// Convert validated claims into a typed identity, failing on the first bad claim.
fn into_identity(claims: TokenClaims) -> Result<Identity, AuthenticationError> {
    let id = claims
        .sub
        .as_deref()
        .and_then(|sub| sub.parse::<i64>().ok())
        .ok_or(AuthenticationError::InvalidSubject)?;

    let name = claims.name.ok_or(AuthenticationError::MissingClaim("name"))?;
    let email = claims
        .email
        .ok_or(AuthenticationError::MissingClaim("email"))?;

    Ok(Identity { id, name, email })
}
