use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::IssueError;
use crate::config::ConfigurationError;
use crate::config::SigningConfig;
use crate::identity::Identity;

/// Session token payload.
///
/// Every field is optional so that decoding can report exactly which claim
/// is missing instead of failing on the whole payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (stringified user id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Create new empty claims.
    ///
    /// Together with the `with_*` setters this builds custom claim sets for
    /// [`sign`](crate::jwt::sign), e.g. service tokens or fixtures that a
    /// verifier must reject. [`for_identity`](Self::for_identity) is the
    /// session-token path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full claim set for an identity.
    ///
    /// # Arguments
    /// * `identity` - Authenticated subject
    /// * `config` - Supplies issuer, audience and lifetime
    /// * `now` - Issuance instant
    ///
    /// # Returns
    /// Claims with sub, name, email, iss, aud, iat and exp set
    ///
    /// # Errors
    /// * `Configuration` - `now + lifetime` falls outside the representable range
    pub fn for_identity(
        identity: &Identity,
        config: &SigningConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, IssueError> {
        let expiration = now
            .checked_add_signed(config.token_lifetime)
            .ok_or(ConfigurationError::LifetimeOutOfRange)?;

        Ok(Self {
            sub: Some(identity.id.to_string()),
            name: Some(identity.name.clone()),
            email: Some(identity.email.clone()),
            iss: Some(config.issuer.clone()),
            aud: Some(config.audience.clone()),
            iat: Some(now.timestamp()),
            exp: Some(expiration.timestamp()),
        })
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_email(mut self, email: impl ToString) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = Some(iss.to_string());
        self
    }

    /// Set audience.
    pub fn with_audience(mut self, aud: impl ToString) -> Self {
        self.aud = Some(aud.to_string());
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Check if token is expired.
    ///
    /// A token is no longer valid at its expiry second, so a zero lifetime
    /// produces a token that is expired on arrival. Missing `exp` counts as
    /// expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(true, |exp| exp <= current_timestamp)
    }

    /// Check that `iss` and `aud` match the configured values.
    pub fn matches_audience(&self, config: &SigningConfig) -> bool {
        self.iss.as_deref() == Some(config.issuer.as_str())
            && self.aud.as_deref() == Some(config.audience.as_str())
    }
}
