use std::fmt;

use chrono::Duration;
use thiserror::Error;

/// Minimum HMAC-SHA256 key length in bytes (256 bits).
pub const MIN_SECRET_KEY_LENGTH: usize = 32;

/// Error type for signing configuration problems.
///
/// Always fatal: surfaced at startup or as a server-side failure, never
/// as a caller error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("signing key too short: minimum {min} bytes, got {actual}")]
    KeyTooShort { min: usize, actual: usize },

    #[error("token lifetime out of range")]
    LifetimeOutOfRange,
}

/// Token signing configuration shared by the issuer and the extractor.
///
/// Loaded once at process start and handed to every component explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningConfig {
    /// HMAC secret, at least 32 bytes
    pub secret_key: Vec<u8>,

    /// Expected `iss` claim
    pub issuer: String,

    /// Expected `aud` claim
    pub audience: String,

    /// Lifetime of issued tokens; zero or negative yields already-expired tokens
    pub token_lifetime: Duration,
}

impl SigningConfig {
    /// Create a validated signing configuration.
    ///
    /// # Arguments
    /// * `secret_key` - HMAC secret bytes
    /// * `issuer` - Token issuer name
    /// * `audience` - Token audience name
    /// * `token_lifetime` - How long issued tokens stay valid
    ///
    /// # Errors
    /// * `KeyTooShort` - Secret is shorter than 32 bytes
    pub fn new(
        secret_key: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        token_lifetime: Duration,
    ) -> Result<Self, ConfigurationError> {
        let config = Self {
            secret_key: secret_key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            token_lifetime,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build from raw configuration values.
    ///
    /// The key is taken as its UTF-8 bytes and the lifetime as whole minutes.
    ///
    /// # Errors
    /// * `KeyTooShort` - Secret is shorter than 32 bytes
    /// * `LifetimeOutOfRange` - Minutes do not fit a `Duration`
    pub fn from_settings(
        signing_key: &str,
        issuer: &str,
        audience: &str,
        token_lifetime_minutes: i64,
    ) -> Result<Self, ConfigurationError> {
        let token_lifetime = Duration::try_minutes(token_lifetime_minutes)
            .ok_or(ConfigurationError::LifetimeOutOfRange)?;

        Self::new(signing_key.as_bytes(), issuer, audience, token_lifetime)
    }

    /// Check the key length invariant.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.secret_key.len() < MIN_SECRET_KEY_LENGTH {
            return Err(ConfigurationError::KeyTooShort {
                min: MIN_SECRET_KEY_LENGTH,
                actual: self.secret_key.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfig")
            .field("secret_key", &format_args!("<{} bytes>", self.secret_key.len()))
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}
