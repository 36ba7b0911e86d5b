use std::sync::Arc;

use crate::config::SigningConfig;
use crate::identity::Identity;
use crate::jwt;
use crate::jwt::AuthenticationError;
use crate::jwt::IssueError;
use crate::password::verify_credential;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::StoredCredential;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the process-wide signing configuration handed to it at startup.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    signing_config: Arc<SigningConfig>,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,

    /// Replacement credential when the stored one uses a superseded scheme
    pub upgraded_credential: Option<StoredCredential>,
}

/// Login operation errors.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Issue(#[from] IssueError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `signing_config` - Validated token signing configuration
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(signing_config: Arc<SigningConfig>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            signing_config,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Password blank or hashing failed
    pub fn hash_password(&self, password: &str) -> Result<StoredCredential, PasswordError> {
        self.password_hasher.hash(password).map(StoredCredential::Phc)
    }

    /// Verify credentials and generate a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored` - Persisted credential for the user
    /// * `identity` - Identity to encode in the token
    ///
    /// # Returns
    /// AuthenticationResult with access token and, for legacy digests, an
    /// Argon2id replacement the caller should persist
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Password blank or stored hash unreadable
    /// * `Issue` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored: &StoredCredential,
        identity: &Identity,
    ) -> Result<AuthenticationResult, LoginError> {
        if !verify_credential(password, stored)? {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self.generate_token(identity)?;

        let upgraded_credential = if stored.needs_rehash() {
            Some(self.hash_password(password)?)
        } else {
            None
        };

        Ok(AuthenticationResult {
            access_token,
            upgraded_credential,
        })
    }

    /// Generate a token without password verification.
    ///
    /// Useful when authentication has already been verified by other means.
    pub fn generate_token(&self, identity: &Identity) -> Result<String, IssueError> {
        jwt::issue(identity, &self.signing_config)
    }

    /// Validate a token and decode the identity it carries.
    pub fn validate_token(&self, token: &str) -> Result<Identity, AuthenticationError> {
        jwt::extract(token, &self.signing_config)
    }
}
