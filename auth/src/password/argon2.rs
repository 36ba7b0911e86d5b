use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::require_password;
use super::errors::PasswordError;

/// Argon2id hasher behind [`StoredCredential::Phc`](super::StoredCredential::Phc).
///
/// Every credential written by registration or by a legacy-digest upgrade
/// goes through here. Parameters and salt travel inside the PHC string, so
/// verification needs nothing but the stored value.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Produce a fresh `$argon2id$...` PHC string with a random salt.
    ///
    /// Two calls on the same password never yield the same string.
    ///
    /// # Errors
    /// * `PasswordRequired` - Blank after trimming
    /// * `HashingFailed` - argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        require_password(password)?;

        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|phc| phc.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a password against a persisted PHC string.
    ///
    /// A mismatch is `Ok(false)`; only an unreadable PHC string is an error,
    /// since that points at corrupt storage rather than a bad login.
    ///
    /// # Errors
    /// * `PasswordRequired` - Blank after trimming
    /// * `VerificationFailed` - Stored value is not a PHC string
    pub fn verify(&self, password: &str, phc: &str) -> Result<bool, PasswordError> {
        require_password(password)?;

        let parsed = PasswordHash::new(phc).map_err(|e| {
            PasswordError::VerificationFailed(format!("unreadable stored credential: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
