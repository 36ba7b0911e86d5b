pub mod argon2;
pub mod digest;
pub mod errors;

pub use self::argon2::PasswordHasher;
pub use digest::CredentialDigest;
pub use digest::DigestHasher;
pub use errors::PasswordError;

/// Password-derived value persisted for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredCredential {
    /// Legacy unsalted SHA-256 digest
    Digest(CredentialDigest),
    /// Argon2id PHC string
    Phc(String),
}

impl StoredCredential {
    /// Whether this credential should be replaced by an Argon2id hash.
    pub fn needs_rehash(&self) -> bool {
        matches!(self, StoredCredential::Digest(_))
    }
}

/// Verify a submitted password against whichever scheme stored it.
///
/// # Errors
/// * `PasswordRequired` - Password is empty after trimming
/// * `VerificationFailed` - Stored PHC string is unreadable
pub fn verify_credential(password: &str, stored: &StoredCredential) -> Result<bool, PasswordError> {
    match stored {
        StoredCredential::Digest(digest) => DigestHasher::new().verify(password, digest),
        StoredCredential::Phc(hash) => PasswordHasher::new().verify(password, hash),
    }
}
