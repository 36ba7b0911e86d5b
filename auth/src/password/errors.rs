use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password required")]
    PasswordRequired,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Invalid credential digest: expected {expected} bytes, got {actual}")]
    InvalidDigest { expected: usize, actual: usize },
}

/// Reject passwords that are empty once surrounding whitespace is removed.
pub(crate) fn require_password(password: &str) -> Result<(), PasswordError> {
    if password.trim().is_empty() {
        return Err(PasswordError::PasswordRequired);
    }
    Ok(())
}
