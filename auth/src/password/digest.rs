use sha2::Digest;
use sha2::Sha256;

use super::errors::require_password;
use super::errors::PasswordError;

/// SHA-256 output length in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Fixed-length unsalted password digest.
///
/// Kept for credentials persisted by the legacy scheme. New credentials are
/// hashed with Argon2id (see [`super::PasswordHasher`]).
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialDigest([u8; DIGEST_LENGTH]);

impl CredentialDigest {
    /// Rebuild a digest from stored bytes.
    ///
    /// # Errors
    /// * `InvalidDigest` - Slice is not exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PasswordError> {
        let digest: [u8; DIGEST_LENGTH] =
            bytes.try_into().map_err(|_| PasswordError::InvalidDigest {
                expected: DIGEST_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self(digest))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Compare without short-circuiting on the first differing byte.
    pub fn ct_eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for CredentialDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CredentialDigest(..)")
    }
}

/// Deterministic SHA-256 credential hasher.
///
/// Same password always yields the same digest: no salt, no work factor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestHasher;

impl DigestHasher {
    pub fn new() -> Self {
        Self
    }

    /// Digest the UTF-8 bytes of a password.
    ///
    /// # Errors
    /// * `PasswordRequired` - Password is empty after trimming
    pub fn hash(&self, password: &str) -> Result<CredentialDigest, PasswordError> {
        require_password(password)?;

        let digest = Sha256::digest(password.as_bytes());
        Ok(CredentialDigest(digest.into()))
    }

    /// Hash the submitted password and compare it with the stored digest.
    pub fn verify(&self, password: &str, stored: &CredentialDigest) -> Result<bool, PasswordError> {
        let submitted = self.hash(password)?;
        Ok(submitted.ct_eq(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = DigestHasher::new();

        let first = hasher.hash("secret123").unwrap();
        let second = hasher.hash("secret123").unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());

        let other = hasher.hash("secret124").unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_hash_matches_sha256() {
        let hasher = DigestHasher::new();
        let digest = hasher.hash("abc").unwrap();

        let expected: [u8; 32] = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(digest.as_bytes(), &expected);
    }

    #[test]
    fn test_hash_rejects_blank_password() {
        let hasher = DigestHasher::new();
        assert_eq!(hasher.hash(""), Err(PasswordError::PasswordRequired));
        assert_eq!(hasher.hash("   \t"), Err(PasswordError::PasswordRequired));
    }

    #[test]
    fn test_verify() {
        let hasher = DigestHasher::new();
        let stored = hasher.hash("secret123").unwrap();

        assert!(hasher.verify("secret123", &stored).unwrap());
        assert!(!hasher.verify("secret124", &stored).unwrap());
    }

    #[test]
    fn test_from_slice_length() {
        assert!(CredentialDigest::from_slice(&[0u8; 32]).is_ok());
        assert_eq!(
            CredentialDigest::from_slice(&[0u8; 20]).unwrap_err(),
            PasswordError::InvalidDigest {
                expected: 32,
                actual: 20
            }
        );
    }
}
