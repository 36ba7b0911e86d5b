//! Identity and credential handling
//!
//! Provides the authentication core shared by the backend services:
//! - Password hashing (Argon2id, plus the legacy SHA-256 digest)
//! - Signed session tokens (HS256 JWT) issued for a verified identity
//! - Identity extraction from bearer tokens
//!
//! All operations are synchronous and stateless. The [`SigningConfig`] is
//! built once at startup and passed in explicitly.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{extract, issue, Identity, SigningConfig};
//!
//! let config = SigningConfig::from_settings(
//!     "secret_key_at_least_32_bytes_long!",
//!     "orders-api",
//!     "orders-clients",
//!     60,
//! )
//! .unwrap();
//!
//! let identity = Identity::new(7, "Ana", "ana@x.com");
//! let token = issue(&identity, &config).unwrap();
//! assert_eq!(extract(&token, &config).unwrap(), identity);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//!
//! use auth::{Authenticator, Identity, SigningConfig};
//!
//! let config = SigningConfig::from_settings(
//!     "secret_key_at_least_32_bytes_long!",
//!     "orders-api",
//!     "orders-clients",
//!     60,
//! )
//! .unwrap();
//! let auth = Authenticator::new(Arc::new(config));
//!
//! // Register: hash password
//! let stored = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let identity = Identity::new(7, "Ana", "ana@x.com");
//! let result = auth.authenticate("password123", &stored, &identity).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.id, 7);
//! ```

pub mod authenticator;
pub mod bearer;
pub mod config;
pub mod identity;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::LoginError;
pub use bearer::bearer_token;
pub use config::ConfigurationError;
pub use config::SigningConfig;
pub use identity::Identity;
pub use jwt::extract;
pub use jwt::issue;
pub use jwt::sign;
pub use jwt::AuthenticationError;
pub use jwt::IssueError;
pub use jwt::TokenClaims;
pub use password::verify_credential;
pub use password::CredentialDigest;
pub use password::DigestHasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::StoredCredential;
