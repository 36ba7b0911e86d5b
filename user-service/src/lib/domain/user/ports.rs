use async_trait::async_trait;
use auth::Identity;
use auth::StoredCredential;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `Password` - Password is blank
    /// * `EmailAlreadyExists` - Email is already registered
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError>;

    /// Retrieve every registered user.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Verify a password and mint a session token.
    ///
    /// Unknown emails, inactive accounts, and wrong passwords are all
    /// reported as `InvalidCredentials`.
    ///
    /// # Errors
    /// * `Password` - Password is blank
    /// * `InvalidCredentials` - Email/password pair rejected
    /// * `TokenIssue` - Signing configuration is unusable
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, UserError>;

    /// Recover the caller's identity from a bearer token.
    ///
    /// # Errors
    /// * `Authentication` - Token rejected
    /// * `AccountUnavailable` - Identity refresh found no active user
    async fn resolve_identity(&self, token: &str) -> Result<Identity, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage and assign its identifier.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address (case-insensitive).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users ordered by identifier.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Replace a user's stored credential.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn update_credential(
        &self,
        id: &UserId,
        credential: StoredCredential,
    ) -> Result<(), UserError>;
}
