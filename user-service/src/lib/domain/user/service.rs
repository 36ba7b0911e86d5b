use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Identity;
use auth::LoginError;
use auth::PasswordError;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    refresh_identity: bool,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Credential and token handling
    /// * `refresh_identity` - Re-read the user on every authenticated request
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        refresh_identity: bool,
    ) -> Self {
        Self {
            repository,
            authenticator,
            refresh_identity,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let credential = self.authenticator.hash_password(&command.password)?;

        let user = NewUser {
            name: command.name,
            email: command.email,
            credential,
            active: true,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, UserError> {
        if password.trim().is_empty() {
            return Err(PasswordError::PasswordRequired.into());
        }

        let Some(user) = self.repository.find_by_email(email.trim()).await? else {
            tracing::warn!("Login rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        if !user.active {
            tracing::warn!(user_id = %user.id, "Login rejected: inactive account");
            return Err(UserError::InvalidCredentials);
        }

        let result = self
            .authenticator
            .authenticate(password, &user.credential, &user.identity())
            .map_err(|e| match e {
                LoginError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
                    UserError::InvalidCredentials
                }
                LoginError::Password(err) => UserError::Password(err),
                LoginError::Issue(err) => {
                    tracing::error!(error = %err, "Token issuance failed");
                    UserError::TokenIssue(err)
                }
            })?;

        if let Some(credential) = result.upgraded_credential {
            match self.repository.update_credential(&user.id, credential).await {
                Ok(()) => tracing::info!(user_id = %user.id, "Legacy credential rehashed"),
                Err(e) => tracing::error!(
                    user_id = %user.id,
                    error = %e,
                    "Failed to persist rehashed credential"
                ),
            }
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            user,
            token: result.access_token,
        })
    }

    async fn resolve_identity(&self, token: &str) -> Result<Identity, UserError> {
        let identity = self.authenticator.validate_token(token)?;

        if !self.refresh_identity {
            return Ok(identity);
        }

        match self.repository.find_by_id(&UserId(identity.id)).await? {
            Some(user) if user.active => Ok(user.identity()),
            _ => {
                tracing::warn!(user_id = identity.id, "Token subject no longer active");
                Err(UserError::AccountUnavailable)
            }
        }
    }
}
