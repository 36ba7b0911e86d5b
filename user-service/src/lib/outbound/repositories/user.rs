use std::collections::BTreeMap;

use async_trait::async_trait;
use auth::StoredCredential;
use tokio::sync::RwLock;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Assigns sequential identifiers starting at 1 and enforces email
/// uniqueness ignoring ASCII case.
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

struct State {
    next_id: i64,
    users: BTreeMap<UserId, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut state = self.state.write().await;

        let taken = state
            .users
            .values()
            .any(|existing| existing.email.as_str().eq_ignore_ascii_case(user.email.as_str()));
        if taken {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let id = UserId(state.next_id);
        state.next_id += 1;

        let user = user.with_id(id);
        state.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.state.read().await.users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|user| user.email.as_str().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn update_credential(
        &self,
        id: &UserId,
        credential: StoredCredential,
    ) -> Result<(), UserError> {
        let mut state = self.state.write().await;

        let user = state
            .users
            .get_mut(id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        user.credential = credential;

        Ok(())
    }
}
