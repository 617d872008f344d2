//! In-memory user registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{User, UserCode},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserCode, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let by_code = users.into_iter().map(|user| (user.code(), user)).collect();
        Self {
            users: Arc::new(RwLock::new(by_code)),
        }
    }

    /// Adds or replaces a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the registry lock is
    /// poisoned.
    pub fn register(&self, user: User) -> UserRepositoryResult<()> {
        let mut users = self.users.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        users.insert(user.code(), user);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.get(&code).cloned())
    }
}
