//! Read-only port onto the user registry.

use crate::task::domain::{User, UserCode};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user registry lookups.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User registry contract.
///
/// The task service only ever reads users; registration belongs to whoever
/// owns the registry.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by code.
    ///
    /// Returns `None` when no user is registered under the code.
    async fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>>;
}

/// Errors returned by user registry implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
