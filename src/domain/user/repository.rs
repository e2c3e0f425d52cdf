//! User repository trait

use async_trait::async_trait;

use super::entity::{User, UserId, ValidatedUser};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository trait for user storage
///
/// Identity is owned by the repository: `create` assigns the id, `update` keeps it.
/// Lookups resolve by id, never by position.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under a freshly assigned id
    async fn create(&self, fields: ValidatedUser) -> Result<User, DomainError>;

    /// List every user in store order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by id
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Replace the fields of an existing user, keeping its id and position
    async fn update(&self, id: UserId, fields: ValidatedUser) -> Result<Option<User>, DomainError>;

    /// Remove a user, returning the removed record
    async fn delete(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a user id exists
    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
