//! User service composing validation with the user repository

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::user::{validate_user, UserDraft, UserId, UserPublic, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_user_count, record_user_operation};

/// User service for record management
///
/// Every mutation validates its input first, so the repository only ever receives
/// validated fields. Results are returned as public projections.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a new user
    pub async fn create(&self, draft: UserDraft) -> Result<UserPublic, DomainError> {
        let fields = validate_user(draft).map_err(|e| {
            warn!(field = e.field(), reason = %e, "Rejected user creation");
            record_user_operation("create", "invalid");
            DomainError::from(e)
        })?;

        let user = self.repository.create(fields).await?;

        info!(user_id = %user.id(), username = %user.username(), "User created");
        record_user_operation("create", "ok");
        self.refresh_count().await;

        Ok(user.to_public())
    }

    /// List every user in store order
    pub async fn list(&self) -> Result<Vec<UserPublic>, DomainError> {
        let users = self.repository.list().await?;

        debug!(count = users.len(), "Listed users");
        record_user_operation("list", "ok");

        Ok(users.iter().map(UserPublic::from).collect())
    }

    /// Get a user by id
    pub async fn get(&self, id: UserId) -> Result<UserPublic, DomainError> {
        match self.repository.get(id).await? {
            Some(user) => {
                record_user_operation("get", "ok");
                Ok(user.to_public())
            }
            None => {
                debug!(user_id = %id, "User not found");
                record_user_operation("get", "not_found");
                Err(DomainError::not_found(id))
            }
        }
    }

    /// Validate and replace the fields of an existing user
    pub async fn update(&self, id: UserId, draft: UserDraft) -> Result<UserPublic, DomainError> {
        let fields = validate_user(draft).map_err(|e| {
            warn!(user_id = %id, field = e.field(), reason = %e, "Rejected user update");
            record_user_operation("update", "invalid");
            DomainError::from(e)
        })?;

        match self.repository.update(id, fields).await? {
            Some(user) => {
                info!(user_id = %id, username = %user.username(), "User updated");
                record_user_operation("update", "ok");
                Ok(user.to_public())
            }
            None => {
                debug!(user_id = %id, "User to update not found");
                record_user_operation("update", "not_found");
                Err(DomainError::not_found(id))
            }
        }
    }

    /// Delete a user, returning the removed record
    pub async fn delete(&self, id: UserId) -> Result<UserPublic, DomainError> {
        match self.repository.delete(id).await? {
            Some(user) => {
                info!(user_id = %id, username = %user.username(), "User deleted");
                record_user_operation("delete", "ok");
                self.refresh_count().await;
                Ok(user.into())
            }
            None => {
                debug!(user_id = %id, "User to delete not found");
                record_user_operation("delete", "not_found");
                Err(DomainError::not_found(id))
            }
        }
    }

    /// Count stored users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    async fn refresh_count(&self) {
        if let Ok(count) = self.repository.count().await {
            record_user_count(count);
        }
    }
}
