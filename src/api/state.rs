//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, PageRenderer, UserDraft, UserId, UserPublic, UserRepository};
use crate::infrastructure::user::UserService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub page_renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        page_renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            user_service,
            page_renderer,
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, draft: UserDraft) -> Result<UserPublic, DomainError>;
    async fn list(&self) -> Result<Vec<UserPublic>, DomainError>;
    async fn get(&self, id: UserId) -> Result<UserPublic, DomainError>;
    async fn update(&self, id: UserId, draft: UserDraft) -> Result<UserPublic, DomainError>;
    async fn delete(&self, id: UserId) -> Result<UserPublic, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(&self, draft: UserDraft) -> Result<UserPublic, DomainError> {
        UserService::create(self, draft).await
    }

    async fn list(&self) -> Result<Vec<UserPublic>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: UserId) -> Result<UserPublic, DomainError> {
        UserService::get(self, id).await
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> Result<UserPublic, DomainError> {
        UserService::update(self, id, draft).await
    }

    async fn delete(&self, id: UserId) -> Result<UserPublic, DomainError> {
        UserService::delete(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}
