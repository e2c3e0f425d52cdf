//! In-memory user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository, ValidatedUser};
use crate::domain::DomainError;

/// Users in store order plus the next id to hand out
#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    next_id: UserId,
}

impl UserTable {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id() == id)
    }
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: UserId::first(),
        }
    }
}

/// In-memory implementation of UserRepository
///
/// Ids come from a monotonic counter and are never reused, so deleting a user never
/// lets a later create collide with an id that was already handed out.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with users, assigned ids in the given order
    pub fn with_users(users: Vec<ValidatedUser>) -> Self {
        let mut table = UserTable::default();

        for fields in users {
            let id = table.next_id;
            table.users.push(User::new(id, fields));
            table.next_id = id.next();
        }

        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, fields: ValidatedUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        let user = User::new(id, fields);

        table.users.push(user.clone());
        table.next_id = id.next();

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn update(&self, id: UserId, fields: ValidatedUser) -> Result<Option<User>, DomainError> {
        let mut table = self.table.write().await;

        match table.users.iter_mut().find(|u| u.id() == id) {
            Some(user) => {
                user.replace_fields(fields);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let mut table = self.table.write().await;

        // `remove` keeps the remaining users in store order
        Ok(table.position(id).map(|index| table.users.remove(index)))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{validate_user, UserDraft};

    fn fields(username: &str) -> ValidatedUser {
        let email = format!("{}@x.com", username);
        validate_user(UserDraft::new(username, email, "Secret1x")).unwrap()
    }

    fn usernames(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.username()).collect()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        for (expected, name) in ["alice", "bob", "carol", "dave"].iter().enumerate() {
            let user = repo.create(fields(name)).await.unwrap();
            assert_eq!(user.id(), UserId::new(expected as u64 + 1));
        }

        let ids: Vec<u64> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|u| u.id().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(fields("alice")).await.unwrap();

        let retrieved = repo.get(created.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.username(), "alice");
        assert_eq!(retrieved.email(), "alice@x.com");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.get(UserId::new(1)).await.unwrap().is_none());
        assert!(!repo.exists(UserId::new(1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_position() {
        let repo = InMemoryUserRepository::new();
        repo.create(fields("alice")).await.unwrap();
        repo.create(fields("bob")).await.unwrap();

        let updated = repo
            .update(UserId::new(1), fields("alicia"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id(), UserId::new(1));
        assert_eq!(updated.username(), "alicia");
        assert_eq!(usernames(&repo.list().await.unwrap()), vec!["alicia", "bob"]);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryUserRepository::new();
        repo.create(fields("alice")).await.unwrap();

        let result = repo.update(UserId::new(2), fields("bob")).await.unwrap();
        assert!(result.is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_after_delete_targets_matching_id() {
        let repo = InMemoryUserRepository::new();
        repo.create(fields("alice")).await.unwrap();
        repo.create(fields("bob")).await.unwrap();
        repo.create(fields("carol")).await.unwrap();

        repo.delete(UserId::new(1)).await.unwrap();

        // Position 1 now holds carol, id 2 is still bob
        let updated = repo
            .update(UserId::new(2), fields("robert"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id(), UserId::new(2));
        let users = repo.list().await.unwrap();
        assert_eq!(usernames(&users), vec!["robert", "carol"]);
        assert_eq!(users[1].id(), UserId::new(3));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(fields("alice")).await.unwrap();

        let deleted = repo.delete(user.id()).await.unwrap().unwrap();
        assert_eq!(deleted.username(), "alice");

        assert!(repo.get(user.id()).await.unwrap().is_none());
        assert!(repo.delete(user.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let repo = InMemoryUserRepository::new();
        for name in ["alice", "bob", "carol"] {
            repo.create(fields(name)).await.unwrap();
        }

        repo.delete(UserId::new(2)).await.unwrap();

        assert_eq!(usernames(&repo.list().await.unwrap()), vec!["alice", "carol"]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        for name in ["alice", "bob", "carol"] {
            repo.create(fields(name)).await.unwrap();
        }

        repo.delete(UserId::new(2)).await.unwrap();
        let dave = repo.create(fields("dave")).await.unwrap();
        assert_eq!(dave.id(), UserId::new(4));

        repo.delete(UserId::new(4)).await.unwrap();
        let erin = repo.create(fields("erin")).await.unwrap();
        assert_eq!(erin.id(), UserId::new(5));
    }

    #[tokio::test]
    async fn test_count() {
        let repo = InMemoryUserRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(fields("alice")).await.unwrap();
        repo.create(fields("bob")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_with_users() {
        let repo = InMemoryUserRepository::with_users(vec![fields("alice"), fields("bob")]);

        assert_eq!(repo.count().await.unwrap(), 2);
        let bob = repo.get(UserId::new(2)).await.unwrap().unwrap();
        assert_eq!(bob.username(), "bob");

        let carol = repo.create(fields("carol")).await.unwrap();
        assert_eq!(carol.id(), UserId::new(3));
    }
}
