//! User entity and its public projections

use serde::{Deserialize, Serialize};

/// User identifier - positive integer assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The first identifier handed out by an empty store
    pub fn first() -> Self {
        Self(1)
    }

    /// The identifier following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated user fields as submitted by a client
#[derive(Clone, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserDraft {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDraft")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// User fields that passed validation
///
/// Only [`validate_user`](super::validate_user) can produce one, so anything the
/// repository stores has been validated.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedUser {
    username: String,
    email: String,
    password: String,
}

impl ValidatedUser {
    pub(super) fn new(username: String, email: String, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for ValidatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// User record owned by the store
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Store-assigned identifier, never changes
    id: UserId,
    username: String,
    email: String,
    /// Plain text password - never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
}

impl User {
    /// Create a record from validated fields
    pub fn new(id: UserId, fields: ValidatedUser) -> Self {
        Self {
            id,
            username: fields.username,
            email: fields.email,
            password: fields.password,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    // Mutators

    /// Replace every field except the identifier
    pub fn replace_fields(&mut self, fields: ValidatedUser) {
        self.username = fields.username;
        self.email = fields.email;
        self.password = fields.password;
    }

    /// Projection safe to return to clients
    pub fn to_public(&self) -> UserPublic {
        UserPublic::from(self)
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Public projection of a user - everything but the password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// List of public user projections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<UserPublic>,
}

impl From<Vec<UserPublic>> for UserList {
    fn from(users: Vec<UserPublic>) -> Self {
        Self { users }
    }
}
