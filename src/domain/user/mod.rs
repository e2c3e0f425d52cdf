//! User domain
//!
//! Domain types, validation rules and the repository trait for user records.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserDraft, UserId, UserList, UserPublic, ValidatedUser};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_password, validate_user, validate_username, UserValidationError,
};

#[cfg(test)]
pub use repository::MockUserRepository;
