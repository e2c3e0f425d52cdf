//! Domain layer - Core business logic and entities

pub mod error;
pub mod page;
pub mod user;

pub use error::DomainError;
pub use page::{PageRenderer, PageTemplate, TemplateError, TemplateVariable};
pub use user::{
    validate_user, User, UserDraft, UserId, UserList, UserPublic, UserRepository,
    UserValidationError, ValidatedUser,
};
