use thiserror::Error;

use super::page::TemplateError;
use super::user::{UserId, UserValidationError};

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User {id} not found")]
    NotFound { id: UserId },

    #[error("Validation error on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        Self::validation(err.field(), err.to_string())
    }
}

impl From<TemplateError> for DomainError {
    fn from(err: TemplateError) -> Self {
        Self::template(err.to_string())
    }
}
