//! User validation rules
//!
//! Every rule is a pure function over the submitted text. The rules never consult the
//! store, so a candidate is either accepted as a [`ValidatedUser`] or rejected with the
//! field and message of the first rule it breaks.

use thiserror::Error;

use super::entity::{UserDraft, ValidatedUser};

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("username must not be empty.")]
    EmptyUsername,

    #[error("invalid email")]
    InvalidEmail,

    #[error("password must have at least {0} characters.")]
    PasswordTooShort(usize),

    #[error("password must contain at least one uppercase letter.")]
    PasswordMissingUppercase,

    #[error("password must contain at least one number.")]
    PasswordMissingDigit,
}

impl UserValidationError {
    /// Name of the submitted field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "username",
            Self::InvalidEmail => "email",
            Self::PasswordTooShort(_)
            | Self::PasswordMissingUppercase
            | Self::PasswordMissingDigit => "password",
        }
    }
}

const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a username
///
/// Rules:
/// - Cannot be empty
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    Ok(())
}

/// Validate an email address
///
/// Only the presence of an `@` separator is checked.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !email.contains('@') {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a password
///
/// Rules, in order:
/// - Minimum 8 characters
/// - At least one uppercase letter (A-Z)
/// - At least one digit (0-9)
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(UserValidationError::PasswordMissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(UserValidationError::PasswordMissingDigit);
    }

    Ok(())
}

/// Validate a submitted user, checking username, email and password in that order
pub fn validate_user(draft: UserDraft) -> Result<ValidatedUser, UserValidationError> {
    validate_username(&draft.username)?;
    validate_email(&draft.email)?;
    validate_password(&draft.password)?;

    Ok(ValidatedUser::new(draft.username, draft.email, draft.password))
}
