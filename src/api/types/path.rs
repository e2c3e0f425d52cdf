//! Path extractor for user ids

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::ApiError;
use crate::domain::UserId;

/// User id taken from the `{id}` path segment
///
/// Anything that is not a positive integer is rejected as unprocessable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        parse_user_id(&raw).map(UserIdPath)
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(UserId::new(id)),
        _ => Err(ApiError::unprocessable(format!(
            "Invalid user id '{}': expected a positive integer",
            raw
        ))
        .with_param("id")),
    }
}
