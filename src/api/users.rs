//! User record endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Router,
};
use tracing::debug;

use super::state::AppState;
use super::types::{ApiError, Json, UserIdPath};
use crate::domain::{UserDraft, UserList, UserPublic};

/// Create the users router
///
/// The collection path keeps its trailing slash: `/users/`.
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> Result<(StatusCode, Json<UserPublic>), ApiError> {
    debug!(username = %draft.username, "Creating user");

    let user = state.user_service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserList>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;

    Ok(Json(UserList::from(users)))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<UserPublic>, ApiError> {
    debug!(user_id = %id, "Getting user");

    let user = state.user_service.get(id).await?;

    Ok(Json(user))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    Json(draft): Json<UserDraft>,
) -> Result<Json<UserPublic>, ApiError> {
    debug!(user_id = %id, username = %draft.username, "Updating user");

    let user = state.user_service.update(id, draft).await?;

    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<UserPublic>, ApiError> {
    debug!(user_id = %id, "Deleting user");

    let user = state.user_service.delete(id).await?;

    Ok(Json(user))
}
