//! Server-rendered HTML pages

use std::collections::HashMap;

use axum::{extract::State, response::Html, routing::get, Router};
use tracing::debug;

use super::state::AppState;
use super::types::ApiError;

pub const LIST_USERS_TEMPLATE: &str = "get_users.html";
pub const CREATE_USER_TEMPLATE: &str = "create_user.html";

const USERS_ENDPOINT: &str = "/users/";

/// Create the pages router
pub fn create_pages_router() -> Router<AppState> {
    Router::new()
        .route("/get_users.html", get(list_users_page))
        .route("/create_user.html", get(create_user_page))
}

/// GET /get_users.html
pub async fn list_users_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_page(&state, LIST_USERS_TEMPLATE, "Users").await
}

/// GET /create_user.html
pub async fn create_user_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_page(&state, CREATE_USER_TEMPLATE, "Create user").await
}

async fn render_page(
    state: &AppState,
    template: &str,
    title: &str,
) -> Result<Html<String>, ApiError> {
    debug!(template = %template, "Rendering page");

    let variables = HashMap::from([
        ("title".to_string(), title.to_string()),
        ("users_endpoint".to_string(), USERS_ENDPOINT.to_string()),
    ]);

    let html = state.page_renderer.render(template, &variables).await?;

    Ok(Html(html))
}
