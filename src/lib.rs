//! REST Users
//!
//! A small HTTP service managing user records:
//! - JSON CRUD API over an in-memory user store
//! - Validation of usernames, emails and passwords before any write
//! - Server-rendered listing and creation pages

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::page::FilePageRenderer;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    info!(templates = %config.templates.dir, "Using in-memory user store");

    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));
    let page_renderer = Arc::new(FilePageRenderer::new(&config.templates.dir));

    AppState::new(user_service, page_renderer)
}
