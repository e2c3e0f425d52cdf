//! User infrastructure module
//!
//! In-memory user repository and the user service that validates submissions
//! before they reach it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
