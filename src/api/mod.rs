//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

pub use router::{create_router, create_router_with_options, RouterOptions};
pub use state::{AppState, UserServiceTrait};
