//! Infrastructure layer - Store, rendering and observability implementations

pub mod logging;
pub mod observability;
pub mod page;
pub mod user;
