//! API middleware components

pub mod logging;
pub mod metrics;
pub mod security;

pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
pub use security::security_headers_middleware;

use axum::{body::Body, extract::MatchedPath, http::Request};

/// Route pattern of the request (e.g. `/users/{id}`), or the raw path when unmatched
fn route_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}
