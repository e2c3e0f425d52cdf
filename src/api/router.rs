use axum::{http::Uri, middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::pages;
use super::state::AppState;
use super::types::ApiError;
use super::users;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Which optional surfaces a router exposes
#[derive(Clone, Default)]
pub struct RouterOptions {
    /// Serve the HTML pages next to the JSON API
    pub pages: bool,
    /// Allow cross-origin browser clients
    pub cors: bool,
    /// Prometheus handle and the path to expose it on
    pub metrics: Option<(PrometheusMetrics, String)>,
}

/// Create the full router: users API, HTML pages and health probes
pub fn create_router(state: AppState) -> Router {
    create_router_with_options(
        state,
        RouterOptions {
            pages: true,
            ..RouterOptions::default()
        },
    )
}

/// Create a router exposing the requested surfaces
pub fn create_router_with_options(state: AppState, options: RouterOptions) -> Router {
    let mut routes = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User records
        .merge(users::create_users_router());

    if options.pages {
        routes = routes.merge(pages::create_pages_router());
    }

    let mut router = routes
        .fallback(route_not_found)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http());

    if options.cors {
        router = router.layer(CorsLayer::permissive());
    }

    if let Some((metrics, path)) = options.metrics {
        router = router.merge(create_metrics_router(metrics, &path));
    }

    router
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
