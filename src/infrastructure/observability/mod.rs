//! Observability infrastructure - Metrics

mod config;
mod metrics;

pub use config::{MetricsConfig, ObservabilityConfig};
pub use metrics::{
    create_metrics_router, init_metrics, record_http_request, record_user_count,
    record_user_operation, PrometheusMetrics,
};
