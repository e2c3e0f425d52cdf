//! CLI module for REST Users
//!
//! Provides subcommands for running the service in different modes:
//! - `serve`: users API + HTML pages (default)
//! - `api`: users API only

pub mod api;
pub mod serve;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::{create_router_with_options, RouterOptions};
use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::observability::init_metrics;

/// REST Users - in-memory user records API
#[derive(Parser)]
#[command(name = "rest-users")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the users API together with the HTML pages (default mode)
    #[default]
    Serve,

    /// Run the users API only
    Api,
}

/// Load `.env` and configuration, then install logging
fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    if let Some(e) = load_error {
        tracing::warn!("Failed to load configuration, using defaults: {}", e);
    }

    config
}

/// Build the router for the given mode and serve it until shutdown
async fn run_server(pages: bool) -> anyhow::Result<()> {
    let config = load_config();

    let state = crate::create_app_state(&config);
    let metrics = init_metrics(&config.observability.metrics)
        .map(|m| (m, config.observability.metrics.path.clone()));

    let app = create_router_with_options(
        state,
        RouterOptions {
            pages,
            cors: config.server.cors_enabled,
            metrics,
        },
    );

    let addr = build_socket_addr(&config)?;
    let mode = if pages { "API + pages" } else { "API only" };
    info!("Starting server ({}) on {}", mode, addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
