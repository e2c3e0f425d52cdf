//! API command - runs the users API only (no HTML pages)

/// Run the API-only server
pub async fn run() -> anyhow::Result<()> {
    super::run_server(false).await
}
