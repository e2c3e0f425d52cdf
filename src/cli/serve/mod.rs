//! Serve command - users API plus the HTML pages

/// Run the API + pages server
pub async fn run() -> anyhow::Result<()> {
    super::run_server(true).await
}
