use clap::Parser;
use rest_users::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve => cli::serve::run().await,
        Command::Api => cli::api::run().await,
    }
}
