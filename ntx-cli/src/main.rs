//! NTX CLI - Command line tool for querying the NYC taxi trip API.

use anyhow::Context;
use clap::Parser;
use ntx_api::{ApiClient, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(
    name = "ntx-cli",
    version,
    about = "NYC Taxi Explorer data toolkit"
)]
struct Cli {
    /// Base URL of the taxi API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: ntx_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.api_url)
        .with_context(|| format!("invalid --api-url {:?}", cli.api_url))?;
    log::debug!("Using API at {}", client.base_url());
    ntx_cmd::run(cli.command, &client).await
}
