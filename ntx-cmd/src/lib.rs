//! Command implementations for the NYC Taxi Explorer CLI.
//!
//! Each subcommand fetches through the same `ApiClient` the dashboard uses
//! and prints the same view models as plain text. Unavailable data prints
//! the dashboard's empty/error states instead of failing the command.

use clap::Subcommand;
use ntx_api::{ApiClient, DEFAULT_TOP_ZONES};

pub mod export;
pub mod query;
pub mod report;
pub mod text;

#[derive(Subcommand)]
pub enum Command {
    /// Print the dataset summary (trip count, average fare and distance)
    Summary,

    /// List trips, optionally filtered by pickup borough and hour
    Trips {
        /// Pickup borough, e.g. "Manhattan" (default: all boroughs)
        #[arg(short, long)]
        borough: Option<String>,

        /// Pickup hour 0-23 (default: all hours)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=23))]
        hour: Option<u8>,

        /// Also write the fetched trips to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print average fare by pickup hour
    Fares,

    /// Print the busiest pickup zones
    TopZones {
        /// Number of zones to request
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_ZONES)]
        n: usize,
    },

    /// Load every dashboard view in order and print them all
    Report,

    /// Check that the API service is up
    Health,
}

pub async fn run(command: Command, client: &ApiClient) -> anyhow::Result<()> {
    match command {
        Command::Summary => query::run_summary(client).await,
        Command::Trips { borough, hour, csv } => {
            query::run_trips(client, borough, hour, csv.as_deref()).await
        }
        Command::Fares => query::run_fares(client).await,
        Command::TopZones { n } => query::run_top_zones(client, n).await,
        Command::Report => report::run_report(client).await,
        Command::Health => query::run_health(client).await,
    }
}
