//! Single-view subcommands.

use crate::{export, text};
use ntx_api::{ApiClient, Filter};
use ntx_view::{ChartSpec, SummaryView, TripTable};
use log::info;
use std::fs::File;

pub async fn run_summary(client: &ApiClient) -> anyhow::Result<()> {
    let stats = client.summary().await;
    print!("{}", text::summary_text(&SummaryView::render(stats.as_ref())));
    Ok(())
}

/// Print trips for the given filter, and write them to `csv_path` if set.
/// An empty borough means all boroughs.
pub async fn run_trips(
    client: &ApiClient,
    borough: Option<String>,
    hour: Option<u8>,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let filter = Filter::new(borough, hour);
    let trips = client.trips(&filter).await;

    print!("{}", text::trip_table_text(&TripTable::render(trips.as_deref())));

    if let Some(path) = csv_path {
        let rows = trips.as_deref().unwrap_or_default();
        let file = File::create(path)?;
        export::write_trips_csv(file, rows)?;
        info!("Wrote {} trips to {}", rows.len(), path);
    }
    Ok(())
}

pub async fn run_fares(client: &ApiClient) -> anyhow::Result<()> {
    let fares = client.hourly_fares().await;
    let spec = ChartSpec::fare_by_hour(fares.as_deref());
    print!("{}", text::chart_text("Average Fare by Hour", spec.as_ref()));
    Ok(())
}

pub async fn run_top_zones(client: &ApiClient, n: usize) -> anyhow::Result<()> {
    let zones = client.top_zones(n).await;
    let spec = ChartSpec::top_zones(zones.as_deref());
    print!("{}", text::chart_text("Top Pickup Zones", spec.as_ref()));
    Ok(())
}

pub async fn run_health(client: &ApiClient) -> anyhow::Result<()> {
    let status = client.health().await;
    println!("{}", text::health_text(client.base_url(), status.as_ref()));
    Ok(())
}
