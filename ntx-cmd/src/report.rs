//! Full dashboard report.

use crate::text;
use chrono::Local;
use log::info;
use ntx_api::{ApiClient, Filter, DEFAULT_TOP_ZONES};
use ntx_view::{ChartSpec, HotspotMapConfig, SummaryView, TripTable};

/// Load the views in the same order as the dashboard bootstrap and print
/// them as one report. Each section degrades on its own.
pub async fn run_report(client: &ApiClient) -> anyhow::Result<()> {
    info!("Building report from {}", client.base_url());
    let mut out = format!(
        "NYC Taxi Explorer report ({})\nSource: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        client.base_url()
    );

    let stats = client.summary().await;
    out.push_str(&text::summary_text(&SummaryView::render(stats.as_ref())));
    out.push('\n');

    let trips = client.trips(&Filter::default()).await;
    out.push_str("Recent Trips\n");
    out.push_str(&text::trip_table_text(&TripTable::render(trips.as_deref())));
    out.push('\n');

    let fares = client.hourly_fares().await;
    let spec = ChartSpec::fare_by_hour(fares.as_deref());
    out.push_str(&text::chart_text("Average Fare by Hour", spec.as_ref()));
    out.push('\n');

    let zones = client.top_zones(DEFAULT_TOP_ZONES).await;
    let spec = ChartSpec::top_zones(zones.as_deref());
    out.push_str(&text::chart_text("Top Pickup Zones", spec.as_ref()));
    out.push('\n');

    out.push_str(&text::hotspots_text(&HotspotMapConfig::nyc_sample()));

    print!("{}", out);
    Ok(())
}
