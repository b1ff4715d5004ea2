//! One-shot initial load of the dashboard.
//!
//! The filter dropdowns (24 hours plus the fixed borough list) and the
//! Apply handler are part of the `FilterBar` markup, so they exist before
//! this runs. The data loads then happen strictly one after another; each
//! one degrades to its own empty/error state without blocking the rest.

use crate::controller;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use log::info;
use ntx_api::{Filter, DEFAULT_TOP_ZONES};
use ntx_view::{HotspotMapConfig, SummaryView};

/// DOM id of the Leaflet map container.
pub const HOTSPOT_MAP_ID: &str = "hotspot-map";

/// Load every view once. Call from a single effect on the root component.
pub async fn bootstrap(mut state: AppState, map_config: HotspotMapConfig) {
    info!("Starting NYC Taxi Explorer...");
    js_bridge::init_charts();
    let client = state.client.peek().clone();

    let summary = client.summary().await;
    state.summary.set(SummaryView::render(summary.as_ref()));

    controller::load_trips(state, Filter::default()).await;

    let fares = client.hourly_fares().await;
    state.view.write().render_fare_chart(fares.as_deref());

    let zones = client.top_zones(DEFAULT_TOP_ZONES).await;
    state.view.write().render_top_zones_chart(zones.as_deref());

    js_bridge::render_hotspot_map(HOTSPOT_MAP_ID, &map_config.to_leaflet_json());

    state.loading.set(false);
    info!("Dashboard loaded!");
}
