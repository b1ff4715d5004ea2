//! NYC Taxi Explorer
//!
//! Single-page dashboard over the taxi trip API: summary cards, a
//! filterable trip table, fare-by-hour and top-zones charts, and a map of
//! pickup hotspots.
//!
//! Data flow:
//! 1. On mount: `bootstrap` loads the summary, the first page of trips, both
//!    charts and the map, one after another.
//! 2. On Apply: the filter controller re-fetches trips for the selected
//!    borough and hour. Only the newest response reaches the table.

use dioxus::prelude::*;
use ntx_chart_ui::bootstrap::bootstrap;
use ntx_chart_ui::components::{
    ChartContainer, ChartHeader, FilterBar, HotspotMap, LoadingSpinner, SummaryCards, TripsTable,
};
use ntx_chart_ui::state::AppState;
use ntx_view::view::{FARE_CHART_ID, ZONES_CHART_ID};
use ntx_view::HotspotMapConfig;

const SECTION_STYLE: &str = "margin-top: 16px; padding: 12px; background: white; border-radius: 8px; border: 1px solid #e0e0e0;";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("taxi-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Runs once: the effect reads no signals.
    use_effect(move || {
        spawn(bootstrap(state, HotspotMapConfig::nyc_sample()));
    });

    // Canvases and the map container are rendered from the start so the
    // bootstrap can draw into them while the spinner is still showing.
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; background: #f5f5f5;",

            h1 {
                style: "font-size: 22px; margin: 8px 0;",
                "NYC Taxi Explorer"
            }

            if *state.loading.read() {
                LoadingSpinner {}
            }

            SummaryCards {}

            div {
                style: SECTION_STYLE,
                ChartHeader {
                    title: "Recent Trips".to_string(),
                    description: "Filter by pickup borough and hour, then press Apply.".to_string(),
                }
                FilterBar {}
                TripsTable {}
            }

            div {
                style: SECTION_STYLE,
                ChartHeader {
                    title: "Average Fare by Hour".to_string(),
                    description: "Mean fare amount for trips starting in each hour of the day.".to_string(),
                }
                ChartContainer { id: FARE_CHART_ID.to_string() }
            }

            div {
                style: SECTION_STYLE,
                ChartHeader {
                    title: "Top Pickup Zones".to_string(),
                }
                ChartContainer { id: ZONES_CHART_ID.to_string(), min_height: 360 }
            }

            div {
                style: SECTION_STYLE,
                ChartHeader {
                    title: "Pickup Hotspots".to_string(),
                    description: "Circle area grows with the number of pickups.".to_string(),
                }
                HotspotMap {}
            }
        }
    }
}
