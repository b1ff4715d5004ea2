//! Reusable Dioxus RSX components for the taxi dashboard.

mod chart_container;
mod chart_header;
mod filter_bar;
mod hotspot_map;
mod loading_spinner;
mod summary_cards;
mod trips_table;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use filter_bar::FilterBar;
pub use hotspot_map::HotspotMap;
pub use loading_spinner::LoadingSpinner;
pub use summary_cards::SummaryCards;
pub use trips_table::TripsTable;
