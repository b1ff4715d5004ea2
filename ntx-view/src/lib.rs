//! View models for the NYC Taxi Explorer dashboard.
//!
//! Each renderer here is a pure function from an API payload (or its
//! absence) to a value the UI can display as-is. Nothing in this crate
//! touches the DOM, so the dashboard and the CLI share it.
//!
//! - `format`: number formatting helpers
//! - `summary`, `trips`: the stat cards and the trip table
//! - `chart`: Chart.js specs, `ChartBackend` and the destroy-then-draw `ChartSlot`
//! - `map`: the hotspot map configuration
//! - `sequence`: request tickets used to drop stale trip responses
//! - `view`: `DashboardView`, owner of both chart slots
//! - `options`: dropdown options for the filter bar

pub mod chart;
pub mod format;
pub mod map;
pub mod options;
pub mod sequence;
pub mod summary;
pub mod trips;
pub mod view;

pub use chart::{ChartBackend, ChartKind, ChartSlot, ChartSpec, Series};
pub use map::{Hotspot, HotspotMapConfig};
pub use sequence::{RequestSequence, RequestTicket};
pub use summary::SummaryView;
pub use trips::{TripRow, TripTable};
pub use view::DashboardView;
