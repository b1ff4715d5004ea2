//! The dashboard's chart-owning view object.

use crate::chart::{ChartBackend, ChartSlot, ChartSpec};
use log::debug;
use ntx_api::{HourlyFare, ZoneCount};

/// Canvas for the fare-by-hour line chart.
pub const FARE_CHART_ID: &str = "fare-by-hour-chart";
/// Canvas for the top-zones bar chart.
pub const ZONES_CHART_ID: &str = "top-zones-chart";

/// Owns the chart backend and one slot per chart canvas.
///
/// Built once when the dashboard starts and kept for the page's lifetime,
/// so every re-render goes through the same slots and old charts are
/// always destroyed before new ones are drawn.
pub struct DashboardView<B: ChartBackend> {
    backend: B,
    fare_chart: ChartSlot<B::Handle>,
    zones_chart: ChartSlot<B::Handle>,
}

impl<B: ChartBackend> DashboardView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            fare_chart: ChartSlot::new(FARE_CHART_ID),
            zones_chart: ChartSlot::new(ZONES_CHART_ID),
        }
    }

    /// Redraw the fare-by-hour chart; with no data the canvas is cleared.
    pub fn render_fare_chart(&mut self, data: Option<&[HourlyFare]>) {
        let spec = ChartSpec::fare_by_hour(data);
        if spec.is_none() {
            debug!("No fare data; clearing {}", FARE_CHART_ID);
        }
        self.fare_chart.redraw(&mut self.backend, spec.as_ref());
    }

    /// Redraw the top-zones chart; with no data the canvas is cleared.
    pub fn render_top_zones_chart(&mut self, data: Option<&[ZoneCount]>) {
        let spec = ChartSpec::top_zones(data);
        if spec.is_none() {
            debug!("No zone data; clearing {}", ZONES_CHART_ID);
        }
        self.zones_chart.redraw(&mut self.backend, spec.as_ref());
    }

    pub fn has_fare_chart(&self) -> bool {
        self.fare_chart.has_chart()
    }

    pub fn has_zones_chart(&self) -> bool {
        self.zones_chart.has_chart()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
