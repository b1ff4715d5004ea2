//! Chart specs and the destroy-then-draw chart slot.
//!
//! A `ChartSpec` describes one single-series chart independently of the
//! drawing library; `to_chartjs_config` turns it into the Chart.js config
//! object the browser bridge hands to `new Chart(...)`.
//!
//! A `ChartSlot` holds at most one live chart for a canvas. Each redraw
//! destroys whatever the slot holds before drawing again, so repeated
//! renders never stack charts on the same canvas:
//!
//! ```text
//! {no-chart} --draw--> {chart-present} --destroy+draw--> {chart-present}
//! ```

use ntx_api::{HourlyFare, ZoneCount};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One data series with its styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// One label per value, in order.
    pub labels: Vec<String>,
    pub series: Series,
    /// Bars run along the x-axis when true.
    pub horizontal: bool,
    pub show_legend: bool,
}

impl ChartSpec {
    /// Line chart of average fare per hour, labeled `"H:00"`.
    /// `None` when there is nothing to plot.
    pub fn fare_by_hour(data: Option<&[HourlyFare]>) -> Option<Self> {
        let data = data.filter(|d| !d.is_empty())?;
        Some(Self {
            kind: ChartKind::Line,
            labels: data.iter().map(|d| format!("{}:00", d.hour)).collect(),
            series: Series {
                label: "Average Fare ($)".to_string(),
                values: data.iter().map(|d| d.average_fare).collect(),
                border_color: "#FFD700".to_string(),
                background_color: "rgba(255, 215, 0, 0.2)".to_string(),
                fill: true,
            },
            horizontal: false,
            show_legend: true,
        })
    }

    /// Horizontal bar chart of pickups per zone, labeled `"Zone <id>"`.
    /// `None` when there is nothing to plot.
    pub fn top_zones(data: Option<&[ZoneCount]>) -> Option<Self> {
        let data = data.filter(|d| !d.is_empty())?;
        Some(Self {
            kind: ChartKind::Bar,
            labels: data
                .iter()
                .map(|z| format!("Zone {}", z.pickup_zone_id))
                .collect(),
            series: Series {
                label: "Number of Pickups".to_string(),
                values: data.iter().map(|z| z.trip_count as f64).collect(),
                border_color: "#388E3C".to_string(),
                background_color: "#4CAF50".to_string(),
                fill: false,
            },
            horizontal: true,
            show_legend: false,
        })
    }

    /// Chart.js configuration object for this spec.
    pub fn to_chartjs_config(&self) -> serde_json::Value {
        let mut dataset = json!({
            "label": self.series.label,
            "data": self.series.values,
            "borderColor": self.series.border_color,
            "backgroundColor": self.series.background_color,
        });
        match self.kind {
            ChartKind::Line => {
                dataset["fill"] = json!(self.series.fill);
                dataset["tension"] = json!(0.3);
            }
            ChartKind::Bar => {
                dataset["borderWidth"] = json!(1);
            }
        }

        let mut options = json!({
            "responsive": true,
            "plugins": { "legend": { "display": self.show_legend } },
        });
        if self.horizontal {
            options["indexAxis"] = json!("y");
        }
        if self.kind == ChartKind::Line {
            options["scales"] = json!({ "y": { "beginAtZero": false } });
        }

        json!({
            "type": self.kind,
            "data": {
                "labels": self.labels,
                "datasets": [dataset],
            },
            "options": options,
        })
    }
}

/// Something that can put a chart on a canvas and take it down again.
pub trait ChartBackend {
    /// Identifies one live chart instance.
    type Handle;

    fn draw(&mut self, canvas_id: &str, spec: &ChartSpec) -> Self::Handle;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owner of the (at most one) live chart drawn on a canvas.
#[derive(Debug)]
pub struct ChartSlot<H> {
    canvas_id: String,
    handle: Option<H>,
}

impl<H> ChartSlot<H> {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            handle: None,
        }
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    pub fn has_chart(&self) -> bool {
        self.handle.is_some()
    }

    /// Destroy the held chart, if any. Calling it on an empty slot does nothing.
    pub fn clear<B: ChartBackend<Handle = H>>(&mut self, backend: &mut B) {
        if let Some(handle) = self.handle.take() {
            backend.destroy(handle);
        }
    }

    /// Destroy the held chart, then draw `spec` if there is one. With no
    /// spec the canvas is left empty.
    pub fn redraw<B: ChartBackend<Handle = H>>(&mut self, backend: &mut B, spec: Option<&ChartSpec>) {
        self.clear(backend);
        if let Some(spec) = spec {
            self.handle = Some(backend.draw(&self.canvas_id, spec));
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Backend that records calls and tracks which charts are alive.
    #[derive(Debug, Default)]
    pub struct RecordingBackend {
        next_id: u32,
        pub live: Vec<(u32, String)>,
        pub draws: usize,
        pub destroys: usize,
        pub last_spec: Option<ChartSpec>,
    }

    impl RecordingBackend {
        pub fn live_on(&self, canvas_id: &str) -> usize {
            self.live.iter().filter(|(_, c)| c == canvas_id).count()
        }
    }

    impl ChartBackend for RecordingBackend {
        type Handle = u32;

        fn draw(&mut self, canvas_id: &str, spec: &ChartSpec) -> u32 {
            self.next_id += 1;
            self.draws += 1;
            self.live.push((self.next_id, canvas_id.to_string()));
            self.last_spec = Some(spec.clone());
            self.next_id
        }

        fn destroy(&mut self, handle: u32) {
            self.destroys += 1;
            self.live.retain(|(id, _)| *id != handle);
        }
    }
}
