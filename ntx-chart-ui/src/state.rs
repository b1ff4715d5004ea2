//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::js_bridge::JsChartBackend;
use ntx_api::ApiClient;
use ntx_view::{DashboardView, RequestSequence, SummaryView, TripTable};
use dioxus::prelude::*;

/// Shared state for the taxi dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// API client (fixed base URL)
    pub client: Signal<ApiClient>,
    /// True until the initial load has finished
    pub loading: Signal<bool>,
    /// Summary card text
    pub summary: Signal<SummaryView>,
    /// Trip table body
    pub trips: Signal<TripTable>,
    /// Borough dropdown value ("" = all)
    pub selected_borough: Signal<String>,
    /// Hour dropdown value ("" = all)
    pub selected_hour: Signal<String>,
    /// Tickets for trip requests; only the latest response is applied
    pub trip_requests: Signal<RequestSequence>,
    /// Owner of both chart instances
    pub view: Signal<DashboardView<JsChartBackend>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            client: Signal::new(ApiClient::default()),
            loading: Signal::new(true),
            summary: Signal::new(SummaryView::loading()),
            trips: Signal::new(TripTable::Rows(Vec::new())),
            selected_borough: Signal::new(String::new()),
            selected_hour: Signal::new(String::new()),
            trip_requests: Signal::new(RequestSequence::new()),
            view: Signal::new(DashboardView::new(JsChartBackend)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
