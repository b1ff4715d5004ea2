//! Filter controller: refreshes the trip table, and nothing else.

use crate::state::AppState;
use dioxus::prelude::*;
use log::{debug, info};
use ntx_api::Filter;
use ntx_view::TripTable;

/// Read the current dropdown selections and reload the trip table.
pub async fn apply_filters(state: AppState) {
    let filter = Filter::from_selection(
        &state.selected_borough.peek(),
        &state.selected_hour.peek(),
    );
    load_trips(state, filter).await;
}

/// Fetch trips for `filter` and render them, unless a newer request was
/// issued while this one was in flight.
pub async fn load_trips(mut state: AppState, filter: Filter) {
    let ticket = state.trip_requests.write().issue();
    let client = state.client.peek().clone();

    info!("Loading trips for {:?}", filter);
    let trips = client.trips(&filter).await;

    let sequence = *state.trip_requests.peek();
    match TripTable::for_ticket(&sequence, ticket, trips.as_deref()) {
        Some(table) => state.trips.set(table),
        None => debug!("Discarding stale trips response for {:?}", filter),
    }
}
