//! The three summary stat cards.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let summary = state.summary.read().clone();

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
            StatCard { label: "Total Trips".to_string(), id: "total-trips".to_string(), value: summary.total_trips }
            StatCard { label: "Average Fare".to_string(), id: "avg-fare".to_string(), value: summary.average_fare }
            StatCard { label: "Average Distance".to_string(), id: "avg-distance".to_string(), value: summary.average_distance }
        }
    }
}

#[component]
fn StatCard(label: String, id: String, value: String) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 180px; padding: 12px 16px; background: #FFFDE7; border: 1px solid #FFE082; border-radius: 8px;",
            div {
                style: "font-size: 12px; color: #666; text-transform: uppercase;",
                "{label}"
            }
            div {
                id: "{id}",
                style: "font-size: 24px; font-weight: bold; margin-top: 4px;",
                "{value}"
            }
        }
    }
}
