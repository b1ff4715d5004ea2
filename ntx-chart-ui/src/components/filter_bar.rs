//! Borough/hour filter dropdowns and the Apply button.

use crate::controller;
use crate::state::AppState;
use dioxus::prelude::*;
use ntx_view::options::{borough_options, hour_options};

/// Filter controls. Apply reloads the trip table only; every click starts
/// its own request.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<AppState>();
    let boroughs = borough_options();
    let hours = hour_options();
    let selected_borough = (state.selected_borough)();
    let selected_hour = (state.selected_hour)();

    let on_borough_change = move |evt: Event<FormData>| {
        state.selected_borough.set(evt.value());
    };

    let on_hour_change = move |evt: Event<FormData>| {
        state.selected_hour.set(evt.value());
    };

    let on_apply = move |_: MouseEvent| {
        spawn(controller::apply_filters(state));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                r#for: "borough-select",
                style: "font-weight: bold;",
                "Borough: "
            }
            select {
                id: "borough-select",
                onchange: on_borough_change,
                for opt in boroughs.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected_borough,
                        "{opt.label}"
                    }
                }
            }
            label {
                r#for: "hour-select",
                style: "font-weight: bold;",
                "Hour: "
            }
            select {
                id: "hour-select",
                onchange: on_hour_change,
                for opt in hours.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected_hour,
                        "{opt.label}"
                    }
                }
            }
            button {
                id: "apply-filters",
                style: "padding: 4px 12px; background: #FFD700; border: 1px solid #C9A800; border-radius: 4px; cursor: pointer;",
                onclick: on_apply,
                "Apply Filters"
            }
        }
    }
}
