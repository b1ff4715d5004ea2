//! Loading indicator.

use dioxus::prelude::*;

/// Status line shown while the initial load is running.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 8px; color: #666;",
            "Loading data..."
        }
    }
}
