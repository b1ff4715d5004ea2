//! Container for the Leaflet hotspot map.

use crate::bootstrap::HOTSPOT_MAP_ID;
use dioxus::prelude::*;

#[component]
pub fn HotspotMap() -> Element {
    rsx! {
        div {
            id: HOTSPOT_MAP_ID,
            style: "height: 420px; width: 100%; border-radius: 8px; border: 1px solid #e0e0e0;",
        }
    }
}
