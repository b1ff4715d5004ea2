//! Trip table.

use crate::state::AppState;
use dioxus::prelude::*;
use ntx_view::trips::TRIP_COLUMNS;
use ntx_view::TripTable;

const CELL_STYLE: &str = "padding: 8px 10px; border-top: 1px solid #dee2e6;";

#[component]
pub fn TripsTable() -> Element {
    let state = use_context::<AppState>();
    let table = state.trips.read().clone();

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "width: 100%; border-collapse: collapse; background: white; font-size: 14px;",
                thead {
                    tr {
                        style: "background: #212121; color: #FFD700;",
                        for column in TRIP_COLUMNS {
                            th { style: "padding: 10px; text-align: left;", "{column}" }
                        }
                    }
                }
                tbody {
                    id: "trips-body",
                    {match table {
                        TripTable::Empty { message, colspan } => rsx! {
                            tr {
                                td {
                                    colspan: "{colspan}",
                                    style: "padding: 16px; text-align: center; color: #666;",
                                    "{message}"
                                }
                            }
                        },
                        TripTable::Rows(rows) => rsx! {
                            for (idx, row) in rows.iter().enumerate() {
                                tr {
                                    key: "{idx}",
                                    style: if idx % 2 == 0 { "background: #f8f9fa;" } else { "background: white;" },
                                    for cell in row.cells() {
                                        td { style: CELL_STYLE, "{cell}" }
                                    }
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}
