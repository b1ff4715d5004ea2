//! Trip table rows.

use crate::format::{self, or_placeholder};
use crate::sequence::{RequestSequence, RequestTicket};
use ntx_api::Trip;
use serde::Serialize;

/// Column headers, in display order.
pub const TRIP_COLUMNS: [&str; 6] = [
    "Pickup Zone",
    "Dropoff Zone",
    "Distance (mi)",
    "Fare",
    "Duration (min)",
    "Hour",
];

/// Message of the single row shown when there is nothing to list.
pub const NO_TRIPS_MESSAGE: &str = "No trips found";

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRow {
    pub pickup_zone: String,
    pub dropoff_zone: String,
    pub distance: String,
    pub fare: String,
    pub duration: String,
    pub hour: String,
}

impl TripRow {
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            pickup_zone: or_placeholder(trip.pickup_zone_id, |z| z.to_string()),
            dropoff_zone: or_placeholder(trip.dropoff_zone_id, |z| z.to_string()),
            distance: or_placeholder(trip.trip_distance, |d| format!("{:.2}", d)),
            fare: or_placeholder(trip.fare_amount, format::currency_cents),
            duration: or_placeholder(trip.trip_duration_minutes, |m| format!("{:.1}", m)),
            hour: or_placeholder(trip.pickup_hour, |h| h.to_string()),
        }
    }

    /// Cells in `TRIP_COLUMNS` order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.pickup_zone.as_str(),
            self.dropoff_zone.as_str(),
            self.distance.as_str(),
            self.fare.as_str(),
            self.duration.as_str(),
            self.hour.as_str(),
        ]
    }
}

/// Contents of the trip table body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TripTable {
    /// A single row spanning `colspan` columns.
    Empty { message: String, colspan: usize },
    Rows(Vec<TripRow>),
}

impl TripTable {
    pub fn empty() -> Self {
        TripTable::Empty {
            message: NO_TRIPS_MESSAGE.to_string(),
            colspan: TRIP_COLUMNS.len(),
        }
    }

    /// Render fetched trips; an unavailable or empty result gives `Empty`.
    pub fn render(trips: Option<&[Trip]>) -> Self {
        match trips {
            Some(trips) if !trips.is_empty() => {
                TripTable::Rows(trips.iter().map(TripRow::from_trip).collect())
            }
            _ => Self::empty(),
        }
    }

    /// Render the response for `ticket`, or `None` when a newer request has
    /// been issued since and the current table must stay as it is.
    pub fn for_ticket(
        sequence: &RequestSequence,
        ticket: RequestTicket,
        trips: Option<&[Trip]>,
    ) -> Option<Self> {
        sequence.is_current(ticket).then(|| Self::render(trips))
    }

    pub fn row_count(&self) -> usize {
        match self {
            TripTable::Empty { .. } => 1,
            TripTable::Rows(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_trip() -> Trip {
        Trip {
            pickup_zone_id: Some(161),
            dropoff_zone_id: Some(236),
            trip_distance: Some(2.346),
            fare_amount: Some(11.5),
            trip_duration_minutes: Some(12.44),
            pickup_hour: Some(8),
        }
    }

    #[test]
    fn empty_input_gives_one_spanning_row() {
        for table in [TripTable::render(Some(&[][..])), TripTable::render(None)] {
            assert_eq!(table.row_count(), 1);
            assert_eq!(
                table,
                TripTable::Empty {
                    message: "No trips found".to_string(),
                    colspan: 6,
                }
            );
        }
    }

    #[test]
    fn formats_present_fields() {
        let table = TripTable::render(Some(&[full_trip()][..]));
        let TripTable::Rows(rows) = table else {
            panic!("expected rows");
        };
        assert_eq!(
            rows[0].cells(),
            ["161", "236", "2.35", "$11.50", "12.4", "8"]
        );
    }

    #[test]
    fn missing_distance_becomes_dash() {
        let trip = Trip {
            trip_distance: None,
            ..full_trip()
        };
        let row = TripRow::from_trip(&trip);
        assert_eq!(row.distance, "-");
        assert_eq!(row.fare, "$11.50");
        assert_eq!(row.duration, "12.4");
    }

    #[test]
    fn zero_values_are_not_missing() {
        let trip = Trip {
            trip_distance: Some(0.0),
            fare_amount: Some(0.0),
            trip_duration_minutes: Some(0.0),
            pickup_hour: Some(0),
            ..full_trip()
        };
        let row = TripRow::from_trip(&trip);
        assert_eq!(row.distance, "0.00");
        assert_eq!(row.fare, "$0.00");
        assert_eq!(row.duration, "0.0");
        assert_eq!(row.hour, "0");
    }

    #[test]
    fn older_response_leaves_table_unchanged() {
        let mut sequence = RequestSequence::new();
        let older = sequence.issue();
        let newer = sequence.issue();

        let mut table = TripTable::empty();
        if let Some(fresh) = TripTable::for_ticket(&sequence, newer, Some(&[full_trip()][..])) {
            table = fresh;
        }
        assert_eq!(table.row_count(), 1);
        let shown = table.clone();

        // the older request resolves last, with an empty result
        if let Some(stale) = TripTable::for_ticket(&sequence, older, Some(&[][..])) {
            table = stale;
        }
        assert_eq!(table, shown);
        assert!(matches!(table, TripTable::Rows(_)));
    }

    #[test]
    fn unavailable_response_for_latest_ticket_still_renders() {
        let mut sequence = RequestSequence::new();
        let ticket = sequence.issue();
        assert_eq!(
            TripTable::for_ticket(&sequence, ticket, None),
            Some(TripTable::empty())
        );
    }

    #[test]
    fn all_missing_is_all_dashes() {
        let row = TripRow::from_trip(&Trip::default());
        assert!(row.cells().iter().all(|c| *c == "-"));
    }
}
