//! Response types for the taxi statistics API.
//!
//! All structs derive both `Deserialize` (API responses) and `Serialize`
//! (CSV export and JSON handed to the chart scripts).

use serde::{Deserialize, Serialize};

/// Dataset-wide statistics returned by `GET /summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_trips: u64,
    /// Average fare in dollars.
    pub average_fare: f64,
    /// Average trip distance in miles.
    pub average_distance: f64,
}

/// One row of `GET /trips`.
///
/// Every field is optional: the server may omit a column or send `null`,
/// and an absent value is distinct from a zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub pickup_zone_id: Option<u32>,
    pub dropoff_zone_id: Option<u32>,
    /// Distance in miles.
    pub trip_distance: Option<f64>,
    /// Fare in dollars.
    pub fare_amount: Option<f64>,
    pub trip_duration_minutes: Option<f64>,
    /// Hour of pickup (0-23).
    pub pickup_hour: Option<u8>,
}

/// Average fare for one hour of the day (`GET /average-fare-by-hour`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyFare {
    pub hour: u8,
    pub average_fare: f64,
}

/// Pickup count for one zone (`GET /top-zones`), ranked by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub pickup_zone_id: u32,
    pub trip_count: u64,
}

/// Body of the `GET /` health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
