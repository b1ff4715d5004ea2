//! CSV export of fetched trips.

use ntx_api::Trip;
use std::io::Write;

/// Header row, in the field order of `Trip`.
pub const TRIP_CSV_HEADER: [&str; 6] = [
    "pickup_zone_id",
    "dropoff_zone_id",
    "trip_distance",
    "fare_amount",
    "trip_duration_minutes",
    "pickup_hour",
];

/// Write `trips` as CSV with a header row. Absent fields are left empty.
/// The header is written even when there are no trips.
pub fn write_trips_csv<W: Write>(writer: W, trips: &[Trip]) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(TRIP_CSV_HEADER)?;
    for trip in trips {
        wtr.serialize(trip)?;
    }
    wtr.flush()?;
    Ok(())
}
