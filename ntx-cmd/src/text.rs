//! Plain-text renderings of the dashboard views.

use ntx_api::HealthStatus;
use ntx_view::trips::TRIP_COLUMNS;
use ntx_view::{ChartSpec, HotspotMapConfig, SummaryView, TripTable};

/// Width of the longest bar in a text chart.
const BAR_WIDTH: usize = 40;

pub fn summary_text(view: &SummaryView) -> String {
    format!(
        "Total Trips:   {}\nAverage Fare:  {}\nAvg Distance:  {}\n",
        view.total_trips, view.average_fare, view.average_distance
    )
}

/// The trip table with columns padded to their widest cell.
pub fn trip_table_text(table: &TripTable) -> String {
    let rows = match table {
        TripTable::Empty { message, .. } => {
            return format!("{}\n{}\n", TRIP_COLUMNS.join(" | "), message);
        }
        TripTable::Rows(rows) => rows,
    };

    let mut widths = TRIP_COLUMNS.map(str::len);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &TRIP_COLUMNS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in rows {
        push_row(&mut out, &row.cells(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

/// A chart as horizontal `#` bars scaled to the largest value.
pub fn chart_text(title: &str, spec: Option<&ChartSpec>) -> String {
    let mut out = format!("{}\n", title);
    let Some(spec) = spec else {
        out.push_str("No data available\n");
        return out;
    };

    out.push_str(&format!("({})\n", spec.series.label));
    let label_width = spec.labels.iter().map(String::len).max().unwrap_or(0);
    let max = spec.series.values.iter().copied().fold(0.0_f64, f64::max);
    for (label, value) in spec.labels.iter().zip(&spec.series.values) {
        out.push_str(&format!(
            "{:>lw$} | {} {}\n",
            label,
            "#".repeat(bar_len(*value, max)),
            format_value(*value),
            lw = label_width
        ));
    }
    out
}

fn bar_len(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round() as usize
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

pub fn hotspots_text(config: &HotspotMapConfig) -> String {
    let mut out = format!("{}\n", config.legend_title);
    let name_width = config.hotspots.iter().map(|h| h.name.len()).max().unwrap_or(0);
    for h in &config.hotspots {
        out.push_str(&format!(
            "{:<nw$}  {:>8.4}, {:>9.4}  {} trips (radius {:.1})\n",
            h.name,
            h.position.lat,
            h.position.lng,
            h.trips,
            h.radius(),
            nw = name_width
        ));
    }
    out
}

pub fn health_text(base_url: &str, status: Option<&HealthStatus>) -> String {
    match status {
        Some(s) if s.is_ok() => format!("{}: {} ({})", base_url, s.status, s.message),
        Some(s) => format!("{}: unhealthy, status {:?} ({})", base_url, s.status, s.message),
        None => format!("{}: unreachable", base_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntx_api::{HourlyFare, SummaryStats, Trip, ZoneCount};
    use ntx_view::Hotspot;

    #[test]
    fn summary_lines() {
        let view = SummaryView::render(Some(&SummaryStats {
            total_trips: 1_234_567,
            average_fare: 12.5,
            average_distance: 3.2,
        }));
        assert_eq!(
            summary_text(&view),
            "Total Trips:   1,234,567\nAverage Fare:  $12.5\nAvg Distance:  3.2 mi\n"
        );
        assert!(summary_text(&SummaryView::render(None)).contains("Total Trips:   Error"));
    }

    #[test]
    fn empty_table_prints_message() {
        let text = trip_table_text(&TripTable::render(None));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Pickup Zone | Dropoff Zone"));
        assert_eq!(lines[1], "No trips found");
    }

    #[test]
    fn table_columns_line_up() {
        let trips = vec![
            Trip {
                pickup_zone_id: Some(161),
                dropoff_zone_id: Some(236),
                trip_distance: Some(2.5),
                fare_amount: Some(11.5),
                trip_duration_minutes: Some(12.0),
                pickup_hour: Some(8),
            },
            Trip::default(),
        ];
        let text = trip_table_text(&TripTable::render(Some(trips.as_slice())));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("-----------"));
        assert!(lines[2].starts_with("161         | 236          | 2.50"));
        assert!(lines[2].contains("| $11.50 |"));
        assert!(lines[3].starts_with("-           | -            | -"));
        let sep = lines[0].find('|');
        assert_eq!(lines[2].find('|'), sep);
        assert_eq!(lines[3].find('|'), sep);
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let zones = vec![
            ZoneCount { pickup_zone_id: 132, trip_count: 200 },
            ZoneCount { pickup_zone_id: 7, trip_count: 100 },
        ];
        let text = chart_text("Top Pickup Zones", ChartSpec::top_zones(Some(zones.as_slice())).as_ref());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Top Pickup Zones");
        assert_eq!(lines[1], "(Number of Pickups)");
        assert_eq!(lines[2], format!("Zone 132 | {} 200", "#".repeat(40)));
        assert_eq!(lines[3], format!("  Zone 7 | {} 100", "#".repeat(20)));
    }

    #[test]
    fn fare_chart_keeps_cents() {
        let fares = vec![HourlyFare { hour: 5, average_fare: 18.75 }];
        let text = chart_text("Fares", ChartSpec::fare_by_hour(Some(fares.as_slice())).as_ref());
        assert!(text.contains("5:00 | "));
        assert!(text.ends_with(" 18.75\n"));
    }

    #[test]
    fn missing_chart_data() {
        assert_eq!(chart_text("Fares", None), "Fares\nNo data available\n");
    }

    #[test]
    fn hotspot_list() {
        let config = HotspotMapConfig {
            hotspots: vec![Hotspot::new("JFK Airport", 40.6413, -73.7781, 10_000)],
            ..HotspotMapConfig::nyc_sample()
        };
        let text = hotspots_text(&config);
        assert!(text.starts_with("Pickup Hotspots\n"));
        assert!(text.contains("JFK Airport   40.6413,  -73.7781  10000 trips (radius 10.0)"));
    }

    #[test]
    fn health_states() {
        let ok = HealthStatus {
            message: "NYC Taxi API".to_string(),
            status: "ok".to_string(),
        };
        assert_eq!(
            health_text("http://localhost:5000", Some(&ok)),
            "http://localhost:5000: ok (NYC Taxi API)"
        );
        assert_eq!(
            health_text("http://localhost:5000", None),
            "http://localhost:5000: unreachable"
        );
    }
}
