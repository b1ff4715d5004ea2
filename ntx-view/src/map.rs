//! Hotspot map configuration.
//!
//! The map shows a fixed sample of pickup hotspots. The sample lives in
//! `HotspotMapConfig::nyc_sample` so it can be replaced by a projection of
//! live data without touching the Leaflet bridge, which only ever sees the
//! serialized config.

use serde::Serialize;

/// Pixels of marker radius per square root of a trip.
pub const RADIUS_SCALE: f64 = 0.1;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A named location with a trip count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    pub name: String,
    pub position: LatLng,
    pub trips: u64,
}

impl Hotspot {
    pub fn new(name: &str, lat: f64, lng: f64, trips: u64) -> Self {
        Self {
            name: name.to_string(),
            position: LatLng { lat, lng },
            trips,
        }
    }

    pub fn radius(&self) -> f64 {
        marker_radius(self.trips)
    }
}

/// Circle marker radius for a trip count; grows with the square root so
/// that area, not radius, tracks volume.
pub fn marker_radius(trips: u64) -> f64 {
    (trips as f64).sqrt() * RADIUS_SCALE
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotMapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub hotspots: Vec<Hotspot>,
    pub marker_color: String,
    pub legend_title: String,
}

impl HotspotMapConfig {
    /// Sample pickup hotspots across New York City.
    pub fn nyc_sample() -> Self {
        Self {
            center: LatLng {
                lat: 40.7128,
                lng: -74.0060,
            },
            zoom: 11,
            tiles: TileLayer {
                url: OSM_TILE_URL.to_string(),
                attribution: OSM_ATTRIBUTION.to_string(),
                max_zoom: 19,
            },
            hotspots: vec![
                Hotspot::new("Midtown Manhattan", 40.7549, -73.9840, 15_000),
                Hotspot::new("Upper East Side", 40.7736, -73.9566, 12_000),
                Hotspot::new("JFK Airport", 40.6413, -73.7781, 8_000),
                Hotspot::new("Penn Station", 40.7506, -73.9935, 7_500),
                Hotspot::new("LaGuardia Airport", 40.7769, -73.8740, 6_000),
                Hotspot::new("Financial District", 40.7075, -74.0113, 5_500),
                Hotspot::new("Williamsburg", 40.7081, -73.9571, 3_000),
                Hotspot::new("Downtown Brooklyn", 40.6928, -73.9903, 2_500),
                Hotspot::new("Long Island City", 40.7447, -73.9485, 2_000),
            ],
            marker_color: "#FFD700".to_string(),
            legend_title: "Pickup Hotspots".to_string(),
        }
    }

    /// JSON handed to the Leaflet bridge. Radii are precomputed here so the
    /// script never has to know the scaling rule.
    pub fn to_leaflet_json(&self) -> serde_json::Value {
        let markers: Vec<serde_json::Value> = self
            .hotspots
            .iter()
            .map(|h| {
                serde_json::json!({
                    "name": h.name,
                    "lat": h.position.lat,
                    "lng": h.position.lng,
                    "trips": h.trips,
                    "radius": h.radius(),
                })
            })
            .collect();

        serde_json::json!({
            "center": [self.center.lat, self.center.lng],
            "zoom": self.zoom,
            "tiles": {
                "url": self.tiles.url,
                "attribution": self.tiles.attribution,
                "maxZoom": self.tiles.max_zoom,
            },
            "markers": markers,
            "color": self.marker_color,
            "legendTitle": self.legend_title,
        })
    }
}

impl Default for HotspotMapConfig {
    fn default() -> Self {
        Self::nyc_sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_square_root_scaled() {
        assert_eq!(marker_radius(0), 0.0);
        assert!((marker_radius(10_000) - 10.0).abs() < 1e-9);
        assert!((marker_radius(40_000) - 2.0 * marker_radius(10_000)).abs() < 1e-9);
    }

    #[test]
    fn radius_is_strictly_increasing() {
        let counts = [1, 2, 10, 99, 100, 2_500, 15_000];
        for pair in counts.windows(2) {
            assert!(marker_radius(pair[0]) < marker_radius(pair[1]));
        }
    }

    #[test]
    fn sample_is_centered_on_nyc() {
        let config = HotspotMapConfig::nyc_sample();
        assert!(!config.hotspots.is_empty());
        assert!((config.center.lat - 40.7128).abs() < 1e-9);
        assert!(config
            .hotspots
            .iter()
            .all(|h| (40.4..41.0).contains(&h.position.lat)));
    }

    #[test]
    fn leaflet_json_carries_radius() {
        let config = HotspotMapConfig {
            hotspots: vec![Hotspot::new("Test", 40.7, -74.0, 400)],
            ..HotspotMapConfig::nyc_sample()
        };
        let json = config.to_leaflet_json();
        assert_eq!(json["markers"].as_array().unwrap().len(), 1);
        assert_eq!(json["markers"][0]["radius"], 2.0);
        assert_eq!(json["zoom"], 11);
        assert_eq!(json["legendTitle"], "Pickup Hotspots");
    }
}
