//! Sample incident points and heatmap layer settings.
//!
//! The map library itself is an opaque collaborator: it receives
//! `[lat, lng, intensity]` triples and [`HeatmapOptions`] as JSON.

use config::constants::{
    HEAT_BLUR, HEAT_MAX_INTENSITY, HEAT_RADIUS, MAP_CENTER, MAP_MAX_ZOOM, MAP_MIN_ZOOM, MAP_ZOOM,
    SEVERITY_SCALE,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One reported incident at city-level precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub lat: f64,
    pub lng: f64,
    /// 0.0 to 1.0.
    pub intensity: f64,
}

impl Incident {
    pub const fn new(lat: f64, lng: f64, intensity: f64) -> Self {
        Self {
            lat,
            lng,
            intensity,
        }
    }

    /// Point in the heat layer's `[lat, lng, intensity]` form.
    pub fn as_triple(&self) -> [f64; 3] {
        [self.lat, self.lng, self.intensity]
    }
}

/// Static sample data shown on the report page.
pub const SAMPLE_INCIDENTS: [Incident; 24] = [
    // Amsterdam
    Incident::new(52.3676, 4.9041, 0.8),
    Incident::new(52.3702, 4.8952, 0.7),
    Incident::new(52.3556, 4.9136, 0.6),
    Incident::new(52.3847, 4.8824, 0.5),
    Incident::new(52.3508, 4.9210, 0.7),
    // Rotterdam
    Incident::new(51.9244, 4.4777, 0.6),
    Incident::new(51.9225, 4.4792, 0.5),
    Incident::new(51.9167, 4.5000, 0.4),
    // The Hague
    Incident::new(52.0705, 4.3007, 0.5),
    Incident::new(52.0689, 4.2881, 0.4),
    // Utrecht
    Incident::new(52.0907, 5.1214, 0.4),
    Incident::new(52.0850, 5.1100, 0.3),
    // Eindhoven
    Incident::new(51.4416, 5.4697, 0.3),
    Incident::new(51.4400, 5.4800, 0.2),
    Incident::new(53.2194, 6.5665, 0.3), // Groningen
    Incident::new(50.8514, 5.6910, 0.2), // Maastricht
    Incident::new(52.1601, 4.4970, 0.3), // Leiden
    Incident::new(51.5555, 5.0913, 0.2), // Tilburg
    Incident::new(52.3508, 5.2647, 0.3), // Almere
    Incident::new(51.5719, 4.7683, 0.2), // Breda
    Incident::new(51.8126, 5.8372, 0.2), // Nijmegen
    Incident::new(52.3874, 4.6462, 0.3), // Haarlem
    Incident::new(51.9851, 5.8987, 0.2), // Arnhem
    Incident::new(52.0116, 4.3571, 0.2), // Delft
];

/// Summary figures shown beside the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapStats {
    pub total: usize,
    /// Mean intensity on the 1..5 scale, one decimal.
    pub average_severity: f64,
    /// Distinct whole-degree lat/lng cells.
    pub regions: usize,
}

impl HeatmapStats {
    /// Compute the summary; an empty slice yields all zeros.
    pub fn from_incidents(incidents: &[Incident]) -> Self {
        if incidents.is_empty() {
            return Self {
                total: 0,
                average_severity: 0.0,
                regions: 0,
            };
        }
        let total = incidents.len();
        let mean = incidents.iter().map(|i| i.intensity).sum::<f64>() / total as f64;
        let average_severity = (mean * SEVERITY_SCALE * 10.0).round() / 10.0;
        let regions = incidents
            .iter()
            .map(|i| (i.lat.round() as i64, i.lng.round() as i64))
            .collect::<HashSet<_>>()
            .len();
        Self {
            total,
            average_severity,
            regions,
        }
    }

    /// Average severity formatted with one decimal, as displayed.
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average_severity)
    }
}

/// Map and heat layer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapOptions {
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub radius: u32,
    pub blur: u32,
    pub max: f64,
    /// `(stop, css colour)` pairs, ascending.
    pub gradient: Vec<(f64, String)>,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        let gradient = [
            (0.0, "rgba(0, 255, 0, 0)"),
            (0.2, "rgba(0, 255, 0, 0.5)"),
            (0.4, "rgba(255, 255, 0, 0.6)"),
            (0.6, "rgba(255, 165, 0, 0.7)"),
            (0.8, "rgba(255, 69, 0, 0.8)"),
            (1.0, "rgba(255, 0, 0, 0.9)"),
        ];
        Self {
            center: [MAP_CENTER.0, MAP_CENTER.1],
            zoom: MAP_ZOOM,
            min_zoom: MAP_MIN_ZOOM,
            max_zoom: MAP_MAX_ZOOM,
            radius: HEAT_RADIUS,
            blur: HEAT_BLUR,
            max: HEAT_MAX_INTENSITY,
            gradient: gradient
                .into_iter()
                .map(|(stop, colour)| (stop, colour.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stats() {
        let stats = HeatmapStats::from_incidents(&SAMPLE_INCIDENTS);
        assert_eq!(stats.total, 24);
        // Intensities sum to 9.3; 9.3 / 24 * 5 = 1.9375
        assert_eq!(stats.average_label(), "1.9");
        assert!(stats.regions > 1 && stats.regions < stats.total);
    }

    #[test]
    fn regions_group_by_rounded_coordinates() {
        let incidents = [
            Incident::new(52.36, 4.90, 1.0),
            Incident::new(52.40, 5.10, 1.0),
            Incident::new(51.44, 5.47, 1.0),
        ];
        let stats = HeatmapStats::from_incidents(&incidents);
        assert_eq!(stats.regions, 2);
        assert_eq!(stats.average_severity, 5.0);
    }

    #[test]
    fn empty_stats_are_zero() {
        let stats = HeatmapStats::from_incidents(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_label(), "0.0");
    }

    #[test]
    fn triples_for_heat_layer() {
        assert_eq!(SAMPLE_INCIDENTS[0].as_triple(), [52.3676, 4.9041, 0.8]);
    }

    #[test]
    fn options_serialize_camel_case() {
        let json = serde_json::to_value(HeatmapOptions::default()).unwrap();
        assert_eq!(json["minZoom"], 6);
        assert_eq!(json["gradient"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["center"][0], 52.1326);
    }
}
