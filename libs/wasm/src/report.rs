//! Report page bindings: heatmap data for the map library and the severity
//! scale for the star widget.

use incident_report::{validate_submission, HeatmapOptions, HeatmapStats, Severity, SAMPLE_INCIDENTS};
use wasm_bindgen::prelude::*;

fn to_js(err: serde_json::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Sample incidents as `[[lat, lng, intensity], ...]`.
#[wasm_bindgen]
pub fn heatmap_points_json() -> Result<String, JsValue> {
    heatmap_points_json_internal().map_err(to_js)
}

/// `{ total, averageSeverity, regions }` for the sample incidents.
#[wasm_bindgen]
pub fn heatmap_stats_json() -> Result<String, JsValue> {
    heatmap_stats_json_internal().map_err(to_js)
}

/// Map and heat layer settings.
#[wasm_bindgen]
pub fn heatmap_options_json() -> Result<String, JsValue> {
    heatmap_options_json_internal().map_err(to_js)
}

pub fn heatmap_points_json_internal() -> serde_json::Result<String> {
    let points: Vec<[f64; 3]> = SAMPLE_INCIDENTS.iter().map(|i| i.as_triple()).collect();
    serde_json::to_string(&points)
}

pub fn heatmap_stats_json_internal() -> serde_json::Result<String> {
    serde_json::to_string(&HeatmapStats::from_incidents(&SAMPLE_INCIDENTS))
}

pub fn heatmap_options_json_internal() -> serde_json::Result<String> {
    serde_json::to_string(&HeatmapOptions::default())
}

/// Description for a star count, or `undefined` outside 1..=5.
#[wasm_bindgen]
pub fn severity_description(stars: u8) -> Option<String> {
    Severity::try_from(stars)
        .ok()
        .map(|s| s.description().to_string())
}

/// Validates the hidden severity input before submit.
///
/// # Errors
/// Returns the message to alert when no rating was chosen.
#[wasm_bindgen]
pub fn validate_report(raw: &str) -> Result<u8, JsValue> {
    validate_submission(raw)
        .map(u8::from)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
