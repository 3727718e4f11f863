//! Serializable chart specifications.
//!
//! These carry data and layout parameters only; the front-end renders them.

use serde::{Deserialize, Serialize};

/// Geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One weighted point of a density map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityPoint {
    pub resort: String,
    pub lat: f64,
    pub lon: f64,
    /// Intensity, the resort's price.
    pub z: f64,
}

/// Density heat map over an OpenStreetMap-style base layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityMapFigure {
    pub points: Vec<DensityPoint>,
    pub z_label: String,
    pub center: GeoPoint,
    pub zoom: f64,
    pub radius: u32,
    pub map_style: String,
    pub color_scale: String,
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Echoed back by the front-end in hover events.
    pub custom_data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}
