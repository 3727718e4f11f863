//! Resort ranking card driven by bar chart hover events.

use serde::{Deserialize, Serialize};

use super::error::{QueryError, QueryResult};
use super::update::Update;
use crate::dataset::Dataset;

/// Hover payload sent by the bar chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverData {
    #[serde(default)]
    pub points: Vec<HoverPoint>,
}

/// One hovered bar. `label` is the resort name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, rename = "customdata", skip_serializing_if = "Vec::is_empty")]
    pub custom_data: Vec<String>,
}

impl HoverData {
    pub fn for_resort(name: impl Into<String>) -> Self {
        Self {
            points: vec![HoverPoint {
                label: name.into(),
                value: None,
                custom_data: Vec::new(),
            }],
        }
    }
}

/// The five display strings of the ranking card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResortReport {
    pub name: String,
    pub elevation_rank: String,
    pub price_rank: String,
    pub slope_rank: String,
    pub cannon_rank: String,
}

/// Look up the hovered resort's country ranks.
///
/// No hover, or a hover with no points, leaves the card unchanged.
pub fn resort_report(
    dataset: &Dataset,
    hover: Option<&HoverData>,
) -> QueryResult<Update<ResortReport>> {
    let Some(point) = hover.and_then(|h| h.points.first()) else {
        return Ok(Update::NoChange);
    };

    let name = point.label.as_str();
    let resort = dataset
        .find(name)
        .ok_or_else(|| QueryError::ResortNotFound(name.to_string()))?;
    let ranks = resort.ranks;

    Ok(Update::Updated(ResortReport {
        name: format!("Name: {}", name),
        elevation_rank: format!("Elevation: #{}", ranks.elevation),
        price_rank: format!("Price: #{}", ranks.price),
        slope_rank: format!("Slope: #{}", ranks.slopes),
        cannon_rank: format!("Cannon: #{}", ranks.cannons),
    }))
}
