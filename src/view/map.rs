//! Resort map: price threshold plus amenity flags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use super::figure::{DensityMapFigure, DensityPoint, GeoPoint};
use crate::dataset::{Dataset, Flag, Resort};

/// How a multi-flag checklist selection is turned into constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagMatching {
    /// Every selected flag must be `"Yes"`.
    #[default]
    All,
    /// The first dashboard release's matching: single flags, the
    /// Nightskiing + Snowparks pair and all three flags are enforced. Any
    /// other pair is ignored and only the price filter applies.
    Legacy,
}

impl FlagMatching {
    /// Flags that actually constrain the result for a selection.
    pub fn effective(self, selections: &[Flag]) -> BTreeSet<Flag> {
        let selected: BTreeSet<Flag> = selections.iter().copied().collect();
        match self {
            FlagMatching::All => selected,
            FlagMatching::Legacy => {
                let honored = selected.len() != 2
                    || (selected.contains(&Flag::Nightskiing)
                        && selected.contains(&Flag::Snowparks));
                if honored {
                    selected
                } else {
                    BTreeSet::new()
                }
            }
        }
    }
}

/// Fixed layout of the density map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    pub center: GeoPoint,
    pub zoom: f64,
    pub radius: u32,
    pub map_style: String,
    pub color_scale: String,
    pub flag_matching: FlagMatching,
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            center: GeoPoint {
                lat: 44.5,
                lon: -97.5,
            },
            zoom: 1.85,
            radius: 20,
            map_style: "open-street-map".to_string(),
            color_scale: "Viridis".to_string(),
            flag_matching: FlagMatching::All,
        }
    }
}

/// Current map control values.
#[derive(Debug, Clone, PartialEq)]
pub struct MapQuery {
    pub price: f64,
    pub selections: Vec<Flag>,
}

/// Map header plus figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub header: String,
    pub figure: DensityMapFigure,
}

/// Resorts strictly cheaper than `price` that offer every effective flag.
pub fn filter_resorts<'a>(
    dataset: &'a Dataset,
    price: f64,
    selections: &[Flag],
    matching: FlagMatching,
) -> Vec<&'a Resort> {
    let required = matching.effective(selections);
    dataset
        .resorts()
        .iter()
        .filter(|r| r.price() < price && required.iter().all(|&flag| r.has(flag)))
        .collect()
}

/// Build the map view for the current slider and checklist values.
pub fn map_view(dataset: &Dataset, query: &MapQuery, layout: &MapLayout) -> MapView {
    let resorts = filter_resorts(dataset, query.price, &query.selections, layout.flag_matching);
    debug!(
        price = query.price,
        selections = ?query.selections,
        matched = resorts.len(),
        "map query"
    );

    let points = resorts
        .into_iter()
        .map(|r| DensityPoint {
            resort: r.name().to_string(),
            lat: r.row.latitude,
            lon: r.row.longitude,
            z: r.price(),
        })
        .collect();

    MapView {
        header: map_header(query.price),
        figure: DensityMapFigure {
            points,
            z_label: "Price".to_string(),
            center: layout.center,
            zoom: layout.zoom,
            radius: layout.radius,
            map_style: layout.map_style.clone(),
            color_scale: layout.color_scale.clone(),
        },
    }
}

/// `Resorts less than $<price>/night`.
pub fn map_header(price: f64) -> String {
    format!("Resorts less than ${}/night", format_number(price))
}

/// Integral values print without a fractional part.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
