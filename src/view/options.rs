//! Dropdown and checklist options.

use serde::Serialize;

use crate::dataset::{Dataset, Flag, Metric};

pub const DEFAULT_CONTINENT: &str = "North America";
pub const DEFAULT_COUNTRY: &str = "United States";
pub const BAR_HEADER_PLACEHOLDER: &str = "Create chart to view data";

pub const PRICE_MIN: u32 = 20;
pub const PRICE_MAX: u32 = 160;
pub const PRICE_STEP: u32 = 20;
pub const PRICE_DEFAULT: u32 = 60;

/// Countries with at least one resort on `continent`, first-appearance order.
pub fn country_options(dataset: &Dataset, continent: &str) -> Vec<String> {
    dataset
        .countries_in(continent)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Every continent in the table, first-appearance order.
pub fn continent_options(dataset: &Dataset) -> Vec<String> {
    dataset
        .continents()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// A checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagOption {
    pub label: &'static str,
    pub value: Flag,
}

/// Discrete slider definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub value: u32,
}

impl Slider {
    /// Every selectable stop, `min` to `max` inclusive.
    pub fn stops(&self) -> Vec<u32> {
        (self.min..=self.max).step_by(self.step.max(1) as usize).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlDefaults {
    pub continent: String,
    pub country: String,
    pub metric: Metric,
}

/// Static configuration of every input control on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub continents: Vec<String>,
    pub metrics: Vec<Metric>,
    pub flags: Vec<FlagOption>,
    pub price: Slider,
    pub price_stops: Vec<u32>,
    pub defaults: ControlDefaults,
    pub bar_header: String,
}

/// Build the control configuration for a loaded table.
pub fn controls(dataset: &Dataset) -> Controls {
    let price = Slider {
        min: PRICE_MIN,
        max: PRICE_MAX,
        step: PRICE_STEP,
        value: PRICE_DEFAULT,
    };

    Controls {
        continents: continent_options(dataset),
        metrics: Metric::ALL.to_vec(),
        flags: Flag::ALL
            .into_iter()
            .map(|value| FlagOption {
                label: value.label(),
                value,
            })
            .collect(),
        price_stops: price.stops(),
        price,
        defaults: ControlDefaults {
            continent: DEFAULT_CONTINENT.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            metric: Metric::default(),
        },
        bar_header: BAR_HEADER_PLACEHOLDER.to_string(),
    }
}
