//! Resort records and the typed attributes the dashboard queries by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::view::QueryError;

/// One row of the resort file, exactly as it is deserialized from CSV.
///
/// Columns not listed here are ignored by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortRow {
    #[serde(rename = "Resort")]
    pub name: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Highest point")]
    pub highest_point: f64,
    #[serde(rename = "Lowest point")]
    pub lowest_point: f64,
    #[serde(rename = "Total slopes")]
    pub total_slopes: f64,
    #[serde(rename = "Total lifts")]
    pub total_lifts: f64,
    #[serde(rename = "Snow cannons")]
    pub snow_cannons: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Nightskiing")]
    pub nightskiing: String,
    #[serde(rename = "Snowparks")]
    pub snowparks: String,
    #[serde(rename = "Summer skiing")]
    pub summer_skiing: String,
}

impl ResortRow {
    /// Numeric columns with their header names, in file order.
    pub(crate) fn numeric_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("Price", self.price),
            ("Highest point", self.highest_point),
            ("Lowest point", self.lowest_point),
            ("Total slopes", self.total_slopes),
            ("Total lifts", self.total_lifts),
            ("Snow cannons", self.snow_cannons),
            ("Latitude", self.latitude),
            ("Longitude", self.longitude),
        ]
    }
}

/// A resort's standing within its own country, 1 being the highest value.
///
/// Computed once over the full table at load time; filters never touch it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRanks {
    pub elevation: u32,
    pub price: u32,
    pub slopes: u32,
    pub cannons: u32,
}

/// A loaded resort: the raw row plus its derived country ranks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resort {
    #[serde(flatten)]
    pub row: ResortRow,
    pub ranks: CountryRanks,
}

impl Resort {
    pub fn name(&self) -> &str {
        &self.row.name
    }

    pub fn country(&self) -> &str {
        &self.row.country
    }

    pub fn continent(&self) -> &str {
        &self.row.continent
    }

    pub fn price(&self) -> f64 {
        self.row.price
    }

    /// Whether the resort offers the given amenity.
    ///
    /// Only the literal string `"Yes"` counts.
    pub fn has(&self, flag: Flag) -> bool {
        let value = match flag {
            Flag::Nightskiing => &self.row.nightskiing,
            Flag::Snowparks => &self.row.snowparks,
            Flag::SummerSkiing => &self.row.summer_skiing,
        };
        value == "Yes"
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        metric.value_of(&self.row)
    }
}

// ============================================================================
// Flags
// ============================================================================

/// Boolean-like amenity columns a map can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "Nightskiing")]
    Nightskiing,
    #[serde(rename = "Snowparks")]
    Snowparks,
    #[serde(rename = "Summer skiing")]
    SummerSkiing,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Nightskiing, Flag::Snowparks, Flag::SummerSkiing];

    /// Column name, also used as the checklist value.
    pub fn column_name(self) -> &'static str {
        match self {
            Flag::Nightskiing => "Nightskiing",
            Flag::Snowparks => "Snowparks",
            Flag::SummerSkiing => "Summer skiing",
        }
    }

    /// Checklist label.
    pub fn label(self) -> &'static str {
        match self {
            Flag::Nightskiing => "Night Skiing",
            Flag::Snowparks => "Snow Parks",
            Flag::SummerSkiing => "Summer Skiing",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Flag {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.column_name() == s)
            .ok_or_else(|| QueryError::UnknownFlag(s.to_string()))
    }
}

// ============================================================================
// Metrics
// ============================================================================

/// Numeric columns the country profiler can chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    #[serde(rename = "Price")]
    Price,
    #[serde(rename = "Highest point")]
    HighestPoint,
    #[serde(rename = "Lowest point")]
    LowestPoint,
    #[serde(rename = "Total slopes")]
    TotalSlopes,
    #[serde(rename = "Total lifts")]
    TotalLifts,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Price,
        Metric::HighestPoint,
        Metric::LowestPoint,
        Metric::TotalSlopes,
        Metric::TotalLifts,
    ];

    pub fn column_name(self) -> &'static str {
        match self {
            Metric::Price => "Price",
            Metric::HighestPoint => "Highest point",
            Metric::LowestPoint => "Lowest point",
            Metric::TotalSlopes => "Total slopes",
            Metric::TotalLifts => "Total lifts",
        }
    }

    fn value_of(self, row: &ResortRow) -> f64 {
        match self {
            Metric::Price => row.price,
            Metric::HighestPoint => row.highest_point,
            Metric::LowestPoint => row.lowest_point,
            Metric::TotalSlopes => row.total_slopes,
            Metric::TotalLifts => row.total_lifts,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Metric {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.column_name() == s)
            .ok_or_else(|| QueryError::UnknownMetric(s.to_string()))
    }
}
