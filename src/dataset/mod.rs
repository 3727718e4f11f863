//! The resort table.
//!
//! Loaded once at start-up, ranked per country, then shared read-only by
//! every query.

mod error;
mod loader;
mod rank;
mod record;

pub use error::{LoadError, LoadResult};
pub use loader::{decode_latin1, load_path, load_reader, parse_rows};
pub use rank::{competition_rank_desc, country_ranks};
pub use record::{CountryRanks, Flag, Metric, Resort, ResortRow};

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Immutable, ranked resort table in file row order.
#[derive(Debug, Clone)]
pub struct Dataset {
    resorts: Vec<Resort>,
}

impl Dataset {
    /// Load and derive the table from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> LoadResult<Self> {
        load_path(path.as_ref())
    }

    /// Load and derive the table from ISO-8859-1 CSV bytes.
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        load_reader(reader)
    }

    /// Build the table from raw rows.
    ///
    /// Ranks are computed over the raw values first; zero prices are then
    /// raised to 1.
    pub fn from_rows(rows: Vec<ResortRow>) -> LoadResult<Self> {
        if rows.is_empty() {
            return Err(LoadError::Empty);
        }

        let ranks = country_ranks(&rows);
        let resorts = rows
            .into_iter()
            .zip(ranks)
            .map(|(mut row, ranks)| {
                if row.price == 0.0 {
                    row.price = 1.0;
                }
                Resort { row, ranks }
            })
            .collect();

        Ok(Self { resorts })
    }

    pub fn resorts(&self) -> &[Resort] {
        &self.resorts
    }

    pub fn len(&self) -> usize {
        self.resorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resorts.is_empty()
    }

    /// First resort with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Resort> {
        self.resorts.iter().find(|r| r.name() == name)
    }

    /// Distinct continents in first-appearance order.
    pub fn continents(&self) -> Vec<&str> {
        distinct(self.resorts.iter().map(Resort::continent))
    }

    /// Distinct countries on a continent, in first-appearance order.
    pub fn countries_in(&self, continent: &str) -> Vec<&str> {
        distinct(
            self.resorts
                .iter()
                .filter(|r| r.continent() == continent)
                .map(Resort::country),
        )
    }

    pub fn country_count(&self) -> usize {
        self.resorts
            .iter()
            .map(Resort::country)
            .collect::<HashSet<_>>()
            .len()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
