//! # Piste
//!
//! An interactive ski resort dashboard over a static resort table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              resorts.csv (ISO-8859-1)                    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [dataset: load, rank per country, price floor]
//! ┌─────────────────────────────────────────────────────────┐
//! │              Dataset (immutable, shared)                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [view: one query per UI event]
//! ┌─────────────────────────────────────────────────────────┐
//! │   country options │ map │ ranking chart │ resort report  │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [web: JSON API + embedded page]
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Browser                              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Gated queries return [`view::Update::NoChange`] instead of an output
//! when the dashboard should keep what it is already showing.

pub mod config;
pub mod dataset;
pub mod view;

#[cfg(feature = "ui")]
pub mod web;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::dataset::{CountryRanks, Dataset, Flag, LoadError, Metric, Resort};
    pub use crate::view::{
        country_options, map_view, ranking_view, resort_report, FlagMatching, HoverData,
        MapLayout, MapQuery, QueryError, RankingQuery, Update,
    };
}

pub use dataset::{Dataset, Flag, Metric, Resort};
pub use view::Update;
