//! Reactive view model.
//!
//! Each query maps the dashboard's current control values to the outputs
//! that should replace what is on screen. Queries never mutate the table.
//!
//! | Query            | Inputs                                   | Outputs                      |
//! |------------------|------------------------------------------|------------------------------|
//! | country options  | continent                                | country dropdown options     |
//! | map              | price, flag selections                   | header, density map          |
//! | ranking          | continent, country, metric, clicks       | header, bar chart, clicks=0  |
//! | resort report    | bar chart hover                          | five ranking strings         |

mod detail;
mod error;
mod figure;
mod map;
mod options;
mod ranking;
mod update;

pub use detail::{resort_report, HoverData, HoverPoint, ResortReport};
pub use error::{QueryError, QueryResult};
pub use figure::{Bar, BarFigure, DensityMapFigure, DensityPoint, GeoPoint};
pub use map::{filter_resorts, map_header, map_view, FlagMatching, MapLayout, MapQuery, MapView};
pub use options::{
    continent_options, controls, country_options, ControlDefaults, Controls, FlagOption, Slider,
    BAR_HEADER_PLACEHOLDER, DEFAULT_CONTINENT, DEFAULT_COUNTRY, PRICE_DEFAULT, PRICE_MAX,
    PRICE_MIN, PRICE_STEP,
};
pub use ranking::{
    ranking_header, ranking_view, top_resorts, RankingQuery, RankingView, BAR_CHART_TITLE,
    DEFAULT_TOP_N,
};
pub use update::Update;
