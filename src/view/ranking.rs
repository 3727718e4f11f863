//! Country profiler: top resorts of a country by one metric.

use serde::Serialize;
use tracing::debug;

use super::figure::{Bar, BarFigure};
use super::update::Update;
use crate::dataset::{Dataset, Metric, Resort};

pub const DEFAULT_TOP_N: usize = 5;
pub const BAR_CHART_TITLE: &str = "Hover Over Bars For Info";

/// Current country profiler control values.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingQuery {
    pub continent: String,
    pub country: String,
    pub metric: Metric,
    /// Clicks on "Create Chart" since the last update.
    pub n_clicks: Option<u32>,
}

/// Header, bar chart, and the re-armed click counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingView {
    pub header: String,
    pub figure: BarFigure,
    /// Always 0: the button must be clicked again for the next chart.
    pub n_clicks: u32,
}

/// Resorts of `continent` + `country`, highest `metric` first.
///
/// The sort is stable, so ties keep table order.
pub fn top_resorts<'a>(
    dataset: &'a Dataset,
    continent: &str,
    country: &str,
    metric: Metric,
    limit: usize,
) -> Vec<&'a Resort> {
    let mut matches: Vec<&Resort> = dataset
        .resorts()
        .iter()
        .filter(|r| r.continent() == continent && r.country() == country)
        .collect();
    matches.sort_by(|a, b| b.metric(metric).total_cmp(&a.metric(metric)));
    matches.truncate(limit);
    matches
}

/// Build the ranking chart, unless the create button has not been clicked.
pub fn ranking_view(dataset: &Dataset, query: &RankingQuery, limit: usize) -> Update<RankingView> {
    if query.n_clicks.unwrap_or(0) == 0 {
        return Update::NoChange;
    }

    let resorts = top_resorts(dataset, &query.continent, &query.country, query.metric, limit);
    debug!(
        continent = %query.continent,
        country = %query.country,
        metric = %query.metric,
        bars = resorts.len(),
        "ranking query"
    );

    let bars = resorts
        .into_iter()
        .map(|r| Bar {
            label: r.name().to_string(),
            value: r.metric(query.metric),
            custom_data: vec![r.name().to_string()],
        })
        .collect();

    Update::Updated(RankingView {
        header: ranking_header(&query.country, query.metric),
        figure: BarFigure {
            title: BAR_CHART_TITLE.to_string(),
            x_label: "Resort".to_string(),
            y_label: query.metric.column_name().to_string(),
            bars,
        },
        n_clicks: 0,
    })
}

/// `Top Resorts in <country> by <metric>`.
pub fn ranking_header(country: &str, metric: Metric) -> String {
    format!("Top Resorts in {} by {}", country, metric)
}
