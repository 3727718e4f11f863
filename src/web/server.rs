//! Axum web server for the Piste dashboard
//!
//! Serves the embedded dashboard page and one API endpoint per reactive
//! query. Gated queries answer `204 No Content` when they decline to update.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::dataset::{Dataset, Flag, Metric};
use crate::view::{
    self, Controls, HoverData, MapLayout, MapQuery, MapView, QueryError, RankingQuery,
    ResortReport, Update,
};

/// Embedded dashboard page
#[derive(RustEmbed)]
#[folder = "ui/"]
struct Assets;

/// Application state shared across handlers
pub struct AppState {
    /// The resort table, read-only after start-up
    pub dataset: Dataset,
    /// Density map layout and flag matching mode
    pub map_layout: MapLayout,
    /// Bars in the ranking chart
    pub top_n: usize,
}

/// Build the axum router with all routes
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/controls", get(get_controls))
        .route("/api/countries", get(list_countries))
        .route("/api/map", post(update_map))
        .route("/api/ranking", post(update_ranking))
        .route("/api/detail", post(show_report))
        // Static files
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server
pub async fn serve(
    state: AppState,
    host: &str,
    port: u16,
    open_browser: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let resorts = state.dataset.len();
    let app = router(Arc::new(state));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let url = format!("http://{}", listener.local_addr()?);

    info!(%url, resorts, "piste dashboard listening");

    if open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "failed to open browser");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// Errors and gated responses
// ============================================================================

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A query error on the HTTP boundary.
pub struct ApiError(QueryError);

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            QueryError::ResortNotFound(_) => StatusCode::NOT_FOUND,
            err if err.is_bad_request() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> IntoResponse for Update<T> {
    fn into_response(self) -> Response {
        match self {
            Update::Updated(value) => Json(value).into_response(),
            Update::NoChange => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/controls - Dropdown, checklist and slider configuration
async fn get_controls(State(state): State<Arc<AppState>>) -> Json<Controls> {
    Json(view::controls(&state.dataset))
}

#[derive(Deserialize)]
struct CountriesParams {
    continent: String,
}

/// GET /api/countries?continent=... - Country dropdown options
async fn list_countries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountriesParams>,
) -> Json<Vec<String>> {
    Json(view::country_options(&state.dataset, &params.continent))
}

#[derive(Deserialize)]
struct MapRequest {
    price: f64,
    /// Checklist values; `null` when nothing was ever ticked
    #[serde(default)]
    selections: Option<Vec<String>>,
}

/// POST /api/map - Resort map for a price threshold and amenity flags
async fn update_map(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MapRequest>,
) -> Result<Json<MapView>, ApiError> {
    let selections = req
        .selections
        .unwrap_or_default()
        .iter()
        .map(|s| s.parse::<Flag>())
        .collect::<Result<Vec<_>, _>>()?;

    let query = MapQuery {
        price: req.price,
        selections,
    };
    Ok(Json(view::map_view(&state.dataset, &query, &state.map_layout)))
}

#[derive(Deserialize)]
struct RankingRequest {
    continent: String,
    country: String,
    metric: String,
    #[serde(default)]
    n_clicks: Option<u32>,
}

/// POST /api/ranking - Top resorts bar chart, gated on the create button
async fn update_ranking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RankingRequest>,
) -> Result<Update<view::RankingView>, ApiError> {
    let query = RankingQuery {
        metric: req.metric.parse::<Metric>()?,
        continent: req.continent,
        country: req.country,
        n_clicks: req.n_clicks,
    };
    Ok(view::ranking_view(&state.dataset, &query, state.top_n))
}

#[derive(Deserialize)]
struct DetailRequest {
    #[serde(default)]
    hover_data: Option<HoverData>,
}

/// POST /api/detail - Ranking card for the hovered resort
async fn show_report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DetailRequest>,
) -> Result<Update<ResortReport>, ApiError> {
    view::resort_report(&state.dataset, req.hover_data.as_ref()).map_err(ApiError::from)
}

// ============================================================================
// Static File Handler
// ============================================================================

/// Serve the embedded dashboard, falling back to index.html
async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => match Assets::get("index.html") {
            Some(content) => (
                [(header::CONTENT_TYPE, "text/html")],
                content.data.into_owned(),
            )
                .into_response(),
            None => (StatusCode::NOT_FOUND, "Not found").into_response(),
        },
    }
}
