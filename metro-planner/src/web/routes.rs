//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::domain::{Station, StationId};
use crate::planner::{RoutePlanner, SearchError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Default number of station search results.
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on station search results.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/lines", get(list_lines))
        .route("/route", get(plan_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with route form and line listings.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = IndexTemplate::from_lookup(&state.lookup)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok(Html(html))
}

/// Search stations by display name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    let stations = state
        .lookup
        .search(&req.q, limit)
        .into_iter()
        .map(|m| StationSearchResult {
            station: StationInfo::from_station(m.station),
            fuzzy: m.fuzzy,
        })
        .collect();

    Json(StationSearchResponse { stations })
}

/// List every line with its stations.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .lookup
        .lines()
        .map(|line| LineResult {
            id: line.to_string(),
            stations: state
                .lookup
                .stations_on(line)
                .into_iter()
                .map(StationInfo::from_station)
                .collect(),
        })
        .collect();

    Json(LinesResponse { lines })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Resolve a station id from a query parameter.
fn resolve_station<'a>(
    state: &'a AppState,
    role: &str,
    raw: &str,
) -> Result<&'a Station, AppError> {
    let id = StationId::parse(raw.trim()).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {role} station: {e}"),
    })?;
    state.stations.get(&id).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown {role} station: {id}"),
    })
}

/// Plan the fastest route between two stations.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<PlanRouteRequest>,
) -> Result<Response, AppError> {
    let origin = resolve_station(&state, "origin", &req.from)?;
    let destination = resolve_station(&state, "destination", &req.to)?;

    let planner = RoutePlanner::new(&state.graph, &state.stations);
    let result = planner.plan(origin.id(), destination.id())?;

    let departure = Local::now().time();
    let detail = result
        .as_ref()
        .map(|r| RouteDetail::from_result(r, &state.stations, departure));

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteResultTemplate {
            origin_name: origin.name().to_string(),
            destination_name: destination.name().to_string(),
            route: detail.as_ref().map(RouteView::from_detail),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanRouteResponse {
            origin: StationInfo::from_station(origin),
            destination: StationInfo::from_station(destination),
            found: detail.is_some(),
            route: detail,
        })
        .into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::InconsistentData(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
