use crate::infra::{inline_catalog, AppState, SharedCatalog};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json};
use chrono::{Local, NaiveDate};
use cinemetrics::catalog::{HighlightsQuery, Movie};
use cinemetrics::dashboard::{Dashboard, DashboardOptions};
use cinemetrics::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardRequest {
    /// Also include the average-rating-by-primary-genre section.
    #[serde(default)]
    pub(crate) include_genre_ratings: bool,
    /// Inline CSV export to build from instead of the configured dataset.
    #[serde(default)]
    pub(crate) movies_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardResponse {
    pub(crate) generated_on: NaiveDate,
    pub(crate) data_source: CatalogDataSource,
    pub(crate) dashboard: Dashboard,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HighlightsRequest {
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
    #[serde(default)]
    pub(crate) min_year: Option<i32>,
    #[serde(default)]
    pub(crate) movies_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct HighlightsResponse {
    pub(crate) min_rating: f64,
    pub(crate) min_year: i32,
    pub(crate) data_source: CatalogDataSource,
    pub(crate) matches: Vec<Movie>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CatalogDataSource {
    Inline,
    Configured,
}

pub(crate) fn dashboard_router(catalog: SharedCatalog) -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard", post(dashboard_endpoint))
        .route("/api/v1/catalog/highlights", post(highlights_endpoint))
        .layer(Extension(catalog))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint(
    Extension(catalog): Extension<SharedCatalog>,
    Json(payload): Json<DashboardRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let DashboardRequest {
        include_genre_ratings,
        movies_csv,
    } = payload;

    let options = DashboardOptions {
        include_genre_ratings,
    };

    let (dashboard, data_source) = match movies_csv {
        Some(csv) => {
            let inline = inline_catalog(csv)?;
            (
                Dashboard::build(&inline, options),
                CatalogDataSource::Inline,
            )
        }
        None => (
            Dashboard::build(catalog.as_ref(), options),
            CatalogDataSource::Configured,
        ),
    };

    Ok(Json(DashboardResponse {
        generated_on: Local::now().date_naive(),
        data_source,
        dashboard,
    }))
}

pub(crate) async fn highlights_endpoint(
    Extension(catalog): Extension<SharedCatalog>,
    Json(payload): Json<HighlightsRequest>,
) -> Result<Json<HighlightsResponse>, AppError> {
    let HighlightsRequest {
        min_rating,
        min_year,
        movies_csv,
    } = payload;

    let mut query = HighlightsQuery::default();
    if let Some(min_rating) = min_rating {
        query.min_rating = min_rating;
    }
    if let Some(min_year) = min_year {
        query.min_year = min_year;
    }

    let (matches, data_source) = match movies_csv {
        Some(csv) => {
            let inline = inline_catalog(csv)?;
            let matches = query.select(&inline).into_iter().cloned().collect();
            (matches, CatalogDataSource::Inline)
        }
        None => {
            let matches = query
                .select(catalog.as_ref())
                .into_iter()
                .cloned()
                .collect();
            (matches, CatalogDataSource::Configured)
        }
    };

    Ok(Json(HighlightsResponse {
        min_rating: query.min_rating,
        min_year: query.min_year,
        data_source,
        matches,
    }))
}
