//! HTTP routes for the converter UI
//!
//! Provides API endpoints for unit listings and conversions, plus static
//! file serving for the embedded frontend.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

use crate::chart::{ChartSpec, build_chart_spec_with_style};
use crate::converter::{ConversionError, ConversionRequest, ConversionResult};
use crate::report::format_headline;
use crate::units::Category;

use super::server::AppState;

/// Embedded static assets
#[derive(RustEmbed)]
#[folder = "web-assets/"]
struct Assets;

/// Frontend configuration
#[derive(Serialize)]
struct FrontendConfig {
    api_endpoint: Option<String>,
}

/// A category and its units
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryUnits {
    pub name: String,
    pub base_unit: String,
    pub units: Vec<String>,
}

/// Response of `/api/units`
#[derive(Debug, Serialize, Deserialize)]
pub struct UnitsResponse {
    pub categories: Vec<CategoryUnits>,
}

/// Query parameters for a conversion
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    pub category: String,
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// Response of `/api/convert`
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub request: ConversionRequest,
    pub result: f64,
    pub headline: String,
    pub chart: ChartSpec,
}

/// Create API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/units", get(get_units))
        .route("/api/convert", get(get_convert))
        .route("/api/config", get(get_config))
        .route("/api/health", get(health_check))
}

/// Create static file routes
pub fn static_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index_html))
        .route("/{*path}", get(static_handler))
}

/// GET /api/units - Returns every category with its units in display order
pub async fn get_units() -> Json<UnitsResponse> {
    let categories = Category::all()
        .iter()
        .map(|c| CategoryUnits {
            name: c.to_string(),
            base_unit: c.base_unit().to_string(),
            units: c.units().iter().map(|u| u.to_string()).collect(),
        })
        .collect();

    Json(UnitsResponse { categories })
}

/// GET /api/convert - Converts a value and returns the chart description
pub async fn get_convert(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConvertQuery>,
) -> impl IntoResponse {
    match run_conversion(&state, query) {
        Ok(result) => {
            let request = &result.request;
            let chart = build_chart_spec_with_style(
                request.value,
                result.value,
                &request.from_unit,
                &request.to_unit,
                &state.chart_style,
            );
            Json(ConvertResponse {
                headline: format_headline(&result, state.precision),
                result: result.value,
                request: result.request,
                chart,
            })
            .into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

fn run_conversion(
    state: &AppState,
    query: ConvertQuery,
) -> Result<ConversionResult, ConversionError> {
    let category: Category = query.category.parse()?;
    let request = ConversionRequest::new(category, query.value, query.from, query.to);

    if state.lenient_temperature {
        request.execute_lenient()
    } else {
        request.execute()
    }
}

/// GET /api/config - Returns frontend configuration
async fn get_config(State(state): State<Arc<AppState>>) -> Json<FrontendConfig> {
    Json(FrontendConfig {
        api_endpoint: state.api_endpoint.clone(),
    })
}

/// GET /api/health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// GET / - Serve index.html
async fn index_html() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(content) => Html(content.data.into_owned()).into_response(),
        None => (StatusCode::NOT_FOUND, "index.html not found").into_response(),
    }
}

/// Static file handler for embedded assets
async fn static_handler(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("File not found: {}", path)).into_response(),
    }
}
