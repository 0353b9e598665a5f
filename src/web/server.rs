//! Web server for the converter UI
//!
//! Provides an HTTP server using Axum to serve the UI and JSON API endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::chart::ChartStyle;
use crate::config::ConverterConfig;

use super::routes;

/// Shared application state (read-only after startup)
#[derive(Debug, Clone)]
pub struct AppState {
    pub chart_style: ChartStyle,
    pub precision: usize,
    pub lenient_temperature: bool,
    pub api_endpoint: Option<String>,
}

impl AppState {
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            chart_style: config.chart_style(),
            precision: config.display.precision,
            lenient_temperature: config.conversion.lenient_temperature,
            api_endpoint: config.server.api_endpoint.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}

/// Configuration for the web server
pub struct ServerConfig {
    pub port: u16,
    pub open_browser: bool,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8501,
            open_browser: true,
            verbose: false,
        }
    }
}

/// Build the router with all routes attached
pub fn app(state: AppState) -> Router {
    let cors = state.api_endpoint.is_some();

    let router = Router::new()
        .merge(routes::api_routes())
        .merge(routes::static_routes())
        .with_state(Arc::new(state));

    if cors {
        // A frontend served from elsewhere needs to reach the API
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
    } else {
        router
    }
}

/// Start the web server and serve the UI
pub async fn start_server(
    state: AppState,
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if config.verbose {
        eprintln!(
            "Chart style: height={}, colors={} / {}",
            state.chart_style.height, state.chart_style.source_color, state.chart_style.converted_color
        );
        if let Some(endpoint) = &state.api_endpoint {
            eprintln!("CORS enabled for API endpoint {}", endpoint);
        }
    }

    let app = app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;

    let url = format!("http://localhost:{}", config.port);
    eprintln!("Starting web server at {}", url);

    if config.open_browser {
        eprintln!("Opening browser...");
        if let Err(e) = open::that(&url) {
            eprintln!("Warning: Could not open browser: {}", e);
            eprintln!("Please open {} manually", url);
        }
    }

    eprintln!("Press Ctrl+C to stop the server");

    axum::serve(listener, app).await?;

    Ok(())
}
