//! Web UI module for unit-converter
//!
//! Serves an embedded single-page UI and a small JSON API:
//! - `/api/units` lists categories and their units
//! - `/api/convert` runs a conversion and returns the chart description

pub mod routes;
pub mod server;

pub use server::{AppState, ServerConfig, start_server};
