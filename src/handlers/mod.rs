//! HTTP request handlers for the hawaii-climate API.
//!
//! This module contains all the endpoint handlers and the route table that
//! binds them.

pub mod heartbeat;
pub mod home;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use home::home_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{temperature_range_handler, temperature_start_handler};
pub use tobs::tobs_handler;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the full route table.
///
/// The static `precipitation`, `stations` and `tobs` segments are matched
/// before the `:start` capture, so they never reach the temperature handlers.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(temperature_start_handler))
        .route("/api/v1.0/:start/:end", get(temperature_range_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
