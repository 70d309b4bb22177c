//! Stations endpoint handler.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::logging::{generate_request_id, log_request_error};
use crate::models::StationResponse;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing stations request"
    );

    match state.db.stations().await {
        Ok(stations) => {
            let body: Vec<StationResponse> =
                stations.into_iter().map(StationResponse::from).collect();

            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                rows = body.len(),
                "Stations request successful"
            );
            Json(body).into_response()
        }
        Err(error) => {
            log_request_error(&error, ENDPOINT, &request_id, None);
            error.into_response_with_id(&request_id)
        }
    }
}
