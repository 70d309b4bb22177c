//! Temperature observation (tobs) endpoint handler.
//!
//! Reports the configured station's observations from the cutoff date on.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::logging::{generate_request_id, log_request_error};
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let station = state.tobs_station();
    let cutoff = state.cutoff_date();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        station = station,
        cutoff = cutoff,
        "Processing tobs request"
    );

    match state.db.temperature_observations(station, cutoff).await {
        Ok(observations) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                rows = observations.len(),
                "Tobs request successful"
            );
            Json(observations).into_response()
        }
        Err(error) => {
            let params = format!("station={}, cutoff={}", station, cutoff);
            log_request_error(&error, ENDPOINT, &request_id, Some(&params));
            error.into_response_with_id(&request_id)
        }
    }
}
