//! Precipitation endpoint handler.
//!
//! Returns every station's daily precipitation from the cutoff date on, as
//! a list of single-key `{"<date>": <prcp>}` objects.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::logging::{generate_request_id, log_request_error};
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let cutoff = state.cutoff_date();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        cutoff = cutoff,
        "Processing precipitation request"
    );

    match state.db.precipitation_since(cutoff).await {
        Ok(readings) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                rows = readings.len(),
                "Precipitation request successful"
            );
            Json(readings).into_response()
        }
        Err(error) => {
            log_request_error(&error, ENDPOINT, &request_id, Some(cutoff));
            error.into_response_with_id(&request_id)
        }
    }
}
