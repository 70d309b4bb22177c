//! Temperature summary endpoint handlers.
//!
//! `/api/v1.0/:start` and `/api/v1.0/:start/:end` report the minimum,
//! maximum and mean observed temperature across all stations over a date
//! window. Path segments are passed to the query as given: a malformed or
//! out-of-range date narrows the window to nothing, and the response then
//! carries `null` aggregates with a `200` status.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::logging::{generate_request_id, log_request_error};
use crate::models::{TemperatureRangeResponse, TemperatureStartResponse};
use crate::state::AppState;

/// Handle GET /api/v1.0/:start requests
pub async fn temperature_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/:start",
        request_id = %request_id,
        start = %start,
        "Processing temperature request"
    );

    match state.db.temperature_summary(&start, None).await {
        Ok(summary) => {
            info!(
                endpoint = "/api/v1.0/:start",
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                empty = summary.tavg.is_none(),
                "Temperature request successful"
            );
            Json(TemperatureStartResponse {
                start_date: start,
                summary,
            })
            .into_response()
        }
        Err(error) => {
            let params = format!("start={}", start);
            log_request_error(&error, "/api/v1.0/:start", &request_id, Some(&params));
            error.into_response_with_id(&request_id)
        }
    }
}

/// Handle GET /api/v1.0/:start/:end requests
pub async fn temperature_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/:start/:end",
        request_id = %request_id,
        start = %start,
        end = %end,
        "Processing temperature range request"
    );

    match state.db.temperature_summary(&start, Some(&end)).await {
        Ok(summary) => {
            info!(
                endpoint = "/api/v1.0/:start/:end",
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                empty = summary.tavg.is_none(),
                "Temperature range request successful"
            );
            Json(TemperatureRangeResponse {
                start_date: start,
                end_date: end,
                summary,
            })
            .into_response()
        }
        Err(error) => {
            let params = format!("start={}, end={}", start, end);
            log_request_error(&error, "/api/v1.0/:start/:end", &request_id, Some(&params));
            error.into_response_with_id(&request_id)
        }
    }
}
