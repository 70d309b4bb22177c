//! Heartbeat endpoint handler.
//!
//! Returns server status information: uptime and a summary of the dataset
//! the server is reading.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use crate::db::DatasetSummary;
use crate::state::AppState;

/// Identifier of this server process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> = once_cell::sync::Lazy::new(SystemTime::now);

/// Pin the uptime origin; called once at startup.
pub fn record_start_time() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Dataset information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    /// Database file path
    pub database_path: String,
    #[serde(flatten)]
    pub summary: DatasetSummary,
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    Json(HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset: DatasetInfo {
            database_path: state.database_path(),
            summary: state.dataset.clone(),
        },
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::test_state;

    #[tokio::test]
    async fn test_heartbeat_reports_dataset() {
        record_start_time();
        let state = test_state().await;
        let Json(response) = heartbeat_handler(State(state)).await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.server_id, *SERVER_ID);
        assert_eq!(response.dataset.summary.measurement_count, 4);
        assert_eq!(response.dataset.summary.station_count, 2);
        assert_eq!(
            response.dataset.summary.last_date.as_deref(),
            Some("2017-01-01")
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dataset"]["first_date"], "2016-08-22");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}
