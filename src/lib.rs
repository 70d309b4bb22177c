//! # hawaii-climate
//!
//! A read-only HTTP API over Hawaii weather-station measurements.
//!
//! The server opens an SQLite file holding two tables, `measurement` and
//! `station`, and answers a fixed set of JSON queries over them:
//! precipitation and temperature observations for the last year of data,
//! the station list, and min/max/mean temperature over a date window.
//!
//! ## Architecture
//!
//! - **Data Layer**: [`db::Database`], a read-only sqlx pool opened at startup
//! - **API Layer**: axum handlers in [`handlers`], one query per request
//! - **Ambient**: layered [`config`], `tracing` based [`logging`], [`error`] types

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod state;

pub use config::Config;
pub use db::{DatasetSummary, Database};
pub use error::{ClimateError, Result};
pub use handlers::router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats, log_error,
    log_operation_end, log_operation_start, log_request_error,
};
pub use models::{
    Measurement, PrecipitationReading, Station, TemperatureObservation, TemperatureSummary,
};
pub use state::AppState;
