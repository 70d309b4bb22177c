//! SQLite data access.
//!
//! [`Database`] is the single handle through which the server reads the
//! measurement and station tables. It is opened once at startup, shared by
//! every request handler, and closed when the server shuts down. The file is
//! opened read-only; nothing in this crate writes to it.

use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{ClimateError, Result};
use crate::models::{
    Measurement, PrecipitationReading, Station, TemperatureObservation, TemperatureSummary,
};

/// Tables the server expects to find in the database file
pub const REQUIRED_TABLES: [&str; 2] = ["measurement", "station"];

/// Size and extent of the loaded dataset, reported at startup and by `/heartbeat`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DatasetSummary {
    pub measurement_count: i64,
    pub station_count: i64,
    /// Earliest measurement date, `None` for an empty table
    pub first_date: Option<String>,
    /// Latest measurement date, `None` for an empty table
    pub last_date: Option<String>,
}

/// Shared read-only handle over the SQLite pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database file read-only
    pub async fn open(path: &Path, config: &DatabaseConfig) -> Result<Self> {
        if !path.exists() {
            return Err(ClimateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database file not found: {}", path.display()),
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!(
            path = %path.display(),
            max_connections = config.max_connections,
            "Opened SQLite database"
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check that both tables exist and summarize their contents
    pub async fn verify_schema(&self) -> Result<DatasetSummary> {
        for table in REQUIRED_TABLES {
            let found: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            )
            .bind(table)
            .fetch_one(&self.pool)
            .await?;

            if found == 0 {
                return Err(ClimateError::Schema {
                    message: format!("Table not found: {}", table),
                });
            }
        }

        let measurement_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        let station_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
            .fetch_one(&self.pool)
            .await?;
        let (first_date, last_date): (Option<String>, Option<String>) =
            sqlx::query_as("SELECT MIN(date), MAX(date) FROM measurement")
                .fetch_one(&self.pool)
                .await?;

        Ok(DatasetSummary {
            measurement_count,
            station_count,
            first_date,
            last_date,
        })
    }

    /// Daily precipitation for every station on or after `cutoff`
    pub async fn precipitation_since(&self, cutoff: &str) -> Result<Vec<PrecipitationReading>> {
        let rows = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, prcp FROM measurement WHERE date >= ? ORDER BY rowid",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!(cutoff, rows = rows.len(), "Fetched precipitation");
        Ok(rows)
    }

    /// Every row of the station table
    pub async fn stations(&self) -> Result<Vec<Station>> {
        let rows = sqlx::query_as::<_, Station>(
            "SELECT station, name, latitude, longitude, elevation FROM station ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Fetched stations");
        Ok(rows)
    }

    /// Temperature observations of one station on or after `cutoff`
    pub async fn temperature_observations(
        &self,
        station: &str,
        cutoff: &str,
    ) -> Result<Vec<TemperatureObservation>> {
        let rows = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, tobs FROM measurement WHERE station = ? AND date >= ? ORDER BY rowid",
        )
        .bind(station)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!(station, cutoff, rows = rows.len(), "Fetched temperature observations");
        Ok(rows)
    }

    /// Min, max and mean temperature from `start` through `end` (inclusive),
    /// or through the end of the data when `end` is `None`.
    ///
    /// Dates are compared as stored text. A window without observations
    /// yields a summary of `None`s rather than an error.
    pub async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary> {
        let summary = match end {
            Some(end) => {
                sqlx::query_as::<_, TemperatureSummary>(
                    "SELECT CAST(MIN(tobs) AS REAL) AS tmin, CAST(MAX(tobs) AS REAL) AS tmax, \
                     AVG(tobs) AS tavg FROM measurement WHERE date >= ? AND date <= ?",
                )
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TemperatureSummary>(
                    "SELECT CAST(MIN(tobs) AS REAL) AS tmin, CAST(MAX(tobs) AS REAL) AS tmax, \
                     AVG(tobs) AS tavg FROM measurement WHERE date >= ?",
                )
                .bind(start)
                .fetch_one(&self.pool)
                .await?
            }
        };

        debug!(start, end = ?end, summary = ?summary, "Computed temperature summary");
        Ok(summary)
    }

    /// Most recent measurements across all stations, newest first
    pub async fn recent_measurements(&self, limit: u32) -> Result<Vec<Measurement>> {
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT station, date, prcp, tobs FROM measurement \
             ORDER BY date DESC, rowid DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }
}
