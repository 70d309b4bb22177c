//! Row and response types for the measurement and station tables.
//!
//! The schema is declared here rather than discovered from the file at
//! startup. Row types derive [`sqlx::FromRow`] and name the stored columns;
//! response types fix the JSON field names the API exposes.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// One row of the `measurement` table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Measurement {
    #[sqlx(rename = "station")]
    pub station_id: String,
    /// Observation day, `YYYY-MM-DD`
    pub date: String,
    #[sqlx(rename = "prcp")]
    pub precipitation: Option<f64>,
    #[sqlx(rename = "tobs")]
    pub temperature_observation: Option<f64>,
}

/// One row of the `station` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Station {
    #[sqlx(rename = "station")]
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Precipitation recorded on one day by one station.
///
/// Serializes as a single-key object `{"<date>": <precipitation>}`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    #[sqlx(rename = "prcp")]
    pub precipitation: Option<f64>,
}

impl Serialize for PrecipitationReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.precipitation)?;
        map.end()
    }
}

/// A dated temperature observation
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TemperatureObservation {
    pub date: String,
    #[sqlx(rename = "tobs")]
    pub temperature: Option<f64>,
}

/// Aggregate of temperature observations over a date window.
///
/// All three fields are `None` when no rows matched.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromRow, Serialize)]
pub struct TemperatureSummary {
    pub tmin: Option<f64>,
    pub tmax: Option<f64>,
    pub tavg: Option<f64>,
}

/// Station as exposed by `/api/v1.0/stations`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResponse {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            station: station.station_id,
            name: station.name,
            latitude: station.latitude,
            longitude: station.longitude,
            elevation: station.elevation,
        }
    }
}

/// Body of `/api/v1.0/{start}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureStartResponse {
    pub start_date: String,
    #[serde(flatten)]
    pub summary: TemperatureSummary,
}

/// Body of `/api/v1.0/{start}/{end}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRangeResponse {
    pub start_date: String,
    pub end_date: String,
    #[serde(flatten)]
    pub summary: TemperatureSummary,
}
