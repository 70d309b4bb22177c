//! Test data generation utilities.
//!
//! Builds a small SQLite file with the `measurement` and `station` tables
//! laid out like the Hawaii dataset, with rows on both sides of the cutoff.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

/// (station, name, latitude, longitude, elevation)
pub const STATIONS: [(&str, &str, f64, f64, f64); 3] = [
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

/// (station, date, prcp, tobs)
pub const MEASUREMENTS: [(&str, &str, Option<f64>, Option<f64>); 12] = [
    ("USC00519397", "2016-08-22", Some(0.4), Some(75.0)),
    ("USC00519397", "2016-08-23", Some(0.0), Some(81.0)),
    ("USC00519397", "2017-01-01", Some(0.0), Some(62.0)),
    ("USC00519397", "2017-01-02", None, Some(66.0)),
    ("USC00513117", "2016-08-21", Some(0.02), Some(73.0)),
    ("USC00513117", "2016-08-23", Some(0.15), Some(76.0)),
    ("USC00513117", "2017-01-01", Some(0.29), Some(68.0)),
    ("USC00519281", "2016-08-22", Some(1.0), Some(74.0)),
    ("USC00519281", "2016-08-23", Some(1.79), Some(77.0)),
    ("USC00519281", "2017-01-01", Some(0.03), Some(63.0)),
    ("USC00519281", "2017-01-02", None, Some(66.0)),
    ("USC00519281", "2017-08-18", Some(0.06), Some(79.0)),
];

/// Measurements on or after `cutoff`, in insertion order
pub fn measurements_since(cutoff: &str) -> Vec<(&'static str, &'static str, Option<f64>, Option<f64>)> {
    MEASUREMENTS
        .iter()
        .copied()
        .filter(|(_, date, _, _)| *date >= cutoff)
        .collect()
}

/// Temperatures observed between `start` and `end` inclusive
pub fn temperatures_between(start: &str, end: &str) -> Vec<f64> {
    MEASUREMENTS
        .iter()
        .filter(|(_, date, _, _)| *date >= start && *date <= end)
        .filter_map(|(_, _, _, tobs)| *tobs)
        .collect()
}

/// Creates the fixture database at `path`.
pub async fn create_test_weather_db(path: &Path) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(&pool)
    .await?;

    for (station, name, latitude, longitude, elevation) in STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(station)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(elevation)
        .execute(&pool)
        .await?;
    }

    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await?;
    }

    pool.close().await;
    Ok(())
}

/// Creates a database file that lacks the station table.
pub async fn create_incomplete_db(path: &Path) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query("CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT)")
        .execute(&pool)
        .await?;

    pool.close().await;
    Ok(())
}
