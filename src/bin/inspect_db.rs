//! Print a quick overview of a weather-station database file.
//!
//! Usage: `inspect_db [path]` (defaults to `Resources/hawaii.sqlite`).

use anyhow::{Context, Result};
use std::path::PathBuf;

use hawaii_climate::config::DatabaseConfig;
use hawaii_climate::Database;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Resources/hawaii.sqlite"));

    println!("Inspecting database: {}", path.display());

    let db = Database::open(&path, &DatabaseConfig::default())
        .await
        .with_context(|| format!("failed to open {}", path.display()))?;

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .context("failed to list tables")?;

    println!("\nTables:");
    for table in &tables {
        println!("  {}", table);
    }

    let summary = db.verify_schema().await.context("unexpected schema")?;
    println!("\nMeasurements: {}", summary.measurement_count);
    println!("Stations:     {}", summary.station_count);
    println!(
        "Date range:   {} .. {}",
        summary.first_date.as_deref().unwrap_or("-"),
        summary.last_date.as_deref().unwrap_or("-")
    );

    let activity: Vec<(String, i64)> = sqlx::query_as(
        "SELECT station, COUNT(*) AS observations FROM measurement \
         GROUP BY station ORDER BY observations DESC",
    )
    .fetch_all(db.pool())
    .await
    .context("failed to rank stations")?;

    println!("\nStation activity:");
    for (station, observations) in &activity {
        println!("  {:<12} {}", station, observations);
    }
    if let Some((station, _)) = activity.first() {
        println!("\nMost active station: {}", station);
    }

    println!("\nLatest measurements:");
    for m in db.recent_measurements(5).await? {
        println!(
            "  {} {} prcp={:?} tobs={:?}",
            m.date, m.station_id, m.precipitation, m.temperature_observation
        );
    }

    db.close().await;
    Ok(())
}
