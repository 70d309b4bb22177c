//! Application state management for hawaii-climate.
//!
//! This module defines the shared state that is passed to all handlers:
//! the configuration, the database handle and the dataset summary taken
//! when the database was opened.

use std::sync::Arc;

use crate::config::Config;
use crate::db::{DatasetSummary, Database};
use crate::error::Result;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Read-only database handle
    pub db: Database,
    /// Row counts and date extent captured at startup
    pub dataset: DatasetSummary,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, db: Database, dataset: DatasetSummary) -> Self {
        Self {
            config,
            db,
            dataset,
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, db: Database, dataset: DatasetSummary) -> Arc<Self> {
        Arc::new(Self::new(config, db, dataset))
    }

    /// Verify the database schema and build the state around it
    pub async fn initialize(config: Config, db: Database) -> Result<Self> {
        let dataset = db.verify_schema().await?;
        Ok(Self::new(config, db, dataset))
    }

    /// Earliest date reported by the precipitation and tobs endpoints
    pub fn cutoff_date(&self) -> &str {
        &self.config.query.cutoff_date
    }

    /// Station reported by the tobs endpoint
    pub fn tobs_station(&self) -> &str {
        &self.config.query.tobs_station
    }

    /// Path of the database file, if known
    pub fn database_path(&self) -> String {
        self.config
            .database
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}
