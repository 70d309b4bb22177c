//! Configuration management for hawaii-climate.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ClimateError, Result};

/// First day of the "last year of data" window used by the precipitation
/// and tobs endpoints.
pub const DEFAULT_CUTOFF_DATE: &str = "2016-08-23";

/// Station with the most observations in the Hawaii dataset.
pub const DEFAULT_TOBS_STATION: &str = "USC00519281";

/// Command-line arguments for hawaii-climate
#[derive(Parser, Debug)]
#[command(name = "hawaii-climate")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file to serve
    pub database_file: PathBuf,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "CLIMATE_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CLIMATE_PORT")]
    pub port: Option<u16>,

    /// Number of worker threads
    #[arg(short, long, env = "CLIMATE_WORKERS")]
    pub workers: Option<usize>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "CLIMATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CLIMATE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads (None = number of CPU cores)
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite file
    #[serde(default)]
    pub file_path: Option<PathBuf>,

    /// Upper bound on pooled read connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Constants that scope the fixed-window queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Earliest date (inclusive) returned by precipitation and tobs
    #[serde(default = "default_cutoff_date")]
    pub cutoff_date: String,

    /// Station whose observations the tobs endpoint reports
    #[serde(default = "default_tobs_station")]
    pub tobs_station: String,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Query configuration
    #[serde(default)]
    pub query: QueryConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        Self::from_args(Args::parse())
    }

    /// Build the configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if args.workers.is_some() {
            config.server.workers = args.workers;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        // Database path from command line takes precedence
        let database_path = args.database_file;
        config.database.file_path = Some(database_path.clone());

        Ok((config, database_path))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server.host = other.server.host;
        self.server.port = other.server.port;
        if other.server.workers.is_some() {
            self.server.workers = other.server.workers;
        }
        self.database = other.database;
        self.query = other.query;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(ClimateError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(ClimateError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ClimateError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if self.database.max_connections == 0 {
            return Err(ClimateError::Config {
                message: "Database max_connections must be at least 1".to_string(),
            });
        }

        // Stored dates are compared as text, so the cutoff must be zero-padded
        if NaiveDate::parse_from_str(&self.query.cutoff_date, "%Y-%m-%d").is_err()
            || self.query.cutoff_date.len() != 10
        {
            return Err(ClimateError::Config {
                message: format!(
                    "Invalid cutoff date: {}. Expected YYYY-MM-DD",
                    self.query.cutoff_date
                ),
            });
        }

        if self.query.tobs_station.trim().is_empty() {
            return Err(ClimateError::Config {
                message: "tobs_station cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            query: QueryConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            max_connections: default_max_connections(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            cutoff_date: default_cutoff_date(),
            tobs_station: default_tobs_station(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_connections() -> u32 {
    5
}

fn default_cutoff_date() -> String {
    DEFAULT_CUTOFF_DATE.to_string()
}

fn default_tobs_station() -> String {
    DEFAULT_TOBS_STATION.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
