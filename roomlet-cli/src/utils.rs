//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, database
//! management, and output formatting.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use roomlet::config::{ConfigLoader, ResolvedConfig};
use roomlet::{Database, DatabaseConfig};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory path.
///
/// Priority: global option > default `~/.roomlet`.
pub fn resolve_data_dir(global: &GlobalOptions) -> PathBuf {
    global.data_dir.clone().unwrap_or_else(|| {
        home::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".roomlet")
    })
}

/// Load configuration from the data directory and environment.
///
/// Precedence: environment variables > configuration file > defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<ResolvedConfig, CliError> {
    let data_dir = resolve_data_dir(global);
    ConfigLoader::load(&data_dir).map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(
    global: &GlobalOptions,
    config: &ResolvedConfig,
) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global).join("roomlet.db");

    if !db_path.exists() && (global.disable_autoinit || config.disable_autoinit) {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(
            config.maximum_lock_wait_seconds,
        ));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
#[allow(dead_code)]
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
