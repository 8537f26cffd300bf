//! Database initialization operations.
//!
//! Explicit initialization of the roomlet data directory and database,
//! with optional creation of a default configuration file.

use std::fs;
use std::path::PathBuf;

use crate::database::{Database, DatabaseConfig};
use crate::error::{Error, Result};

/// Options for database initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite existing database if it exists.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create a default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// Result of an initialization operation.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Default minimal configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# Roomlet Configuration File
# See documentation for available options

# Days until a pending reservation expires (default: 7)
# ttl_days: 7

# A house accepts up to max_occupants * queue_multiplier active
# reservations (default: 5)
# queue_multiplier: 5

# Maximum lock wait time in seconds (default: 5)
# maximum_lock_wait_seconds: 5
";

/// Initializes the roomlet data directory and database.
///
/// Creates the data directory if needed, initializes the database, and
/// optionally writes a default configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database cannot be initialized
/// - The configuration file cannot be written
/// - Overwrite is false and the database already exists
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use roomlet::operations::{init_database, InitOptions};
///
/// let options = InitOptions::new(PathBuf::from("/tmp/roomlet-data"))
///     .with_create_config(true);
/// let result = init_database(&options).unwrap();
/// println!("database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join("roomlet.db");
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "database already exists at {}; use --overwrite to replace it",
                db_path.display()
            ),
        });
    }

    if db_exists && options.overwrite {
        fs::remove_file(&db_path)?;
    }

    let db_config = DatabaseConfig::new(&db_path);
    let _db = Database::open(db_config)?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join(crate::config::CONFIG_FILE_NAME);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}
