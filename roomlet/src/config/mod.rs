//! Configuration system for roomlet.
//!
//! Configuration is merged from three sources with the following
//! precedence (highest to lowest):
//!
//! 1. Environment variables (ROOMLET_*)
//! 2. `roomlet.yaml` in the data directory
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use roomlet::config::ConfigLoader;
//!
//! let config = ConfigLoader::load(Path::new("/var/lib/roomlet")).unwrap();
//! assert!(config.ttl_days > 0);
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::{Config, ResolvedConfig};
