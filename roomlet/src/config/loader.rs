//! Configuration file loading.
//!
//! Loads `roomlet.yaml` from the data directory, applies environment
//! overrides, and resolves defaults.

use std::fs;
use std::path::Path;

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::{Config, ResolvedConfig};
use crate::error::{Error, Result};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "roomlet.yaml";

/// Loads configuration from the data directory and the environment.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use roomlet::config::ConfigLoader;
///
/// let resolved = ConfigLoader::load(Path::new("/var/lib/roomlet")).unwrap();
/// println!("TTL: {} days", resolved.ttl_days);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the effective configuration for a data directory.
    ///
    /// Precedence, highest first: ROOMLET_* environment variables, then
    /// `roomlet.yaml` in the data directory, then built-in defaults. A
    /// missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or an environment variable holds an invalid value.
    pub fn load(data_dir: &Path) -> Result<ResolvedConfig> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let mut config = if config_path.exists() {
            Self::load_file(&config_path)?
        } else {
            Config::default()
        };

        EnvironmentConfig::apply_overrides(&mut config)?;
        Ok(config.resolve())
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("invalid YAML: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file_is_error() {
        assert!(ConfigLoader::load_file(Path::new("/nonexistent/roomlet.yaml")).is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        fs::write(&path, "ttl_days: [not a number").unwrap();
        assert!(ConfigLoader::load_file(&path).is_err());
    }

    #[test]
    #[serial]
    fn test_missing_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = ConfigLoader::load(temp_dir.path()).unwrap();
        assert_eq!(resolved.ttl_days, 7);
        assert_eq!(resolved.queue_multiplier, 5);
    }

    #[test]
    #[serial]
    fn test_file_values_applied() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "ttl_days: 3\nqueue_multiplier: 2\n",
        )
        .unwrap();
        let resolved = ConfigLoader::load(temp_dir.path()).unwrap();
        assert_eq!(resolved.ttl_days, 3);
        assert_eq!(resolved.queue_multiplier, 2);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "ttl_days: 3\n").unwrap();

        std::env::set_var("ROOMLET_TTL_DAYS", "21");
        let resolved = ConfigLoader::load(temp_dir.path()).unwrap();
        std::env::remove_var("ROOMLET_TTL_DAYS");

        assert_eq!(resolved.ttl_days, 21);
    }
}
