//! Environment variable overrides for configuration.
//!
//! ROOMLET_* environment variables override values from the configuration
//! file.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use roomlet::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply ROOMLET_* overrides to a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any variable holds a value that does
    /// not parse (non-numeric days, unrecognized boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(days) = env::var("ROOMLET_TTL_DAYS") {
            let days: i64 = days.parse().map_err(|_| Error::Validation {
                field: "ROOMLET_TTL_DAYS".into(),
                message: "must be a positive integer".into(),
            })?;
            if days <= 0 {
                return Err(Error::Validation {
                    field: "ROOMLET_TTL_DAYS".into(),
                    message: "must be a positive integer".into(),
                });
            }
            config.ttl_days = Some(days);
        }

        if let Ok(mult) = env::var("ROOMLET_QUEUE_MULTIPLIER") {
            let mult: u32 = mult.parse().map_err(|_| Error::Validation {
                field: "ROOMLET_QUEUE_MULTIPLIER".into(),
                message: "must be a non-negative integer".into(),
            })?;
            config.queue_multiplier = Some(mult);
        }

        if let Ok(seconds) = env::var("ROOMLET_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.parse().map_err(|_| Error::Validation {
                    field: "ROOMLET_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "must be a positive integer".into(),
                })?);
        }

        if let Ok(val) = env::var("ROOMLET_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("ROOMLET_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    fn parse_bool(name: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: name.into(),
                message: format!("invalid boolean value: {value}"),
            }),
        }
    }
}
