//! Configuration schema definitions.
//!
//! Defines the settings file structure for roomlet: reservation lifetime,
//! queue sizing, and database behavior.

use serde::{Deserialize, Serialize};

/// Default reservation lifetime in days.
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// Default queue multiplier: a house accepts up to
/// `max_occupants * multiplier` active reservations.
pub const DEFAULT_QUEUE_MULTIPLIER: u32 = 5;

/// Default maximum time to wait for the database lock, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Raw configuration as read from `roomlet.yaml`.
///
/// All fields are optional; unset fields fall back to the defaults when
/// resolved.
///
/// # Examples
///
/// ```
/// use roomlet::config::Config;
///
/// let config: Config = serde_yaml::from_str("ttl_days: 14\n").unwrap();
/// assert_eq!(config.ttl_days, Some(14));
/// assert_eq!(config.queue_multiplier, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Days until a pending reservation expires.
    pub ttl_days: Option<i64>,

    /// Queue cap multiplier over the house capacity.
    pub queue_multiplier: Option<u32>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

/// Configuration with every field resolved to an effective value.
///
/// Produced by [`Config::resolve`]; this is what the lifecycle operations
/// consume.
///
/// # Examples
///
/// ```
/// use roomlet::config::{Config, ResolvedConfig};
///
/// let resolved = Config::default().resolve();
/// assert_eq!(resolved.ttl_days, 7);
/// assert_eq!(resolved.queue_multiplier, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Days until a pending reservation expires.
    pub ttl_days: i64,
    /// Queue cap multiplier over the house capacity.
    pub queue_multiplier: u32,
    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: u64,
    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Config::default().resolve()
    }
}

impl Config {
    /// Resolve every unset field to its default.
    #[must_use]
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            ttl_days: self.ttl_days.unwrap_or(DEFAULT_TTL_DAYS),
            queue_multiplier: self.queue_multiplier.unwrap_or(DEFAULT_QUEUE_MULTIPLIER),
            maximum_lock_wait_seconds: self
                .maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
            disable_autoinit: self.disable_autoinit.unwrap_or(false),
        }
    }

    /// Overlay another config on top of this one. Fields set in `other`
    /// win.
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            ttl_days: other.ttl_days.or(self.ttl_days),
            queue_multiplier: other.queue_multiplier.or(self.queue_multiplier),
            maximum_lock_wait_seconds: other
                .maximum_lock_wait_seconds
                .or(self.maximum_lock_wait_seconds),
            disable_autoinit: other.disable_autoinit.or(self.disable_autoinit),
        }
    }
}
