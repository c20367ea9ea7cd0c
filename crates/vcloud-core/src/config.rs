//! Configuration for node listing.
//!
//! Settings can be built in code, deserialized, or read from the environment. All routes go
//! through the same validation.

use crate::retry::{RetryPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

/// Environment variable holding the comma-separated node blacklist
pub const ENV_BLACKLIST_NODES: &str = "VCLOUD_BLACKLIST_NODES";
/// Environment variable holding the number of detail lookup attempts
pub const ENV_MAX_LOOKUP_ATTEMPTS: &str = "VCLOUD_MAX_LOOKUP_ATTEMPTS";
/// Environment variable holding the delay between detail lookup attempts
pub const ENV_LOOKUP_RETRY_DELAY_MS: &str = "VCLOUD_LOOKUP_RETRY_DELAY_MS";

/// Configuration for a node listing strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ListNodesConfig {
    /// Comma-separated vApp names that are never reported as nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklist_nodes: Option<String>,

    /// Detail lookup attempts per node, the first included
    #[validate(range(min = 1, max = 10))]
    #[serde(default = "default_max_lookup_attempts")]
    pub max_lookup_attempts: u32,

    /// Delay between detail lookup attempts in milliseconds
    #[validate(range(max = 60_000))]
    #[serde(default = "default_lookup_retry_delay_ms")]
    pub lookup_retry_delay_ms: u64,
}

const fn default_max_lookup_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

const fn default_lookup_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

impl ListNodesConfig {
    /// Create a configuration with defaults: no blacklist, 3 immediate attempts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blacklist_nodes: None,
            max_lookup_attempts: default_max_lookup_attempts(),
            lookup_retry_delay_ms: default_lookup_retry_delay_ms(),
        }
    }

    /// Load configuration from `VCLOUD_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or validation fails.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric value does not parse or validation fails.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();
        config.blacklist_nodes = lookup(ENV_BLACKLIST_NODES);

        if let Some(raw) = lookup(ENV_MAX_LOOKUP_ATTEMPTS) {
            config.max_lookup_attempts = parse_var(ENV_MAX_LOOKUP_ATTEMPTS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LOOKUP_RETRY_DELAY_MS) {
            config.lookup_retry_delay_ms = parse_var(ENV_LOOKUP_RETRY_DELAY_MS, &raw)?;
        }

        config.validated()
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] when a field is out of range.
    pub fn validated(self) -> Result<Self, Error> {
        self.validate()?;
        Ok(self)
    }

    /// Set the comma-separated blacklist.
    #[must_use]
    pub fn with_blacklist(mut self, names: impl Into<String>) -> Self {
        self.blacklist_nodes = Some(names.into());
        self
    }

    /// Set the number of detail lookup attempts.
    #[must_use]
    pub const fn with_max_lookup_attempts(mut self, attempts: u32) -> Self {
        self.max_lookup_attempts = attempts;
        self
    }

    /// Set the delay between detail lookup attempts.
    #[must_use]
    pub const fn with_lookup_retry_delay_ms(mut self, millis: u64) -> Self {
        self.lookup_retry_delay_ms = millis;
        self
    }

    /// The parsed blacklist.
    #[must_use]
    pub fn blacklist(&self) -> HashSet<String> {
        parse_name_list(self.blacklist_nodes.as_deref())
    }

    /// The retry policy for detail lookups.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new()
            .with_max_attempts(self.max_lookup_attempts)
            .with_delay(Duration::from_millis(self.lookup_retry_delay_ms))
    }
}

impl Default for ListNodesConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = raw.trim();
    value
        .parse()
        .map_err(|e| Error::ConfigError(format!("Invalid {key} `{raw}`: {e}")))
}

/// Split a comma-separated name list.
///
/// Absent or blank input yields an empty set. Entries are kept verbatim: `"a, b"` holds `"a"`
/// and `" b"`.
#[must_use]
pub fn parse_name_list(raw: Option<&str>) -> HashSet<String> {
    match raw {
        Some(list) if !list.trim().is_empty() => list.split(',').map(str::to_string).collect(),
        _ => HashSet::new(),
    }
}
