use crate::error::ConfigError;
use std::time::Duration;

pub const MAX_WORKERS_ENV: &str = "ACTORPATH_MAX_WORKERS";
pub const LOOKUP_TIMEOUT_ENV: &str = "ACTORPATH_LOOKUP_TIMEOUT_MS";

/// Configuration for graph generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Upper bound on concurrently running lookups (at least 1)
    pub max_workers: usize,
    /// Abort a lookup that takes longer than this (requires a Tokio time driver)
    pub lookup_timeout: Option<Duration>,
}

impl GeneratorConfig {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
            lookup_timeout: None,
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    /// Reads `ACTORPATH_MAX_WORKERS` and `ACTORPATH_LOOKUP_TIMEOUT_MS`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(MAX_WORKERS_ENV) {
            let max_workers = parse_number(MAX_WORKERS_ENV, &value)?;
            if max_workers == 0 {
                return Err(ConfigError {
                    key: MAX_WORKERS_ENV,
                    value,
                    reason: "must be at least 1".to_string(),
                });
            }
            config.max_workers = max_workers as usize;
        }

        if let Some(value) = lookup(LOOKUP_TIMEOUT_ENV) {
            let millis = parse_number(LOOKUP_TIMEOUT_ENV, &value)?;
            config.lookup_timeout = Some(Duration::from_millis(millis));
        }

        Ok(config)
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_workers: 4,
            lookup_timeout: None,
        }
    }
}
