// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store configuration.
//!
//! A `StoreConfig` only exists in a validated state: the builders check
//! their input and deserialization goes through [`RawConfig`].

use crate::env;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// How long timed notifications stay up when nothing overrides it
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(5);

/// Cadence of expiration sweeps
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_millis(200);

/// Longest accepted expiry (one year)
pub const MAX_EXPIRY: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Errors raised while building a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no template given")]
    MissingTemplate,
    #[error("invalid expiry seconds: {value}")]
    InvalidExpiry { value: String },
    #[error("invalid sweep interval: {value}")]
    InvalidSweepInterval { value: String },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// On-disk / env shape before validation
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    template: String,
    #[serde(default)]
    expiry_secs: Option<f64>,
    #[serde(default)]
    sweep_interval_ms: Option<u64>,
}

impl RawConfig {
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(template) = env::template() {
            self.template = template;
        }
        if let Some(secs) = env::expiry_secs()? {
            self.expiry_secs = Some(secs);
        }
        if let Some(ms) = env::sweep_interval_ms()? {
            self.sweep_interval_ms = Some(ms);
        }
        Ok(())
    }
}

/// Construction-time settings for a notification store
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct StoreConfig {
    expiry: Duration,
    template: String,
    sweep_interval: Duration,
}

impl TryFrom<RawConfig> for StoreConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let mut config = StoreConfig::new(raw.template)?;
        if let Some(secs) = raw.expiry_secs {
            config = config.with_expiry_secs(secs)?;
        }
        if let Some(ms) = raw.sweep_interval_ms {
            config = config.with_sweep_interval(Duration::from_millis(ms))?;
        }
        Ok(config)
    }
}

impl StoreConfig {
    /// Config with default timings. The template identifier must be non-empty.
    pub fn new(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(ConfigError::MissingTemplate);
        }
        Ok(Self {
            expiry: DEFAULT_EXPIRY,
            template,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        })
    }

    /// Override the expiry for timed notifications. Fractions are allowed.
    pub fn with_expiry_secs(self, secs: f64) -> Result<Self, ConfigError> {
        let expiry = Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidExpiry {
            value: secs.to_string(),
        })?;
        self.with_expiry(expiry)
    }

    /// Override the expiry. Anything above [`MAX_EXPIRY`] is rejected so
    /// deadlines always fit in an `Instant` and in epoch milliseconds.
    pub fn with_expiry(mut self, expiry: Duration) -> Result<Self, ConfigError> {
        let representable = expiry <= MAX_EXPIRY
            && Instant::now().checked_add(expiry).is_some()
            && u64::try_from(expiry.as_millis()).is_ok();
        if !representable {
            return Err(ConfigError::InvalidExpiry {
                value: format!("{}s", expiry.as_secs_f64()),
            });
        }
        self.expiry = expiry;
        Ok(self)
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::InvalidSweepInterval {
                value: format!("{}ms", interval.as_millis()),
            });
        }
        self.sweep_interval = interval;
        Ok(self)
    }

    /// Parse from TOML text (`template`, `expiry_secs`, `sweep_interval_ms`).
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        StoreConfig::try_from(raw)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read(path)?;
        Self::from_toml(&text)
    }

    /// Resolve the config file, layer env overrides on top, then validate.
    ///
    /// A missing file is not an error as long as the environment supplies
    /// the template.
    pub fn discover() -> Result<Self, ConfigError> {
        let path = env::config_path()?;
        let mut raw = if path.exists() {
            tracing::debug!(path = %path.display(), "loading notification config");
            toml::from_str(&read(&path)?)?
        } else {
            RawConfig::default()
        };
        raw.apply_env()?;
        StoreConfig::try_from(raw)
    }

    /// Apply `TOAST_*` environment overrides to an existing config
    ///
    /// Settings without an override keep their exact current value.
    pub fn apply_env_overrides(self) -> Result<Self, ConfigError> {
        let mut config = match env::template() {
            Some(template) => Self {
                template: Self::new(template)?.template,
                ..self
            },
            None => self,
        };
        if let Some(secs) = env::expiry_secs()? {
            config = config.with_expiry_secs(secs)?;
        }
        if let Some(ms) = env::sweep_interval_ms()? {
            config = config.with_sweep_interval(Duration::from_millis(ms))?;
        }
        Ok(config)
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Identifier of the template the rendering layer should use
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
