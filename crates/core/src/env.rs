// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use crate::config::ConfigError;
use std::path::PathBuf;

/// Resolve config file: TOAST_CONFIG > XDG_CONFIG_HOME/toast > platform config dir
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var("TOAST_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("toast/config.toml"));
    }
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("toast/config.toml"))
}

/// Template identifier override
pub fn template() -> Option<String> {
    std::env::var("TOAST_TEMPLATE").ok().filter(|s| !s.is_empty())
}

/// Expiry override in seconds; set but non-numeric is an error
pub fn expiry_secs() -> Result<Option<f64>, ConfigError> {
    match std::env::var("TOAST_EXPIRY_SECS") {
        Ok(s) => match s.trim().parse::<f64>() {
            Ok(secs) => Ok(Some(secs)),
            Err(_) => Err(ConfigError::InvalidExpiry { value: s }),
        },
        Err(_) => Ok(None),
    }
}

/// Sweep cadence override in milliseconds
pub fn sweep_interval_ms() -> Result<Option<u64>, ConfigError> {
    match std::env::var("TOAST_SWEEP_MS") {
        Ok(s) => match s.trim().parse::<u64>() {
            Ok(ms) => Ok(Some(ms)),
            Err(_) => Err(ConfigError::InvalidSweepInterval { value: s }),
        },
        Err(_) => Ok(None),
    }
}
