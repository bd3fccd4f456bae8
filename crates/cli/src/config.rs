// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration is stored in TOML and includes:
//! - `file`: the default JSONL collection used when `--file` is not given
//! - `utc_offset`: the fixed calendar (`+HH:MM`) whose midnights separate days
//!
//! The file is looked up in order: `--config`, `BT_CONFIG`, then
//! `<config dir>/bugtrack/config.toml`. A missing default file means defaults.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "bugtrack";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_UTC_OFFSET: &str = "+00:00";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default collection file (relative paths resolve against the working directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Fixed UTC offset for calendar day boundaries.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

fn default_utc_offset() -> String {
    DEFAULT_UTC_OFFSET.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: None,
            utc_offset: default_utc_offset(),
        }
    }
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        // Surface a bad offset at load time rather than on first query
        config.offset()?;
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path (flag or `BT_CONFIG`) must exist. The default location
    /// is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Ok(Self::resolve_with_path(explicit)?.0)
    }

    /// Like [`Config::resolve`], also returning the file it was read from
    /// (`None` when falling back to defaults).
    pub fn resolve_with_path(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => env::config_path(),
        };
        if let Some(path) = path {
            return Ok((Self::load(&path)?, Some(path)));
        }
        match default_config_path() {
            Some(path) if path.is_file() => Ok((Self::load(&path)?, Some(path))),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok((Config::default(), None))
            }
        }
    }

    /// Returns the configured calendar offset.
    pub fn offset(&self) -> Result<FixedOffset> {
        parse_utc_offset(&self.utc_offset)
    }

    /// Picks the collection file: the explicit one, else the configured one.
    pub fn collection_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| self.file.clone())
            .ok_or(Error::NoInputFile)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }
}

/// Returns `<config dir>/bugtrack/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Parses `+HH:MM`, `-HH:MM`, `+HHMM`, `Z` or `UTC` into a fixed offset.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let invalid = || Error::InvalidUtcOffset(s.to_string());

    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = if let Some(rest) = trimmed.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some(parts) => parts,
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => return Err(invalid()),
    };
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return Err(invalid());
    }

    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
