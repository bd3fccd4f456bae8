// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod classify;
pub mod config;
pub mod find;
pub mod parse;

use std::path::PathBuf;

use bt_core::{jsonl, BugTracker, FixedClock};
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::env::{self, vars};
use crate::error::{Error, Result};

/// Resolves the reference time: `--now`, then `BT_NOW`, then the system clock.
pub fn resolve_now(explicit: Option<i64>) -> Result<DateTime<Utc>> {
    resolve_now_from(explicit, env::now())
}

pub(crate) fn resolve_now_from(
    explicit: Option<i64>,
    env_value: Option<String>,
) -> Result<DateTime<Utc>> {
    if let Some(seconds) = explicit {
        return from_epoch(seconds);
    }
    if let Some(raw) = env_value {
        let seconds = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidTimestamp {
                reason: format!("{} must be epoch seconds, got '{}'", vars::BT_NOW, raw),
            })?;
        return from_epoch(seconds);
    }
    Ok(Utc::now())
}

/// Converts Unix epoch seconds to an instant.
pub(crate) fn from_epoch(seconds: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| Error::InvalidTimestamp {
        reason: format!("{seconds} is outside the supported range"),
    })
}

/// Loads the collection file into a tracker frozen at `now`.
pub fn open_tracker(
    config: &Config,
    file: Option<PathBuf>,
    now: DateTime<Utc>,
) -> Result<BugTracker<FixedClock>> {
    let path = config.collection_path(file)?;
    let bugs = jsonl::read_all(&path)?;
    tracing::debug!("loaded {} bugs from {}", bugs.len(), path.display());
    Ok(BugTracker::with_clock(bugs, FixedClock(now)).with_offset(config.offset()?))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
