// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use bt_core::{classify_in, TimeRange};
use chrono::{DateTime, FixedOffset, Utc};

use crate::config::Config;
use crate::error::Result;

use super::{from_epoch, resolve_now};

pub fn run(config: &Config, timestamp: i64, now: Option<i64>) -> Result<()> {
    let timestamp = from_epoch(timestamp)?;
    let now = resolve_now(now)?;
    let range = run_impl(timestamp, now, &config.offset()?, &mut std::io::stdout().lock())?;
    tracing::debug!("classified {} as {}", timestamp, range);
    Ok(())
}

/// Internal implementation that accepts the writer for testing.
pub(crate) fn run_impl(
    timestamp: DateTime<Utc>,
    now: DateTime<Utc>,
    offset: &FixedOffset,
    out: &mut impl Write,
) -> Result<TimeRange> {
    let range = classify_in(timestamp, now, offset);
    writeln!(out, "{}", range)?;
    Ok(range)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
