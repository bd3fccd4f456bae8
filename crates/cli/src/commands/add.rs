// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use bt_core::{jsonl, Bug, State};
use chrono::{DateTime, FixedOffset, Utc};

use crate::cli::SourceArgs;
use crate::config::Config;
use crate::display::format_bug_line;
use crate::error::Result;

use super::{from_epoch, resolve_now};

pub fn run(
    config: &Config,
    state: &str,
    comment: String,
    timestamp: Option<i64>,
    source: SourceArgs,
) -> Result<()> {
    let state: State = state.parse()?;
    let now = resolve_now(source.now)?;
    let path = config.collection_path(source.file)?;
    run_impl(
        &path,
        state,
        comment,
        timestamp,
        now,
        &config.offset()?,
        &mut std::io::stdout().lock(),
    )
}

/// Internal implementation that accepts the path, time and writer for testing.
pub(crate) fn run_impl(
    path: &Path,
    state: State,
    comment: String,
    timestamp: Option<i64>,
    now: DateTime<Utc>,
    offset: &FixedOffset,
    out: &mut impl Write,
) -> Result<()> {
    let timestamp = match timestamp {
        Some(seconds) => from_epoch(seconds)?,
        None => now,
    };
    let bug = Bug::new(state, timestamp, comment);

    jsonl::append(path, &bug)?;
    tracing::debug!("appended bug to {}", path.display());

    writeln!(out, "Added {}", format_bug_line(&bug, offset))?;
    Ok(())
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
