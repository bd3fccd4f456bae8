// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use bt_core::{BugTracker, ClockSource, Query};

use crate::cli::{OutputFormat, SourceArgs};
use crate::config::Config;
use crate::display::{format_bug_line, FindOutputJson};
use crate::error::Result;

use super::{open_tracker, resolve_now};

pub fn run(
    config: &Config,
    state: Option<String>,
    range: Option<String>,
    source: SourceArgs,
    output: OutputFormat,
) -> Result<()> {
    let query = Query::parse(state.as_deref(), range.as_deref())?;
    query.require_state()?;
    let now = resolve_now(source.now)?;
    let tracker = open_tracker(config, source.file, now)?;
    run_impl(&tracker, &query, output, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts the tracker and writer for testing.
pub(crate) fn run_impl<C: ClockSource>(
    tracker: &BugTracker<C>,
    query: &Query,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let state = query.require_state()?;
    let found = tracker.find_bugs(state, query.range());

    match output {
        OutputFormat::Text => {
            let offset = tracker.offset();
            for bug in &found {
                writeln!(out, "{}", format_bug_line(bug, &offset))?;
            }
        }
        OutputFormat::Json => {
            let json = FindOutputJson {
                state,
                range: query.range(),
                now: tracker.now(),
                count: found.len(),
                bugs: &found,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
