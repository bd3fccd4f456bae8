// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bt_core::{Bug, State, TimeRange};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Timestamp layout used in text output.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// JSON output structure for the find command.
#[derive(Serialize)]
pub struct FindOutputJson<'a> {
    pub state: State,
    pub range: TimeRange,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub now: DateTime<Utc>,
    pub count: usize,
    pub bugs: &'a [&'a Bug],
}

/// Format a bug as a single listing line: state, local time, comment.
///
/// Newlines in the comment are flattened so each bug stays on one line.
pub fn format_bug_line(bug: &Bug, offset: &FixedOffset) -> String {
    let when = bug.timestamp().with_timezone(offset).format(TIME_FORMAT);
    let comment = bug.comment().replace(['\r', '\n'], " ");
    format!("{:<6} {} {}", bug.state().as_str(), when, comment)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
