// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{Read, Write};

use bt_core::Bug;

use crate::error::Result;

pub fn run(json: Option<String>) -> Result<()> {
    let bug = read_bug(json.as_deref(), std::io::stdin().lock())?;
    run_impl(&bug, &mut std::io::stdout().lock())
}

/// Parses the argument if given, otherwise everything readable from `input`.
pub(crate) fn read_bug(json: Option<&str>, mut input: impl Read) -> Result<Bug> {
    let bug = match json {
        Some(text) => Bug::from_json(text)?,
        None => {
            let mut bytes = Vec::new();
            input.read_to_end(&mut bytes)?;
            Bug::from_json_slice(&bytes)?
        }
    };
    Ok(bug)
}

/// Internal implementation that accepts the writer for testing.
pub(crate) fn run_impl(bug: &Bug, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", bug.to_json()?)?;
    Ok(())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
