// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) bug collection files.
//!
//! Each bug is stored as a single JSON line in its wire format. Appends are
//! fsynced for durability.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::bug::Bug;
use crate::error::{Error, Result};

/// Appends a bug to a JSONL file with fsync for durability.
pub fn append(path: &Path, bug: &Bug) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "{}", bug.to_json()?)?;
    file.sync_all()?;

    Ok(())
}

/// Reads all bugs from a JSONL file, in file order.
///
/// Skips empty lines and returns an empty vec if the file doesn't exist.
/// The first unparseable line fails the whole read.
pub fn read_all(path: &Path) -> Result<Vec<Bug>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut bugs = Vec::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let bug = Bug::from_json_slice(&line).map_err(|e| Error::InvalidLine {
            line: index + 1,
            source: Box::new(e),
        })?;
        bugs.push(bug);
    }

    tracing::debug!("read {} bugs from {}", bugs.len(), path.display());
    Ok(bugs)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
