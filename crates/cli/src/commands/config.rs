// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;

pub fn run(explicit: Option<&Path>) -> Result<()> {
    let (config, path) = Config::resolve_with_path(explicit)?;
    run_impl(&config, path.as_deref(), &mut std::io::stdout().lock())
}

/// Internal implementation that accepts the writer for testing.
pub(crate) fn run_impl(config: &Config, path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match path {
        Some(path) => writeln!(out, "# {}", path.display())?,
        None => writeln!(out, "# defaults (no config file)")?,
    }
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
