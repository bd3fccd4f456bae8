// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so they never mix with command output. The filter comes
//! from `BT_LOG` (tracing `EnvFilter` syntax) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

use crate::env::vars;

const DEFAULT_FILTER: &str = "warn";

/// Builds the log filter from `BT_LOG`, falling back to the default level.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(vars::BT_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
