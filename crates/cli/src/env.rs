// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    /// Path to the config file, overriding the default location.
    pub const BT_CONFIG: &str = "BT_CONFIG";

    /// Log filter in tracing `EnvFilter` syntax.
    pub const BT_LOG: &str = "BT_LOG";

    /// Reference "now" as Unix epoch seconds.
    pub const BT_NOW: &str = "BT_NOW";
}

/// Returns the value of `BT_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::BT_CONFIG).ok().map(PathBuf::from)
}

/// Returns the raw value of `BT_NOW` if set.
pub fn now() -> Option<String> {
    std::env::var(vars::BT_NOW).ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
