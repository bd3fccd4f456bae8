// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the btrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] bt_core::Error),

    #[error("no collection file specified\n  hint: pass --file or set 'file' in the config")]
    NoInputFile,

    #[error("invalid timestamp: {reason}")]
    InvalidTimestamp { reason: String },

    #[error("invalid utc offset '{0}'\n  hint: use +HH:MM or -HH:MM, e.g. +02:00")]
    InvalidUtcOffset(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for btrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
