// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for bt-core operations.

use thiserror::Error;

/// All possible errors that can occur in bt-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed input: {0}\n  hint: expected a single JSON object such as {{\"state\": \"open\", \"timestamp\": 1493393946, \"comment\": \"...\"}}")]
    MalformedInput(String),

    #[error("missing or invalid field '{field}': {reason}")]
    MissingOrInvalidField { field: &'static str, reason: String },

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn missing(field: &'static str) -> Self {
        Error::MissingOrInvalidField {
            field,
            reason: "missing".to_string(),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::MissingOrInvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for bt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
