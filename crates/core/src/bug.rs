// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The bug report entity and its JSON wire format.
//!
//! A bug is a flat JSON object:
//!
//! ```json
//! {"state": "open", "timestamp": 1493393946, "comment": "Bug via JSON"}
//! ```
//!
//! `timestamp` is whole seconds since the Unix epoch. Parsing is lenient about
//! `state`: only the exact string `"open"` yields [`State::Open`], every other
//! string value is read as [`State::Closed`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow state of a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Still needs attention.
    Open,
    /// Resolved or dismissed.
    Closed,
}

impl State {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
            State::Closed => "closed",
        }
    }

    /// Reads a state from its wire value.
    ///
    /// Exact, case-sensitive `"open"` is Open. Anything else is Closed.
    pub fn from_wire(value: &str) -> Self {
        if value == "open" {
            State::Open
        } else {
            State::Closed
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parsing for query input. Unknown names are rejected rather than
/// falling back to Closed the way the wire format does.
impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(State::Open),
            "closed" => Ok(State::Closed),
            _ => Err(Error::InvalidQuery(format!(
                "unknown state '{s}'\n  hint: valid states are: open, closed"
            ))),
        }
    }
}

/// An immutable bug report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bug {
    state: State,
    #[serde(with = "chrono::serde::ts_seconds")]
    timestamp: DateTime<Utc>,
    comment: String,
}

impl Bug {
    /// Creates a bug from its parts.
    pub fn new(state: State, timestamp: DateTime<Utc>, comment: impl Into<String>) -> Self {
        Bug {
            state,
            timestamp,
            comment: comment.into(),
        }
    }

    /// Parses a bug from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| Error::MalformedInput(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Parses a bug from raw bytes, which must be UTF-8 JSON.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::MalformedInput(format!("input is not valid UTF-8: {e}")))?;
        Self::from_json(text)
    }

    /// Builds a bug from an already decoded JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            Error::MalformedInput(format!("expected a JSON object, got {}", kind(value)))
        })?;

        let comment = field(object, "comment")?
            .as_str()
            .ok_or_else(|| Error::invalid("comment", "expected a string"))?;
        let state = field(object, "state")?
            .as_str()
            .ok_or_else(|| Error::invalid("state", "expected a string"))?;
        let seconds = field(object, "timestamp")?
            .as_i64()
            .ok_or_else(|| Error::invalid("timestamp", "expected an integer"))?;
        let timestamp = DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| {
            Error::invalid("timestamp", format!("{seconds} is outside the supported range"))
        })?;

        Ok(Bug {
            state: State::from_wire(state),
            timestamp,
            comment: comment.to_string(),
        })
    }

    /// Serializes the bug back to its single-line wire format.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl FromStr for Bug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Bug::from_json(s)
    }
}

fn field<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value> {
    object.get(name).ok_or_else(|| Error::missing(name))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "bug_tests.rs"]
mod tests;
