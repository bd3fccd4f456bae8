// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bt-core: Shared library for the bt bug filter
//!
//! This crate provides the bug entity and its JSON parser, the relative time
//! classifier, and the state/time query engine used by the `bt` CLI.

pub mod bug;
pub mod clock;
pub mod error;
pub mod jsonl;
pub mod query;
pub mod range;

pub use bug::{Bug, State};
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use query::{find_bugs, find_bugs_in, BugTracker, Query};
pub use range::{classify, classify_in, day_difference, TimeRange};
