// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filtering bugs by state and time bucket.
//!
//! [`find_bugs`] is the pure form: it takes "now" explicitly and never fails.
//! [`Query`] carries an optional state for callers that assemble the filter
//! from user input, and rejects a missing state with
//! [`Error::InvalidQuery`]. [`BugTracker`] owns a collection together with a
//! clock and answers queries against it.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

use crate::bug::{Bug, State};
use crate::clock::{ClockSource, SystemClock};
use crate::error::{Error, Result};
use crate::range::{classify_in, TimeRange};

/// Returns the bugs in `state` whose timestamp falls in `range` relative to
/// `now`, using UTC day boundaries. Source order is preserved.
pub fn find_bugs<'a>(
    bugs: &'a [Bug],
    state: State,
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<&'a Bug> {
    find_bugs_in(bugs, state, range, now, &Utc)
}

/// Like [`find_bugs`], with day boundaries taken in `tz`.
pub fn find_bugs_in<'a, Tz: TimeZone>(
    bugs: &'a [Bug],
    state: State,
    range: TimeRange,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<&'a Bug> {
    bugs.iter()
        .filter(|bug| bug.state() == state && classify_in(bug.timestamp(), now, tz) == range)
        .collect()
}

/// A state and time range filter assembled from caller input.
///
/// There is no "any state" query: running a query without a state is an
/// error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Query {
    state: Option<State>,
    range: TimeRange,
}

impl Query {
    pub fn new(state: Option<State>, range: TimeRange) -> Self {
        Query { state, range }
    }

    /// Builds a query from textual state and range names.
    ///
    /// A missing range defaults to the past day. A missing state is accepted
    /// here and rejected by [`Query::require_state`].
    pub fn parse(state: Option<&str>, range: Option<&str>) -> Result<Self> {
        let state = state.map(str::parse::<State>).transpose()?;
        let range = range.map(str::parse::<TimeRange>).transpose()?.unwrap_or_default();
        Ok(Query { state, range })
    }

    pub fn state(&self) -> Option<State> {
        self.state
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Returns the state filter, or `InvalidQuery` when none was given.
    pub fn require_state(&self) -> Result<State> {
        self.state.ok_or_else(|| {
            Error::InvalidQuery(
                "a state filter is required\n  hint: pass a state such as open or closed".into(),
            )
        })
    }

    /// Runs the query against `bugs`.
    pub fn run<'a, Tz: TimeZone>(
        &self,
        bugs: &'a [Bug],
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Result<Vec<&'a Bug>> {
        let state = self.require_state()?;
        let found = find_bugs_in(bugs, state, self.range, now, tz);
        tracing::debug!(
            "query state={} range={} matched {}/{}",
            state,
            self.range,
            found.len(),
            bugs.len()
        );
        Ok(found)
    }
}

/// An ordered collection of bugs with the clock used to query it.
#[derive(Debug, Clone)]
pub struct BugTracker<C: ClockSource = SystemClock> {
    bugs: Vec<Bug>,
    clock: C,
    offset: FixedOffset,
}

impl BugTracker<SystemClock> {
    /// Creates a tracker over `bugs` using the system clock and UTC days.
    pub fn new(bugs: Vec<Bug>) -> Self {
        Self::with_clock(bugs, SystemClock)
    }
}

impl<C: ClockSource> BugTracker<C> {
    /// Creates a tracker with a custom clock source.
    pub fn with_clock(bugs: Vec<Bug>, clock: C) -> Self {
        BugTracker {
            bugs,
            clock,
            offset: Utc.fix(),
        }
    }

    /// Uses `offset` instead of UTC for calendar day boundaries.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    /// The calendar offset used for day boundaries.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The clock's current time.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn len(&self) -> usize {
        self.bugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
    }

    /// Appends a bug to the end of the collection.
    pub fn push(&mut self, bug: Bug) {
        self.bugs.push(bug);
    }

    /// Returns the bugs in `state` within `range` of the clock's current time.
    pub fn find_bugs(&self, state: State, range: TimeRange) -> Vec<&Bug> {
        find_bugs_in(&self.bugs, state, range, self.clock.now(), &self.offset)
    }

    /// Runs `query` against the collection at the clock's current time.
    pub fn query(&self, query: &Query) -> Result<Vec<&Bug>> {
        query.run(&self.bugs, self.clock.now(), &self.offset)
    }

    /// Buckets a single instant against the clock's current time.
    pub fn classify(&self, timestamp: DateTime<Utc>) -> TimeRange {
        classify_in(timestamp, self.clock.now(), &self.offset)
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
