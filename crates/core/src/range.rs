// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coarse relative time buckets.
//!
//! A timestamp is bucketed by the number of calendar days between the day it
//! falls on and the day "now" falls on:
//!
//! | day difference | bucket      |
//! |----------------|-------------|
//! | 0              | `PastDay`   |
//! | <= 7           | `PastWeek`  |
//! | otherwise      | `PastMonth` |
//!
//! Future timestamps have a negative difference and therefore land in
//! `PastWeek`. `PastMonth` has no upper bound.
//!
//! Day boundaries are midnight in a fixed calendar. [`classify`] uses UTC,
//! [`classify_in`] takes any [`TimeZone`] (usually a [`chrono::FixedOffset`]).

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest day difference still counted as the past week.
const WEEK_DAYS: i64 = 7;

/// A relative time bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeRange {
    /// Same calendar day as now.
    #[default]
    PastDay,
    /// One to seven calendar days ago (or in the future).
    PastWeek,
    /// More than seven calendar days ago.
    PastMonth,
}

impl TimeRange {
    /// Returns the string representation used in display and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::PastDay => "past-day",
            TimeRange::PastWeek => "past-week",
            TimeRange::PastMonth => "past-month",
        }
    }

    /// Maps a calendar day difference onto its bucket.
    pub fn from_day_difference(days: i64) -> Self {
        if days == 0 {
            TimeRange::PastDay
        } else if days <= WEEK_DAYS {
            TimeRange::PastWeek
        } else {
            TimeRange::PastMonth
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "day" | "past-day" => Ok(TimeRange::PastDay),
            "week" | "past-week" => Ok(TimeRange::PastWeek),
            "month" | "past-month" => Ok(TimeRange::PastMonth),
            _ => Err(Error::InvalidQuery(format!(
                "unknown time range '{s}'\n  hint: valid ranges are: day, week, month"
            ))),
        }
    }
}

/// Number of calendar days from the day of `timestamp` to the day of `now`,
/// with day boundaries taken in `tz`.
///
/// Positive when `timestamp` is on an earlier day than `now`.
pub fn day_difference<Tz: TimeZone>(timestamp: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> i64 {
    let then = timestamp.with_timezone(tz).date_naive();
    let today = now.with_timezone(tz).date_naive();
    today.signed_duration_since(then).num_days()
}

/// Buckets `timestamp` relative to `now` using UTC day boundaries.
pub fn classify(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> TimeRange {
    classify_in(timestamp, now, &Utc)
}

/// Buckets `timestamp` relative to `now` using day boundaries in `tz`.
pub fn classify_in<Tz: TimeZone>(timestamp: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> TimeRange {
    TimeRange::from_day_difference(day_difference(timestamp, now, tz))
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
