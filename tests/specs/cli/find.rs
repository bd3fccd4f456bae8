// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Find command tests.
//!
//! Covers the three bucket scenarios end to end, query validation errors,
//! and the JSON output shape.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

// =============================================================================
// Bucket scenarios
// =============================================================================

#[test]
fn open_past_day_finds_only_todays_bug() {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    bt(&temp)
        .args(["find", "--state", "open", "--range", "day", "--now"])
        .arg(NOW.to_string())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout("open   2024-03-10 12:00 Bug 1\n");
}

#[test]
fn closed_past_month_finds_old_bug() {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    bt(&temp)
        .args(["find", "-s", "closed", "-r", "month", "--now"])
        .arg(NOW.to_string())
        .arg("-f")
        .arg(&file)
        .assert()
        .success()
        .stdout("closed 2024-02-25 12:00 Bug 2\n");
}

#[test]
fn closed_past_week_finds_nothing() {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    bt(&temp)
        .args(["find", "--state", "closed", "--range", "week", "--now"])
        .arg(NOW.to_string())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn open_past_week_finds_yesterdays_bug() {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    bt(&temp)
        .args(["find", "--state", "open", "--range", "past-week", "--now"])
        .arg(NOW.to_string())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout("open   2024-03-09 10:00 Bug 2\n");
}

#[test]
fn range_defaults_to_past_day() {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    bt(&temp)
        .args(["find", "--state", "open", "--now"])
        .arg(NOW.to_string())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bug 1"))
        .stdout(predicate::str::contains("Bug 2").not());
}

#[test]
fn now_can_come_from_environment() {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    bt(&temp)
        .env("BT_NOW", NOW.to_string())
        .args(["find", "--state", "open", "--range", "day", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout("open   2024-03-10 12:00 Bug 1\n");
}

#[test]
fn results_keep_collection_order() {
    let temp = TempDir::new().unwrap();
    let file = write_collection(
        temp.path(),
        &[
            bug_line("open", NOW - 20 * DAY, "third oldest first"),
            bug_line("open", NOW - 30 * DAY, "oldest second"),
            bug_line("open", NOW - 10 * DAY, "newest last"),
        ],
    );

    let output = bt(&temp)
        .args(["find", "--state", "open", "--range", "month", "--now"])
        .arg(NOW.to_string())
        .arg("--file")
        .arg(&file)
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let comments: Vec<&str> = stdout.lines().map(|l| &l[24..]).collect();
    similar_asserts::assert_eq!(
        comments,
        vec!["third oldest first", "oldest second", "newest last"]
    );
}

#[test]
fn missing_collection_file_is_empty() {
    let temp = TempDir::new().unwrap();

    bt(&temp)
        .args(["find", "--state", "open", "--now"])
        .arg(NOW.to_string())
        .arg("--file")
        .arg(temp.path().join("absent.jsonl"))
        .assert()
        .success()
        .stdout("");
}

// =============================================================================
// Query validation
// =============================================================================

#[test]
fn missing_state_is_invalid_query() {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    bt(&temp)
        .args(["find", "--range", "day", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid query"))
        .stderr(predicate::str::contains("state filter is required"));
}

#[test]
fn missing_state_is_reported_before_missing_file() {
    let temp = TempDir::new().unwrap();

    bt(&temp)
        .args(["find", "--range", "day"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid query"))
        .stderr(predicate::str::contains("no collection file").not());
}

#[test]
fn missing_state_is_reported_before_bad_file() {
    let temp = TempDir::new().unwrap();
    let file = write_collection(temp.path(), &["not json".to_string()]);

    bt(&temp)
        .args(["find", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid query"))
        .stderr(predicate::str::contains("malformed input").not());
}

#[parameterized(
    unknown_state = { "--state", "pending" },
    unknown_range = { "--range", "year" },
)]
fn unknown_filter_value_is_invalid_query(flag: &str, value: &str) {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    let mut cmd = bt(&temp);
    cmd.arg("find").args([flag, value]);
    if flag != "--state" {
        cmd.args(["--state", "open"]);
    }
    cmd.arg("--file")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid query"));
}

#[test]
fn no_file_anywhere_is_reported() {
    let temp = TempDir::new().unwrap();

    bt(&temp)
        .args(["find", "--state", "open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no collection file specified"));
}

#[test]
fn bad_line_reports_line_number() {
    let temp = TempDir::new().unwrap();
    let file = write_collection(
        temp.path(),
        &[
            bug_line("open", NOW, "fine"),
            r#"{"state": "open", "comment": "no time"}"#.to_string(),
        ],
    );

    bt(&temp)
        .args(["find", "--state", "open", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("timestamp"));
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn json_output_shape() {
    let temp = TempDir::new().unwrap();
    let file = scenario_collection(temp.path());

    let output = bt(&temp)
        .args(["find", "--state", "open", "--range", "day", "-o", "json", "--now"])
        .arg(NOW.to_string())
        .arg("--file")
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["state"], "open");
    assert_eq!(json["range"], "past-day");
    assert_eq!(json["now"], NOW);
    assert_eq!(json["count"], 1);
    assert_eq!(json["bugs"][0]["comment"], "Bug 1");
    assert_eq!(json["bugs"][0]["timestamp"], NOW);
}
