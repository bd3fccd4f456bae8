// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config tests: lookup order, the calendar offset, and bad files.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn config_without_file_shows_defaults() {
    let temp = TempDir::new().unwrap();

    bt(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# defaults (no config file)\n"))
        .stdout(predicate::str::contains("utc_offset = \"+00:00\""));
}

// dirs only honors XDG_CONFIG_HOME on Linux
#[test]
#[cfg(target_os = "linux")]
fn config_reads_default_location() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".config").join("bugtrack");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "utc_offset = \"-05:00\"\n").unwrap();

    bt(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("utc_offset = \"-05:00\""));
}

#[test]
fn config_flag_beats_environment() {
    let temp = TempDir::new().unwrap();
    let flagged = write_config(temp.path(), "utc_offset = \"+01:00\"\n");
    let from_env = temp.path().join("env.toml");
    std::fs::write(&from_env, "utc_offset = \"+09:00\"\n").unwrap();

    bt(&temp)
        .env("BT_CONFIG", &from_env)
        .arg("--config")
        .arg(&flagged)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("+01:00"));

    bt(&temp)
        .env("BT_CONFIG", &from_env)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("+09:00"));
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();

    bt(&temp)
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[parameterized(
    bad_offset = { "utc_offset = \"nope\"\n", "invalid utc offset" },
    out_of_range_offset = { "utc_offset = \"+24:00\"\n", "invalid utc offset" },
    bad_toml = { "utc_offset = \n", "config error" },
)]
fn bad_config_is_reported(content: &str, expected: &str) {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), content);

    bt(&temp)
        .arg("--config")
        .arg(&config)
        .args(["classify", "0", "--now", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(expected));
}

#[test]
fn utc_offset_moves_day_boundary() {
    let temp = TempDir::new().unwrap();
    // 13:00 UTC yesterday is 00:30 today at +11:30, where now is 23:30
    let file = write_collection(
        temp.path(),
        &[bug_line("open", NOW - 23 * HOUR, "late night")],
    );
    let config = write_config(temp.path(), "utc_offset = \"+11:30\"\n");

    bt(&temp)
        .args(["find", "-s", "open", "-r", "day", "--now"])
        .arg(NOW.to_string())
        .arg("-f")
        .arg(&file)
        .assert()
        .success()
        .stdout("");

    bt(&temp)
        .arg("--config")
        .arg(&config)
        .args(["find", "-s", "open", "-r", "day", "--now"])
        .arg(NOW.to_string())
        .arg("-f")
        .arg(&file)
        .assert()
        .success()
        .stdout("open   2024-03-10 00:30 late night\n");
}
