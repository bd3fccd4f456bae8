// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! btrs - command-line front end for the bt bug filter.
//!
//! This crate wires the `bt` binary to [`bt_core`]: it resolves configuration,
//! loads JSONL bug collections, and prints query results.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap argument definitions
//! - [`Config`] - TOML configuration (default collection file, calendar offset)
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use btrs::{run, Cli};
//!
//! let cli = Cli::parse_from(["bt", "find", "--state", "open", "--file", "bugs.jsonl"]);
//! run(cli)?;
//! ```

mod cli;
mod commands;
mod display;
mod help;

pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, OutputFormat, SourceArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let explicit_config = cli.config.as_deref();
    match cli.command {
        Command::Find {
            state,
            range,
            source,
            output,
        } => {
            let config = Config::resolve(explicit_config)?;
            commands::find::run(&config, state, range, source, output)
        }
        Command::Parse { json } => commands::parse::run(json),
        Command::Classify { timestamp, now } => {
            let config = Config::resolve(explicit_config)?;
            commands::classify::run(&config, timestamp, now)
        }
        Command::Add {
            state,
            comment,
            timestamp,
            source,
        } => {
            let config = Config::resolve(explicit_config)?;
            commands::add::run(&config, &state, comment, timestamp, source)
        }
        Command::Config => commands::config::run(explicit_config),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "bt", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
