// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::help;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  bt add --state open --comment \"Crash on save\"   Record a bug
  bt find --state open --range day                 Open bugs from today
  bt find --state closed --range month -o json     Closed bugs older than a week
  bt parse '{\"state\":\"open\",\"timestamp\":0,\"comment\":\"x\"}'";

#[derive(Parser, Debug)]
#[command(name = "bt")]
#[command(version)]
#[command(about = "Filter bug reports by state and how recently they were filed")]
#[command(after_help = QUICKSTART_HELP)]
#[command(styles = help::styles())]
pub struct Cli {
    /// Config file (overrides BT_CONFIG and the default location)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find bugs matching a state and time range
    Find {
        /// Bug state: open or closed (required)
        #[arg(long, short)]
        state: Option<String>,

        /// Time range: day, week or month
        #[arg(long, short)]
        range: Option<String>,

        #[command(flatten)]
        source: SourceArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Parse a single bug from JSON and print it normalized
    Parse {
        /// JSON object to parse (reads stdin when omitted)
        json: Option<String>,
    },

    /// Print the time range an epoch timestamp falls into
    Classify {
        /// Unix epoch seconds
        #[arg(allow_hyphen_values = true)]
        timestamp: i64,

        /// Reference time as Unix epoch seconds (defaults to BT_NOW or the system clock)
        #[arg(long, allow_hyphen_values = true)]
        now: Option<i64>,
    },

    /// Append a bug to the collection file
    Add {
        /// Bug state: open or closed
        #[arg(long, short)]
        state: String,

        /// Free-text comment
        #[arg(long, short)]
        comment: String,

        /// Unix epoch seconds (defaults to now)
        #[arg(long, short, allow_hyphen_values = true)]
        timestamp: Option<i64>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the collection lives and which instant counts as now.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSONL collection file (defaults to `file` in the config)
    #[arg(long, short, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Reference time as Unix epoch seconds (defaults to BT_NOW or the system clock)
    #[arg(long, allow_hyphen_values = true)]
    pub now: Option<i64>,
}
