// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use btrs::Cli;
use clap::Parser;

fn main() {
    btrs::logging::init();
    let cli = Cli::parse();
    if let Err(e) = btrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
