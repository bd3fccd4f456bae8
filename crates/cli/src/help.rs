// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output styling.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use anstyle::{Ansi256Color, Color, Style};
use clap::builder::styling::Styles;

/// ANSI 256-color codes for help sections.
pub mod codes {
    /// Section headers and usage
    pub const HEADER: u8 = 74;
    /// Commands and flags
    pub const LITERAL: u8 = 250;
    /// Placeholders and possible values
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    colorize_from(
        std::env::var("NO_COLOR").ok().as_deref(),
        std::env::var("COLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
    )
}

pub(crate) fn colorize_from(no_color: Option<&str>, color: Option<&str>, is_tty: bool) -> bool {
    if no_color == Some("1") {
        return false;
    }
    if color == Some("1") {
        return true;
    }
    is_tty
}

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }

    let header = fg(codes::HEADER);
    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
        .valid(fg(codes::CONTEXT))
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
