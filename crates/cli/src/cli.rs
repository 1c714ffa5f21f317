// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.
//!
//! The hook takes no behavioral flags; the request arrives on stdin.

use clap::Parser;

/// PreToolUse hook that blocks or gates edits to sensitive files
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "path-guard",
    version,
    about = "PreToolUse hook that blocks or gates edits to sensitive files",
    long_about = "Reads a hook request as JSON on stdin and checks tool_input.file_path \
                  (or tool_input.path) against built-in sensitive path patterns.\n\n\
                  Exit codes: 0 allow or ask (ask prints a JSON response on stdout), \
                  2 blocked (message on stderr), 1 invalid input or other failure."
)]
pub struct Cli {}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
