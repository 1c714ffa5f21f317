// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error formatting.
//!
//! Hosts capture stderr and show it verbatim, so messages are plain text.
//! Decision messages never pass through here; only failures do.

use std::io::{self, Write};

/// Print an error message to stderr.
pub fn print_error(msg: impl std::fmt::Display) {
    write_error(&mut io::stderr(), msg);
}

/// Write an error message to a writer.
pub fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display) {
    let _ = writeln!(writer, "Hook error: {}", msg);
    let _ = writer.flush();
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
