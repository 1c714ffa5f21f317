// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decision output: nothing for allow, a JSON hook response on stdout for
//! ask, and a plain message on stderr for block.

use crate::error::GuardError;
use crate::hooks::HookOutput;
use crate::permission::{ask_message, block_message, Decision};
use std::io::Write;

/// Write a decision to the output streams and return its exit code.
pub fn write_decision<O: Write, E: Write>(
    decision: &Decision,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<i32, GuardError> {
    match decision {
        Decision::Allow => {}
        Decision::Ask { path, pattern } => {
            let reason = ask_message(path, pattern);
            let output = HookOutput::pre_tool_use(decision.permission_decision(), reason);
            writeln!(stdout, "{}", output.to_json()?)?;
        }
        Decision::Block { path, pattern } => {
            writeln!(stderr, "{}", block_message(path, pattern))?;
        }
    }

    stdout.flush()?;
    stderr.flush()?;
    Ok(decision.exit_code())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
