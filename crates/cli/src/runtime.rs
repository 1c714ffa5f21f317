// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-shot hook execution over injectable streams.

use crate::error::GuardError;
use crate::hooks::ToolRequest;
use crate::output::write_decision;
use crate::permission::{Decision, PathGuard};
use std::io::{Read, Write};

/// Runs one hook invocation: read request, decide, write response.
#[derive(Clone, Copy, Debug, Default)]
pub struct HookRuntime {
    guard: PathGuard,
}

impl HookRuntime {
    pub fn new(guard: PathGuard) -> Self {
        Self { guard }
    }

    /// Parse raw input and evaluate it without producing output.
    pub fn decide(&self, raw: &str) -> Result<Decision, GuardError> {
        let request = ToolRequest::from_json(raw)?;
        Ok(self.guard.evaluate(&request))
    }

    /// Read the whole request from `input`, write the decision, and return
    /// the exit code. Errors are returned untouched for the caller to report.
    pub fn run<R: Read, O: Write, E: Write>(
        &self,
        mut input: R,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<i32, GuardError> {
        let mut raw = String::new();
        input.read_to_string(&mut raw)?;
        let decision = self.decide(&raw)?;
        write_decision(&decision, stdout, stderr)
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
