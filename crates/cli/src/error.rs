// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use thiserror::Error;

/// Exit codes understood by the hook host
pub mod exit_codes {
    /// Allowed, or confirmation requested
    pub const SUCCESS: i32 = 0;
    /// Input or runtime failure
    pub const ERROR: i32 = 1;
    /// Modification blocked
    pub const BLOCKED: i32 = 2;
}

/// Failures while handling a hook invocation.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Invalid JSON input - {0}")]
    Parse(#[source] serde_json::Error),

    #[error("expected a JSON object as input, got {0}")]
    NotAnObject(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}", .0.to_string().trim_end())]
    Usage(clap::Error),

    #[error("failed to encode hook output: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl GuardError {
    /// Every failure maps to the generic error code, never to `BLOCKED`.
    pub fn exit_code(&self) -> i32 {
        exit_codes::ERROR
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
