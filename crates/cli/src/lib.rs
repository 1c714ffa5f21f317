// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path Guard
//!
//! A PreToolUse hook that inspects a proposed file modification, checks the
//! target path against built-in sensitive path patterns, and answers with
//! allow, ask, or block.
//!
//! ```
//! use path_guard::hooks::ToolRequest;
//! use path_guard::permission::{Decision, PathGuard};
//!
//! let request = ToolRequest::from_json(r#"{"tool_input":{"file_path":"/repo/.env"}}"#).unwrap();
//! let decision = PathGuard::default().evaluate(&request);
//! assert!(matches!(decision, Decision::Block { pattern: ".env", .. }));
//! ```

pub mod cli;
pub mod error;
pub mod hooks;
pub mod output;
pub mod output_diagnostic;
pub mod permission;
pub mod runtime;

pub use error::{exit_codes, GuardError};
pub use permission::{Decision, PathGuard};
pub use runtime::HookRuntime;
