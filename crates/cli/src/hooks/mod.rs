// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PreToolUse hook wire protocol: the request read from stdin and the
//! permission response written to stdout.

pub mod protocol;

pub use protocol::{HookEvent, HookOutput, HookSpecificOutput, PermissionDecision, ToolRequest};
