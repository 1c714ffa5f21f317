// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path guard decision logic.

use super::pattern::{PatternList, ALWAYS_BLOCK, REQUIRE_CONFIRMATION};
use crate::error::exit_codes;
use crate::hooks::{PermissionDecision, ToolRequest};

/// Outcome of guarding a single modification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Modification proceeds without interaction
    Allow,
    /// User must confirm the modification
    Ask { path: String, pattern: &'static str },
    /// Modification is refused outright
    Block { path: String, pattern: &'static str },
}

impl Decision {
    /// Wire-format permission decision.
    pub fn permission_decision(&self) -> PermissionDecision {
        match self {
            Decision::Allow => PermissionDecision::Allow,
            Decision::Ask { .. } => PermissionDecision::Ask,
            Decision::Block { .. } => PermissionDecision::Deny,
        }
    }

    /// Process exit code for this decision. Blocking is not an error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Decision::Block { .. } => exit_codes::BLOCKED,
            Decision::Allow | Decision::Ask { .. } => exit_codes::SUCCESS,
        }
    }
}

/// Reason text sent back with an `ask` decision.
pub fn ask_message(path: &str, pattern: &str) -> String {
    format!(
        "\u{26a0}\u{fe0f}  Modifying '{}' requires confirmation. This file matches sensitive pattern: '{}'",
        path, pattern
    )
}

/// Message written to stderr when a modification is blocked.
pub fn block_message(path: &str, pattern: &str) -> String {
    format!(
        "\u{1f6d1} BLOCKED: Modifications to '{}' are never allowed. Matched pattern: '{}'",
        path, pattern
    )
}

/// Decides whether a file modification may proceed.
///
/// Priority order (highest to lowest):
/// 1. No target path: allow
/// 2. Always-block patterns: block
/// 3. Require-confirmation patterns: ask
/// 4. Anything else: allow
///
/// Within a list the first declared pattern that matches wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathGuard {
    always_block: PatternList,
    require_confirmation: PatternList,
}

impl Default for PathGuard {
    fn default() -> Self {
        Self::new(ALWAYS_BLOCK, REQUIRE_CONFIRMATION)
    }
}

impl PathGuard {
    /// Create a guard from explicit pattern lists.
    pub fn new(always_block: PatternList, require_confirmation: PatternList) -> Self {
        Self {
            always_block,
            require_confirmation,
        }
    }

    /// Evaluate a hook request.
    pub fn evaluate(&self, request: &ToolRequest) -> Decision {
        self.evaluate_path(request.target_path())
    }

    /// Evaluate a candidate path. Missing or empty paths are allowed.
    pub fn evaluate_path(&self, path: Option<&str>) -> Decision {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return Decision::Allow;
        };

        if let Some(pattern) = self.always_block.first_match(path) {
            return Decision::Block {
                path: path.to_string(),
                pattern,
            };
        }

        if let Some(pattern) = self.require_confirmation.first_match(path) {
            return Decision::Ask {
                path: path.to_string(),
                pattern,
            };
        }

        Decision::Allow
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
