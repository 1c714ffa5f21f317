// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission decisions for file modification requests.
//!
//! - Built-in sensitive path pattern lists
//! - The path guard that turns a request into allow, ask, or block

pub mod check;
pub mod pattern;

pub use check::{ask_message, block_message, Decision, PathGuard};
pub use pattern::{PatternList, ALWAYS_BLOCK, REQUIRE_CONFIRMATION};
