// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sensitive path pattern lists.
//!
//! Patterns are plain substrings, not globs or regexes. `.pem` matches
//! `/certs/site.pem` and equally `/tmp/superlative.pem.bak`; matching is
//! case-sensitive.

/// An ordered, immutable list of path fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternList {
    pub(crate) patterns: &'static [&'static str],
}

impl PatternList {
    pub const fn new(patterns: &'static [&'static str]) -> Self {
        Self { patterns }
    }

    /// Return the first pattern contained in `path`, scanning in declaration order.
    pub fn first_match(&self, path: &str) -> Option<&'static str> {
        self.patterns.iter().copied().find(|pattern| path.contains(pattern))
    }
}

/// Paths that may never be modified.
pub const ALWAYS_BLOCK: PatternList = PatternList::new(&[
    ".env",
    ".env.local",
    ".env.production",
    ".pem",
    ".key",
    "id_rsa",
    "id_ed25519",
    "secrets.yml",
    "secrets.yaml",
    "credentials.json",
    "service-account.json",
    ".git/config",
    ".ssh/",
]);

/// Paths whose modification needs the user's confirmation.
pub const REQUIRE_CONFIRMATION: PatternList = PatternList::new(&[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Dockerfile",
    "docker-compose.yml",
    "docker-compose.yaml",
    ".github/",
    ".gitlab-ci.yml",
    "Makefile",
    "tsconfig.json",
    "pyproject.toml",
    "Cargo.toml",
    ".claude/",
]);

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
