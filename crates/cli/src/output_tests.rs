// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::error::exit_codes;
use serde_json::Value;

fn write(decision: &Decision) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = write_decision(decision, &mut stdout, &mut stderr).unwrap();
    (
        code,
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}

#[test]
fn allow_writes_nothing() {
    let (code, stdout, stderr) = write(&Decision::Allow);
    assert_eq!(code, exit_codes::SUCCESS);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn ask_writes_hook_response_to_stdout() {
    let decision = Decision::Ask {
        path: "/repo/Cargo.toml".to_string(),
        pattern: "Cargo.toml",
    };
    let (code, stdout, stderr) = write(&decision);
    assert_eq!(code, exit_codes::SUCCESS);
    assert!(stderr.is_empty());
    assert!(stdout.ends_with('\n'));
    assert_eq!(stdout.lines().count(), 1);

    let json: Value = serde_json::from_str(&stdout).unwrap();
    let specific = &json["hookSpecificOutput"];
    assert_eq!(specific["hookEventName"], "PreToolUse");
    assert_eq!(specific["permissionDecision"], "ask");
    assert_eq!(
        specific["permissionDecisionReason"],
        ask_message("/repo/Cargo.toml", "Cargo.toml").as_str()
    );
}

#[test]
fn block_writes_message_to_stderr() {
    let decision = Decision::Block {
        path: "/repo/secrets.yml".to_string(),
        pattern: "secrets.yml",
    };
    let (code, stdout, stderr) = write(&decision);
    assert_eq!(code, exit_codes::BLOCKED);
    assert!(stdout.is_empty());
    assert_eq!(
        stderr,
        "🛑 BLOCKED: Modifications to '/repo/secrets.yml' are never allowed. Matched pattern: 'secrets.yml'\n"
    );
}

#[test]
fn write_failure_is_an_io_error() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let decision = Decision::Block {
        path: "/repo/.env".to_string(),
        pattern: ".env",
    };
    let err = write_decision(&decision, &mut Vec::<u8>::new(), &mut Broken).unwrap_err();
    assert!(matches!(err, GuardError::Io(_)));
}
