// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path Guard binary entry point.

use std::io;

use clap::Parser;

use path_guard::cli::Cli;
use path_guard::output_diagnostic::print_error;
use path_guard::{GuardError, HookRuntime};

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}

fn run() -> Result<i32, GuardError> {
    // Usage errors exit 1, not clap's default 2, which means "blocked" here.
    if let Err(e) = Cli::try_parse() {
        if !e.use_stderr() {
            e.exit();
        }
        return Err(GuardError::Usage(e));
    }

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    HookRuntime::default().run(stdin, &mut stdout, &mut stderr)
}
