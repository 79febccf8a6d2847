// SPDX-License-Identifier: MIT

//! `thpoff <program> [args...]`
//!
//! Runs `program` with transparent huge pages disabled.

use std::process::ExitCode;

#[cfg(unix)]
fn main() -> ExitCode {
    match thpoff::run(std::env::args_os()) {
        Ok(never) => match never {},
        Err(e) => {
            if e.is_reported() {
                eprintln!("{e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(not(unix))]
fn main() -> ExitCode {
    eprintln!("ERROR: thpoff is only implemented for UNIX");
    ExitCode::from(thpoff::launch::error::FAILURE_EXIT_CODE)
}
