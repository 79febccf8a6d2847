// SPDX-License-Identifier: MIT

//! # thpoff
//!
//! Runs a program with transparent huge pages disabled for its process.

pub mod launch;

pub use launch::error::LaunchError;

#[cfg(unix)]
pub use launch::{invocation::Invocation, run};
